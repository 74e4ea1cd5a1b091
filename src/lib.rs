pub mod contracts;
pub mod driver;
pub mod generator;
pub mod metrics;
