//! Observability metrics for prime sequences.
//!
//! Counters are lock-free atomics, so one [`SequenceMetrics`] can be shared
//! by sequences running on different threads.

pub mod histogram;
pub mod registry;

pub use histogram::Histogram;
pub use registry::SequenceMetrics;
