pub mod candidate;
pub mod error;
pub mod sequence;

pub use candidate::Candidate;
pub use error::{PrimesError, SequenceError};
pub use sequence::PrimeGenerator;
