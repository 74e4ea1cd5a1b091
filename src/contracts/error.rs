use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimesError {
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The next candidate does not fit in the sequence's integer width.
    #[error("Sequence overflow: no candidate left in {width}")]
    Overflow { width: &'static str },
}
