use thiserror::Error;

/// Error type for random secret generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Requested secret length {actual} exceeds maximum {max}")]
    LengthTooLarge { max: usize, actual: usize },

    #[error("Resolved character pool is empty")]
    EmptyPool,
}
