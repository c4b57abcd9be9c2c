use thiserror::Error;

/// Error type for signing key construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Signing secret too short: minimum {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error type for token building.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Token builder is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to sign token: {0}")]
    Encoding(String),
}

/// Reason a presented token was rejected.
///
/// Rejections are routine validation outcomes, not faults; callers are
/// expected to match on every variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Token is expired")]
    Expired,

    #[error("Token signature does not verify")]
    BadSignature,

    #[error("Token issuer does not match the expected issuer")]
    BadIssuer,

    #[error("Token audience does not match the expected audience")]
    BadAudience,

    #[error("Token is not a well-formed compact token")]
    Malformed,

    #[error("Token validation failed: {0}")]
    Other(String),
}
