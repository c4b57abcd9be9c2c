use thiserror::Error;

use auth::BuildError;
use auth::GeneratorError;
use auth::KeyError;
use auth::ValidationFailure;

/// Error for UserId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("User id must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for identity store operations
///
/// The store itself is external; these classify its failures at the port
/// boundary.
#[derive(Debug, Clone, Error)]
pub enum IdentityStoreError {
    #[error("Identity store unavailable: {0}")]
    Unavailable(String),

    #[error("Identity store operation failed: {0}")]
    Operation(String),
}

/// Top-level error for account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user id: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token rejected: {0}")]
    TokenRejected(ValidationFailure),

    // Core auth errors
    #[error("Signing key rejected: {0}")]
    Key(#[from] KeyError),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(#[from] BuildError),

    #[error("Credential generation failed: {0}")]
    Credential(#[from] GeneratorError),

    // Infrastructure errors
    #[error("Identity store error: {0}")]
    Store(#[from] IdentityStoreError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Unknown(err.to_string())
    }
}
