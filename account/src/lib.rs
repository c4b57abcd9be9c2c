//! Account authentication service
//!
//! Coordinates an external identity store with the token and secret
//! primitives from the `auth` crate:
//! - Credential login producing a signed bearer access token
//! - Bearer-token validation into typed session attributes
//! - One-time credential issuance (pass-codes, temporary passwords)
//!
//! Account storage, password hashing, HTTP routing, and configuration
//! loading stay outside this crate: the store is reached through the
//! [`IdentityStore`] port and settings arrive as the plain-data
//! [`AuthConfig`].

pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

// Re-export commonly used items
pub use errors::AccountError;
pub use errors::IdentityStoreError;
pub use models::AuthConfig;
pub use models::AuthResponse;
pub use models::EmailAddress;
pub use models::TokenSession;
pub use models::User;
pub use models::UserId;
pub use ports::IdentityStore;
pub use service::AccountService;
