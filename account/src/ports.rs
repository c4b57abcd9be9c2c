use async_trait::async_trait;

use crate::errors::IdentityStoreError;
use crate::models::EmailAddress;
use crate::models::User;

/// Port to the external identity store.
///
/// The store owns account records, password hashes, and role assignments;
/// this crate consumes exactly the three lookups below.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// Retrieve a user by email address.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    ///
    /// # Returns
    /// Optional user entity (None if no account matches)
    ///
    /// # Errors
    /// * `IdentityStoreError` - Store lookup failed
    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Option<User>, IdentityStoreError>;

    /// Check a plaintext password against the user's stored credential.
    ///
    /// # Arguments
    /// * `user` - User entity returned by a lookup
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// True if the password matches
    ///
    /// # Errors
    /// * `IdentityStoreError` - Store verification failed
    async fn verify_password(&self, user: &User, password: &str)
        -> Result<bool, IdentityStoreError>;

    /// List role names assigned to the user.
    ///
    /// # Arguments
    /// * `user` - User entity returned by a lookup
    ///
    /// # Returns
    /// Ordered role names (possibly empty)
    ///
    /// # Errors
    /// * `IdentityStoreError` - Store lookup failed
    async fn roles(&self, user: &User) -> Result<Vec<String>, IdentityStoreError>;
}
