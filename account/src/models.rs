use std::fmt;
use std::str::FromStr;

use auth::ValidatedToken;

use crate::errors::EmailError;
use crate::errors::UserIdError;

/// Name of the custom claim carrying the comma-joined role names.
pub const ROLES_CLAIM: &str = "roles";

/// User identifier type
///
/// Opaque: the identity store owns the format; this crate only requires it
/// to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier supplied by the identity store.
    ///
    /// # Arguments
    /// * `id` - Raw identifier string
    ///
    /// # Returns
    /// Validated UserId value object
    ///
    /// # Errors
    /// * `Empty` - Identifier is empty
    pub fn new(id: impl ToString) -> Result<Self, UserIdError> {
        let id = id.to_string();
        if id.is_empty() {
            return Err(UserIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Get the identifier as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account entity as exposed by the external identity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub full_name: String,
}

/// Token-issuance settings resolved by the caller's configuration layer.
///
/// Values arrive as plain strings; this crate performs no configuration
/// loading of its own.
#[derive(Clone)]
pub struct AuthConfig {
    pub signing_secret: String,
    pub issuer: String,
    pub audience: String,
    pub token_lifetime_minutes: i64,
}

// Manual Debug keeps the signing secret out of log output.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("signing_secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_lifetime_minutes", &self.token_lifetime_minutes)
            .finish()
    }
}

/// Result of successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed bearer access token
    pub access_token: String,
}

/// Session attributes extracted from a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSession {
    pub user_id: String,
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl From<ValidatedToken> for TokenSession {
    fn from(token: ValidatedToken) -> Self {
        let roles = token
            .claims
            .get(ROLES_CLAIM)
            .map(|joined| joined.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            user_id: token.subject,
            email: token.email,
            roles,
        }
    }
}
