use std::collections::BTreeMap;

use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Header;
use uuid::Uuid;

use super::claims::Claims;
use super::claims::RESERVED_CLAIMS;
use super::errors::BuildError;
use super::key::SigningKey;

/// Token lifetime in minutes when the builder is not given one.
pub const DEFAULT_EXPIRY_MINUTES: i64 = 5;

/// A signed bearer token.
///
/// Immutable once built: the compact serialized string plus the claim set it
/// was built from. Created only by [`TokenBuilder::build`].
///
/// Does not implement `Debug`; serialized tokens are bearer credentials and
/// must not reach logs.
#[derive(Clone)]
pub struct Token {
    value: String,
    claims: Claims,
}

impl Token {
    /// Get the compact `header.payload.signature` string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the token, returning the compact string.
    pub fn into_string(self) -> String {
        self.value
    }

    /// Get the claim set the token was built from.
    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}

/// Fluent builder assembling a claim set into a signed token.
///
/// Signing key, subject, issuer, and audience are mandatory; expiry
/// (default 5 minutes) and custom claims are optional. Custom claim
/// additions are first-set-wins: an addition whose name is already present,
/// or is one of the reserved payload names, leaves the existing value in
/// place.
///
/// # Examples
/// ```
/// use auth::{SigningKey, TokenBuilder};
///
/// let secret = "unit-test-signing-secret-unit-test-signing-secret-64-bytes-long!";
/// let token = TokenBuilder::new()
///     .with_signing_key(SigningKey::new(secret).unwrap())
///     .with_subject("user123")
///     .with_issuer("my-service")
///     .with_audience("my-clients")
///     .with_expiry(60)
///     .with_claim("role", "Admin")
///     .build()
///     .unwrap();
///
/// assert_eq!(token.claims().custom("role"), Some("Admin"));
/// ```
pub struct TokenBuilder {
    key: Option<SigningKey>,
    subject: String,
    issuer: String,
    audience: String,
    expiry_minutes: i64,
    claims: BTreeMap<String, String>,
}

impl TokenBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            key: None,
            subject: String::new(),
            issuer: String::new(),
            audience: String::new(),
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
            claims: BTreeMap::new(),
        }
    }

    /// Set the signing key (mandatory).
    pub fn with_signing_key(mut self, key: SigningKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Set the subject claim (mandatory).
    pub fn with_subject(mut self, subject: impl ToString) -> Self {
        self.subject = subject.to_string();
        self
    }

    /// Set the issuer (mandatory).
    pub fn with_issuer(mut self, issuer: impl ToString) -> Self {
        self.issuer = issuer.to_string();
        self
    }

    /// Set the audience (mandatory).
    pub fn with_audience(mut self, audience: impl ToString) -> Self {
        self.audience = audience.to_string();
        self
    }

    /// Set the token lifetime in minutes.
    ///
    /// Zero and negative lifetimes are accepted and produce tokens that are
    /// already expired, which is useful in tests.
    pub fn with_expiry(mut self, minutes: i64) -> Self {
        self.expiry_minutes = minutes;
        self
    }

    /// Add a custom string claim.
    ///
    /// First-set-wins: the addition is dropped when `name` is already
    /// present or is a reserved payload name.
    pub fn with_claim(mut self, name: impl ToString, value: impl ToString) -> Self {
        let name = name.to_string();
        if !RESERVED_CLAIMS.contains(&name.as_str()) && !self.claims.contains_key(&name) {
            self.claims.insert(name, value.to_string());
        }
        self
    }

    /// Add several custom claims with the same first-set-wins rule.
    pub fn with_claims(mut self, claims: impl IntoIterator<Item = (String, String)>) -> Self {
        for (name, value) in claims {
            self = self.with_claim(name, value);
        }
        self
    }

    /// Assemble, timestamp, and sign the accumulated claim set.
    ///
    /// The payload carries a fresh UUIDv4 `jti` for replay/audit
    /// correlation, `iat` = current UTC time, and `exp` = `iat` plus the
    /// configured lifetime. Signing uses HMAC-SHA-512 over the compact
    /// header and payload.
    ///
    /// # Returns
    /// Signed immutable [`Token`]
    ///
    /// # Errors
    /// * `MissingField` - Signing key, subject, issuer, or audience unset
    /// * `Encoding` - Serialization or signing failed
    pub fn build(self) -> Result<Token, BuildError> {
        let key = self.key.ok_or(BuildError::MissingField("signing key"))?;

        if self.subject.is_empty() {
            return Err(BuildError::MissingField("subject"));
        }

        if self.issuer.is_empty() {
            return Err(BuildError::MissingField("issuer"));
        }

        if self.audience.is_empty() {
            return Err(BuildError::MissingField("audience"));
        }

        let now = Utc::now();
        let expiry = now + Duration::minutes(self.expiry_minutes);

        let claims = Claims {
            sub: self.subject,
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer,
            aud: self.audience,
            exp: expiry.timestamp(),
            iat: now.timestamp(),
            extra: self.claims,
        };

        let header = Header::new(key.algorithm());
        let value = encode(&header, &claims, key.encoding())
            .map_err(|e| BuildError::Encoding(e.to_string()))?;

        Ok(Token { value, claims })
    }
}

impl Default for TokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
