use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// Claim names reserved for the registered payload fields.
///
/// Custom claims may not occupy these names.
pub const RESERVED_CLAIMS: &[&str] = &["sub", "jti", "iss", "aud", "exp", "iat"];

/// Name of the custom claim carrying the account email.
pub const EMAIL_CLAIM: &str = "email";

/// Claim set embedded in a signed token payload.
///
/// Registered fields are always present on issued tokens; custom claims are
/// string-valued and flattened into the payload. The ordered map keeps
/// serialization deterministic for a given claim set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user/entity identifier)
    pub sub: String,

    /// Unique token identifier, fresh per issued token
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Custom claims (flattened into the payload)
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Claims {
    /// Get a custom claim value by name.
    pub fn custom(&self, name: &str) -> Option<&str> {
        self.extra.get(name).map(String::as_str)
    }

    /// Get the email claim (convenience method).
    pub fn email(&self) -> Option<&str> {
        self.custom(EMAIL_CLAIM)
    }

    /// Check if the claim set is expired at the given Unix timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> Claims {
        let mut extra = BTreeMap::new();
        extra.insert(EMAIL_CLAIM.to_string(), "alice@example.com".to_string());
        extra.insert("role".to_string(), "Admin".to_string());

        Claims {
            sub: "user123".to_string(),
            jti: "0c7f1e3a".to_string(),
            iss: "my-service".to_string(),
            aud: "my-clients".to_string(),
            exp: 1_700_000_300,
            iat: 1_700_000_000,
            extra,
        }
    }

    #[test]
    fn test_custom_claim_lookup() {
        let claims = sample_claims();

        assert_eq!(claims.custom("role"), Some("Admin"));
        assert_eq!(claims.email(), Some("alice@example.com"));
        assert_eq!(claims.custom("missing"), None);
    }

    #[test]
    fn test_is_expired() {
        let claims = sample_claims();

        assert!(!claims.is_expired(1_700_000_299));
        assert!(!claims.is_expired(1_700_000_300)); // Exactly at expiration
        assert!(claims.is_expired(1_700_000_301));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let first = serde_json::to_string(&sample_claims()).expect("Failed to serialize");
        let second = serde_json::to_string(&sample_claims()).expect("Failed to serialize");

        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_preserves_custom_claims() {
        let claims = sample_claims();

        let json = serde_json::to_string(&claims).expect("Failed to serialize");
        let decoded: Claims = serde_json::from_str(&json).expect("Failed to deserialize");

        assert_eq!(decoded, claims);
    }
}
