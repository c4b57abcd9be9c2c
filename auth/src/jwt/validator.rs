use std::collections::BTreeMap;

use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::EMAIL_CLAIM;
use super::errors::ValidationFailure;
use super::key::SigningKey;

/// Outcome of validating a presented token string.
///
/// A closed tagged variant rather than an error type: rejected tokens are
/// routine traffic and every caller must handle both arms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidation {
    /// Signature, issuer, audience, and expiry all checked out.
    Valid(ValidatedToken),

    /// The token was rejected for the given reason.
    Invalid(ValidationFailure),
}

impl TokenValidation {
    /// Check whether the token was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenValidation::Valid(_))
    }

    /// Convert into a `Result` for `?`-style composition.
    pub fn into_result(self) -> Result<ValidatedToken, ValidationFailure> {
        match self {
            TokenValidation::Valid(token) => Ok(token),
            TokenValidation::Invalid(reason) => Err(reason),
        }
    }
}

/// Claims extracted from a successfully validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedToken {
    /// Subject (user/entity identifier)
    pub subject: String,

    /// Email custom claim, when the token carries one
    pub email: Option<String>,

    /// All custom claims from the payload
    pub claims: BTreeMap<String, String>,
}

impl From<Claims> for ValidatedToken {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            email: claims.extra.get(EMAIL_CLAIM).cloned(),
            claims: claims.extra,
        }
    }
}

/// Verifier for presented token strings.
///
/// Holds the shared signing key and the expected issuer/audience pair.
/// Stateless across calls; one instance may serve concurrent validations.
///
/// Signature integrity is verified before any payload field is trusted, and
/// expiry is checked with zero clock-skew tolerance. Tokens signed with
/// HMAC-SHA-256 under the same secret are accepted alongside HMAC-SHA-512
/// for compatibility with previously issued tokens.
pub struct TokenValidator {
    key: SigningKey,
    issuer: String,
    audience: String,
}

impl TokenValidator {
    /// Create a validator for one issuer/audience pair.
    ///
    /// # Arguments
    /// * `key` - Key material the tokens were signed with
    /// * `issuer` - Exact issuer identifier to require
    /// * `audience` - Exact audience identifier to require
    pub fn new(key: SigningKey, issuer: impl ToString, audience: impl ToString) -> Self {
        Self {
            key,
            issuer: issuer.to_string(),
            audience: audience.to_string(),
        }
    }

    /// Validate and decode a presented token string.
    ///
    /// Never panics and never propagates an internal failure: every outcome
    /// is either `Valid` with the extracted claims or `Invalid` with a
    /// classified reason.
    pub fn validate(&self, token: &str) -> TokenValidation {
        let mut validation = Validation::new(self.key.algorithm());
        validation.algorithms = vec![Algorithm::HS512, Algorithm::HS256];
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        match decode::<Claims>(token, self.key.decoding(), &validation) {
            Ok(data) => TokenValidation::Valid(ValidatedToken::from(data.claims)),
            Err(e) => TokenValidation::Invalid(Self::classify(e)),
        }
    }

    /// Map a decode failure onto a rejection reason.
    fn classify(error: jsonwebtoken::errors::Error) -> ValidationFailure {
        match error.kind() {
            ErrorKind::ExpiredSignature => ValidationFailure::Expired,
            ErrorKind::InvalidSignature => ValidationFailure::BadSignature,
            ErrorKind::InvalidIssuer => ValidationFailure::BadIssuer,
            ErrorKind::InvalidAudience => ValidationFailure::BadAudience,
            ErrorKind::InvalidToken
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => ValidationFailure::Malformed,
            _ => ValidationFailure::Other(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use chrono::Utc;
    use jsonwebtoken::encode;
    use jsonwebtoken::EncodingKey;
    use jsonwebtoken::Header;

    use super::*;
    use crate::jwt::builder::TokenBuilder;
    use crate::jwt::Token;

    const TEST_SECRET: &str = "unit-test-signing-secret-unit-test-signing-secret-64-bytes-long!";

    fn test_key() -> SigningKey {
        SigningKey::new(TEST_SECRET).unwrap()
    }

    fn test_validator() -> TokenValidator {
        TokenValidator::new(test_key(), "my-service", "my-clients")
    }

    fn issue(expiry_minutes: i64) -> Token {
        TokenBuilder::new()
            .with_signing_key(test_key())
            .with_subject("user123")
            .with_issuer("my-service")
            .with_audience("my-clients")
            .with_expiry(expiry_minutes)
            .with_claim(EMAIL_CLAIM, "alice@example.com")
            .with_claim("role", "Admin")
            .build()
            .expect("Failed to build token")
    }

    /// Change the first character of the signature segment to a different
    /// base64url character.
    fn tamper_signature(token: &str) -> String {
        let mut parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        let mut signature: Vec<char> = parts[2].chars().collect();
        signature[0] = if signature[0] == 'A' { 'B' } else { 'A' };
        let tampered: String = signature.into_iter().collect();

        parts[2] = &tampered;
        parts.join(".")
    }

    #[test]
    fn test_round_trip_extracts_claims() {
        let token = issue(60);

        match test_validator().validate(token.as_str()) {
            TokenValidation::Valid(validated) => {
                assert_eq!(validated.subject, "user123");
                assert_eq!(validated.email.as_deref(), Some("alice@example.com"));
                assert_eq!(
                    validated.claims.get("role").map(String::as_str),
                    Some("Admin")
                );
            }
            TokenValidation::Invalid(reason) => panic!("Token rejected: {}", reason),
        }
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let token = issue(60);
        let tampered = tamper_signature(token.as_str());
        assert_ne!(tampered, token.as_str());

        let result = test_validator().validate(&tampered);
        assert_eq!(
            result,
            TokenValidation::Invalid(ValidationFailure::BadSignature)
        );
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let other_secret = "another-signing-secret-another-signing-secret-64-bytes-long!!!!!";
        let token = TokenBuilder::new()
            .with_signing_key(SigningKey::new(other_secret).unwrap())
            .with_subject("user123")
            .with_issuer("my-service")
            .with_audience("my-clients")
            .build()
            .expect("Failed to build token");

        let result = test_validator().validate(token.as_str());
        assert_eq!(
            result,
            TokenValidation::Invalid(ValidationFailure::BadSignature)
        );
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let token = issue(60);
        let validator = TokenValidator::new(test_key(), "other-service", "my-clients");

        assert_eq!(
            validator.validate(token.as_str()),
            TokenValidation::Invalid(ValidationFailure::BadIssuer)
        );
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let token = issue(60);
        let validator = TokenValidator::new(test_key(), "my-service", "other-clients");

        assert_eq!(
            validator.validate(token.as_str()),
            TokenValidation::Invalid(ValidationFailure::BadAudience)
        );
    }

    #[test]
    fn test_negative_expiry_is_rejected_as_expired() {
        let token = issue(-1);

        assert_eq!(
            test_validator().validate(token.as_str()),
            TokenValidation::Invalid(ValidationFailure::Expired)
        );
    }

    #[test]
    fn test_zero_expiry_is_rejected_strictly_after_issuance() {
        let token = issue(0);

        // Expiry equals issuance time; crossing the next second boundary
        // makes the token expired under zero clock-skew tolerance.
        thread::sleep(Duration::from_millis(1100));

        assert_eq!(
            test_validator().validate(token.as_str()),
            TokenValidation::Invalid(ValidationFailure::Expired)
        );
    }

    #[test]
    fn test_malformed_strings_are_rejected() {
        let validator = test_validator();

        for garbage in ["", "not-a-token", "still.not", "a.b.c.d", "%%%.###.!!!"] {
            assert_eq!(
                validator.validate(garbage),
                TokenValidation::Invalid(ValidationFailure::Malformed),
                "Expected Malformed for {:?}",
                garbage
            );
        }
    }

    #[test]
    fn test_legacy_hs256_token_is_accepted() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user123".to_string(),
            jti: "legacy-token".to_string(),
            iss: "my-service".to_string(),
            aud: "my-clients".to_string(),
            exp: now + 300,
            iat: now,
            extra: BTreeMap::new(),
        };

        let header = Header::new(Algorithm::HS256);
        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .expect("Failed to encode legacy token");

        assert!(test_validator().validate(&token).is_valid());
    }

    #[test]
    fn test_into_result() {
        let token = issue(60);

        let validated = test_validator()
            .validate(token.as_str())
            .into_result()
            .expect("Token rejected");
        assert_eq!(validated.subject, "user123");

        let reason = test_validator()
            .validate("garbage")
            .into_result()
            .expect_err("Garbage accepted");
        assert_eq!(reason, ValidationFailure::Malformed);
    }
}
