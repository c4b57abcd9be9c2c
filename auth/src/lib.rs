//! Bearer-token and secret generation library
//!
//! Provides the authentication core for services issuing session tokens:
//! - Signed bearer tokens: claim building, HMAC signing, and validation
//! - Cryptographically secure random secrets (passwords, numeric pass-codes)
//!
//! User storage, password verification, HTTP routing, and configuration
//! loading are collaborators outside this crate; callers pass resolved
//! secret/issuer/audience values in as plain strings.
//!
//! # Examples
//!
//! ## Issuing and validating a token
//! ```
//! use auth::{SigningKey, TokenBuilder, TokenValidation, TokenValidator};
//!
//! let secret = "unit-test-signing-secret-unit-test-signing-secret-64-bytes-long!";
//! let key = SigningKey::new(secret).unwrap();
//!
//! let token = TokenBuilder::new()
//!     .with_signing_key(key.clone())
//!     .with_subject("user123")
//!     .with_issuer("my-service")
//!     .with_audience("my-clients")
//!     .with_claim("role", "Admin")
//!     .build()
//!     .unwrap();
//!
//! let validator = TokenValidator::new(key, "my-service", "my-clients");
//! match validator.validate(token.as_str()) {
//!     TokenValidation::Valid(session) => assert_eq!(session.subject, "user123"),
//!     TokenValidation::Invalid(reason) => panic!("rejected: {}", reason),
//! }
//! ```
//!
//! ## Generating random secrets
//! ```
//! use auth::{PasswordPolicy, SecretGenerator};
//!
//! let generator = SecretGenerator::new();
//!
//! let password = generator
//!     .generate_password(&PasswordPolicy::new(12).with_uppercase().with_digits())
//!     .unwrap();
//! assert_eq!(password.chars().count(), 12);
//!
//! let passcode = generator.generate_passcode(6).unwrap();
//! assert!(passcode.chars().all(|c| c.is_ascii_digit()));
//! ```

pub mod jwt;
pub mod secret;

// Re-export commonly used items
pub use jwt::BuildError;
pub use jwt::Claims;
pub use jwt::KeyError;
pub use jwt::SigningKey;
pub use jwt::Token;
pub use jwt::TokenBuilder;
pub use jwt::TokenValidation;
pub use jwt::TokenValidator;
pub use jwt::ValidatedToken;
pub use jwt::ValidationFailure;
pub use secret::GeneratorError;
pub use secret::PasswordPolicy;
pub use secret::SecretGenerator;
