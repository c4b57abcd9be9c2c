use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::KeyError;

/// Minimum signing secret length in bytes.
///
/// RFC 7518 §3.2 requires HMAC keys at least as long as the hash output;
/// tokens are signed with HMAC-SHA-512.
pub const MIN_SECRET_BYTES: usize = 64;

/// Symmetric key material for signing and verifying tokens.
///
/// Wraps a configuration-supplied secret string into HMAC key material
/// tagged with the signing algorithm. The key is immutable once built and
/// safe to share across concurrent builds and validations.
///
/// Does not implement `Debug` or `Display`; the raw secret must never
/// reach logs or error output.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
}

impl SigningKey {
    /// Create signing key material from a secret string.
    ///
    /// Tokens issued with this key are signed with HMAC-SHA-512.
    ///
    /// # Arguments
    /// * `secret` - Raw secret resolved by the caller's configuration layer
    ///
    /// # Returns
    /// SigningKey instance
    ///
    /// # Errors
    /// * `EmptySecret` - Secret is empty
    /// * `TooShort` - Secret is shorter than [`MIN_SECRET_BYTES`]
    pub fn new(secret: &str) -> Result<Self, KeyError> {
        if secret.is_empty() {
            return Err(KeyError::EmptySecret);
        }

        if secret.len() < MIN_SECRET_BYTES {
            return Err(KeyError::TooShort {
                min: MIN_SECRET_BYTES,
                actual: secret.len(),
            });
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS512,
        })
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}
