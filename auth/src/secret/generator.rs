use rand::rngs::OsRng;
use rand::RngCore;

use super::errors::GeneratorError;
use super::policy::PasswordPolicy;
use super::policy::DIGITS;

/// Maximum length of any generated secret string.
///
/// Caps allocation and entropy consumption per call.
pub const MAX_SECRET_LENGTH: usize = 4096;

/// Minimum pass-code length; shorter requests are rounded up.
pub const MIN_PASSCODE_LENGTH: usize = 4;

/// Generator for cryptographically strong random strings.
///
/// Backed by the operating system CSPRNG. Stateless; independent of the
/// token subsystem.
pub struct SecretGenerator;

impl SecretGenerator {
    /// Create a new generator instance.
    pub fn new() -> Self {
        Self
    }

    /// Generate a random password from a character-set policy.
    ///
    /// # Arguments
    /// * `policy` - Output length and character-class toggles
    ///
    /// # Returns
    /// Random string of exactly `policy.length` pool characters
    ///
    /// # Errors
    /// * `LengthTooLarge` - Requested length exceeds [`MAX_SECRET_LENGTH`]
    /// * `EmptyPool` - Resolved character pool is empty
    pub fn generate_password(&self, policy: &PasswordPolicy) -> Result<String, GeneratorError> {
        let pool = policy.character_pool();
        Self::random_string(policy.length, &pool)
    }

    /// Generate a numeric pass-code.
    ///
    /// # Arguments
    /// * `min_length` - Requested length; rounded up to [`MIN_PASSCODE_LENGTH`]
    ///
    /// # Returns
    /// Random digit string of length `max(min_length, 4)`
    ///
    /// # Errors
    /// * `LengthTooLarge` - Requested length exceeds [`MAX_SECRET_LENGTH`]
    pub fn generate_passcode(&self, min_length: usize) -> Result<String, GeneratorError> {
        let pool: Vec<char> = DIGITS.chars().collect();
        Self::random_string(min_length.max(MIN_PASSCODE_LENGTH), &pool)
    }

    fn random_string(length: usize, pool: &[char]) -> Result<String, GeneratorError> {
        if length > MAX_SECRET_LENGTH {
            return Err(GeneratorError::LengthTooLarge {
                max: MAX_SECRET_LENGTH,
                actual: length,
            });
        }

        if pool.is_empty() {
            return Err(GeneratorError::EmptyPool);
        }

        let mut result = String::with_capacity(length);
        for _ in 0..length {
            // One 64-bit draw per output character, reduced modulo the pool
            // size. The reduction carries a bias toward the front of the
            // pool that is negligible for pools vastly smaller than 2^64;
            // this residual bias is accepted rather than rejection-sampled.
            let value = OsRng.next_u64();
            let index = (value % pool.len() as u64) as usize;
            result.push(pool[index]);
        }

        Ok(result)
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_has_exact_length() {
        let generator = SecretGenerator::new();
        let policy = PasswordPolicy::new(12).with_uppercase().with_digits();

        let password = generator
            .generate_password(&policy)
            .expect("Failed to generate password");

        assert_eq!(password.chars().count(), 12);
    }

    #[test]
    fn test_password_stays_within_pool() {
        let generator = SecretGenerator::new();
        let policy = PasswordPolicy::new(12).with_uppercase().with_digits();

        for _ in 0..1_000 {
            let password = generator
                .generate_password(&policy)
                .expect("Failed to generate password");
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_lowercase_only_when_all_toggles_off() {
        let generator = SecretGenerator::new();
        let policy = PasswordPolicy::new(8);

        for _ in 0..10_000 {
            let password = generator
                .generate_password(&policy)
                .expect("Failed to generate password");
            assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_zero_length_password_is_empty() {
        let generator = SecretGenerator::new();

        let password = generator
            .generate_password(&PasswordPolicy::new(0))
            .expect("Failed to generate password");

        assert!(password.is_empty());
    }

    #[test]
    fn test_oversized_request_is_rejected() {
        let generator = SecretGenerator::new();

        let result = generator.generate_password(&PasswordPolicy::new(MAX_SECRET_LENGTH + 1));
        assert_eq!(
            result.err(),
            Some(GeneratorError::LengthTooLarge {
                max: MAX_SECRET_LENGTH,
                actual: MAX_SECRET_LENGTH + 1,
            })
        );
    }

    #[test]
    fn test_passcode_length_is_clamped_to_minimum() {
        let generator = SecretGenerator::new();

        for min_length in 0..MIN_PASSCODE_LENGTH {
            let passcode = generator
                .generate_passcode(min_length)
                .expect("Failed to generate passcode");
            assert_eq!(passcode.chars().count(), MIN_PASSCODE_LENGTH);
            assert!(passcode.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_passcode_honors_longer_requests() {
        let generator = SecretGenerator::new();

        let passcode = generator
            .generate_passcode(8)
            .expect("Failed to generate passcode");

        assert_eq!(passcode.chars().count(), 8);
        assert!(passcode.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_consecutive_passwords_differ() {
        let generator = SecretGenerator::new();
        let policy = PasswordPolicy::new(32).with_uppercase().with_digits();

        let first = generator
            .generate_password(&policy)
            .expect("Failed to generate password");
        let second = generator
            .generate_password(&policy)
            .expect("Failed to generate password");

        assert_ne!(first, second);
    }
}
