use std::sync::Arc;

use auth::jwt::EMAIL_CLAIM;
use auth::PasswordPolicy;
use auth::SecretGenerator;
use auth::SigningKey;
use auth::TokenBuilder;
use auth::TokenValidation;
use auth::TokenValidator;

use crate::errors::AccountError;
use crate::models::AuthConfig;
use crate::models::AuthResponse;
use crate::models::EmailAddress;
use crate::models::TokenSession;
use crate::models::ROLES_CLAIM;
use crate::ports::IdentityStore;

/// Account authentication service.
///
/// Coordinates the external identity store with token issuance, token
/// validation, and one-time credential generation. The store is injected
/// explicitly; there is no global service registry.
pub struct AccountService<S>
where
    S: IdentityStore,
{
    store: Arc<S>,
    key: SigningKey,
    issuer: String,
    audience: String,
    token_lifetime_minutes: i64,
    validator: TokenValidator,
    secrets: SecretGenerator,
}

impl<S> AccountService<S>
where
    S: IdentityStore,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Identity store implementation
    /// * `config` - Resolved token-issuance settings
    ///
    /// # Returns
    /// Configured account service instance
    ///
    /// # Errors
    /// * `Key` - Signing secret is empty or too short
    pub fn new(store: Arc<S>, config: AuthConfig) -> Result<Self, AccountError> {
        let key = SigningKey::new(&config.signing_secret)?;
        let validator = TokenValidator::new(key.clone(), &config.issuer, &config.audience);

        Ok(Self {
            store,
            key,
            issuer: config.issuer,
            audience: config.audience,
            token_lifetime_minutes: config.token_lifetime_minutes,
            validator,
            secrets: SecretGenerator::new(),
        })
    }

    /// Verify credentials and issue a bearer access token.
    ///
    /// The token's subject is the user id; email and role names travel as
    /// custom claims (roles comma-joined, claim names being unique).
    ///
    /// # Arguments
    /// * `email` - Login email address
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// AuthResponse with the signed access token
    ///
    /// # Errors
    /// * `UserNotFound` - No account matches the email
    /// * `InvalidCredentials` - Password does not match
    /// * `Store` - Identity store operation failed
    /// * `TokenIssuance` - Token building failed
    pub async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<AuthResponse, AccountError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        let password_matches = self.store.verify_password(&user, password).await?;
        if !password_matches {
            tracing::debug!("Login rejected for user {}: password mismatch", user.id);
            return Err(AccountError::InvalidCredentials);
        }

        let roles = self.store.roles(&user).await?;

        let mut builder = TokenBuilder::new()
            .with_signing_key(self.key.clone())
            .with_subject(user.id.as_str())
            .with_issuer(&self.issuer)
            .with_audience(&self.audience)
            .with_expiry(self.token_lifetime_minutes)
            .with_claim(EMAIL_CLAIM, user.email.as_str());

        if !roles.is_empty() {
            builder = builder.with_claim(ROLES_CLAIM, roles.join(","));
        }

        let token = builder.build()?;
        tracing::debug!("Issued access token for user {}", user.id);

        Ok(AuthResponse {
            access_token: token.into_string(),
        })
    }

    /// Validate a presented bearer token and extract its session.
    ///
    /// # Arguments
    /// * `token` - Compact token string
    ///
    /// # Returns
    /// TokenSession with user id, email, and roles
    ///
    /// # Errors
    /// * `TokenRejected` - Token failed validation, with the reason
    pub fn validate_token(&self, token: &str) -> Result<TokenSession, AccountError> {
        match self.validator.validate(token) {
            TokenValidation::Valid(validated) => Ok(TokenSession::from(validated)),
            TokenValidation::Invalid(reason) => {
                tracing::debug!("Token rejected: {}", reason);
                Err(AccountError::TokenRejected(reason))
            }
        }
    }

    /// Generate a numeric one-time pass-code (step-up or recovery flows).
    ///
    /// # Arguments
    /// * `min_length` - Requested length; rounded up to the pass-code minimum
    ///
    /// # Errors
    /// * `Credential` - Requested length exceeds the generator bound
    pub fn one_time_passcode(&self, min_length: usize) -> Result<String, AccountError> {
        Ok(self.secrets.generate_passcode(min_length)?)
    }

    /// Generate a temporary password for account provisioning flows.
    ///
    /// # Arguments
    /// * `policy` - Output length and character-class toggles
    ///
    /// # Errors
    /// * `Credential` - Policy length exceeds the generator bound
    pub fn temporary_password(&self, policy: &PasswordPolicy) -> Result<String, AccountError> {
        Ok(self.secrets.generate_password(policy)?)
    }
}
