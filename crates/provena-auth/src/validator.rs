//! Token validation against a provider-fetched signing key.

use crate::claims::ProvisioningClaims;
use crate::error::AuthError;
use crate::jwt::{decode_token, ValidationConfig};
use provena_secrets::SecretProvider;
use std::sync::Arc;
use tracing::debug;

/// Logical name of the token signing key in the secret provider.
pub const SIGNING_KEY_SECRET: &str = "token_signing_key";

/// Validates bearer tokens using a signing key fetched from a `SecretProvider`.
///
/// The key is fetched on every call. Caching, when enabled, lives inside the
/// provider so the validator stays oblivious to key lifetime policy.
#[derive(Clone)]
pub struct TokenValidator {
    secrets: Arc<dyn SecretProvider>,
    config: ValidationConfig,
}

impl TokenValidator {
    /// Create a validator with default validation settings.
    pub fn new(secrets: Arc<dyn SecretProvider>) -> Self {
        Self {
            secrets,
            config: ValidationConfig::default(),
        }
    }

    /// Create a validator with custom validation settings.
    pub fn with_config(secrets: Arc<dyn SecretProvider>, config: ValidationConfig) -> Self {
        Self { secrets, config }
    }

    /// Validate a raw authorization header value and return its claims.
    ///
    /// Accepts the token with or without a `Bearer ` prefix.
    ///
    /// # Errors
    ///
    /// `AuthError::KeyUnavailable` when the signing key cannot be fetched;
    /// any other variant means the token itself failed validation.
    pub async fn validate(&self, raw: &str) -> Result<ProvisioningClaims, AuthError> {
        let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
        if token.is_empty() {
            return Err(AuthError::InvalidToken("Empty token".to_string()));
        }

        let key = self.secrets.get_secret(SIGNING_KEY_SECRET).await?;
        debug!(provider = self.secrets.provider_type(), "signing key fetched");

        decode_token(token, &key.value, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encode_token;
    use async_trait::async_trait;
    use provena_secrets::{SecretError, SecretValue};

    const TEST_KEY: &[u8] = b"validator-test-key";

    struct StaticSecretProvider {
        value: Vec<u8>,
    }

    #[async_trait]
    impl SecretProvider for StaticSecretProvider {
        async fn get_secret(&self, name: &str) -> Result<SecretValue, SecretError> {
            Ok(SecretValue::new(name, self.value.clone()))
        }

        async fn health_check(&self) -> Result<bool, SecretError> {
            Ok(true)
        }

        fn provider_type(&self) -> &'static str {
            "static"
        }
    }

    struct FailingSecretProvider;

    #[async_trait]
    impl SecretProvider for FailingSecretProvider {
        async fn get_secret(&self, _name: &str) -> Result<SecretValue, SecretError> {
            Err(SecretError::ProviderUnavailable {
                provider: "static".to_string(),
                detail: "simulated outage".to_string(),
            })
        }

        async fn health_check(&self) -> Result<bool, SecretError> {
            Ok(false)
        }

        fn provider_type(&self) -> &'static str {
            "static"
        }
    }

    fn validator() -> TokenValidator {
        TokenValidator::new(Arc::new(StaticSecretProvider {
            value: TEST_KEY.to_vec(),
        }))
    }

    fn signed_token() -> String {
        let claims = ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .expires_in_secs(3600)
            .build();
        encode_token(&claims, TEST_KEY).unwrap()
    }

    #[tokio::test]
    async fn test_validate_accepts_bearer_prefix() {
        let token = signed_token();

        let claims = validator().validate(&format!("Bearer {token}")).await.unwrap();
        assert_eq!(claims.data.tenan, "acme");

        let claims = validator().validate(&token).await.unwrap();
        assert_eq!(claims.data.tenan, "acme");
    }

    #[tokio::test]
    async fn test_validate_empty_token() {
        let err = validator().validate("Bearer ").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
        assert!(!err.is_key_failure());
    }

    #[tokio::test]
    async fn test_validate_wrong_key_is_not_key_failure() {
        let claims = ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .expires_in_secs(3600)
            .build();
        let token = encode_token(&claims, b"some-other-key").unwrap();

        let err = validator().validate(&token).await.unwrap_err();
        assert!(err.is_invalid_signature());
        assert!(!err.is_key_failure());
    }

    #[tokio::test]
    async fn test_validate_key_fetch_failure() {
        let validator = TokenValidator::new(Arc::new(FailingSecretProvider));
        let err = validator.validate(&signed_token()).await.unwrap_err();
        assert!(err.is_key_failure());
    }
}
