//! Pluggable secret provider abstraction for the provena platform.
//!
//! This crate provides a `SecretProvider` trait that abstracts retrieval of
//! the token signing key from multiple backends: environment variables (the
//! development default) and an S3 object store.
//!
//! # Usage
//!
//! ```rust,ignore
//! use provena_secrets::{SecretProviderConfig, build_provider};
//!
//! let config = SecretProviderConfig::from_env()?;
//! let provider = build_provider(&config).await?;
//! let secret = provider.get_secret("token_signing_key").await?;
//! let key_bytes = &secret.value;
//! ```

pub mod cache;
pub mod config;
pub mod provider;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

// Re-exports
pub use cache::CachedSecretProvider;
pub use config::SecretProviderConfig;
pub use provider::env::EnvSecretProvider;
pub use provider::s3::S3SecretProvider;

// ── SecretError ──────────────────────────────────────────────────────────

/// Errors returned by secret provider operations.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    /// Secret not found in provider.
    #[error("Secret not found: '{name}'")]
    NotFound { name: String },

    /// Provider is unreachable (network error, auth failure).
    #[error("Secret provider '{provider}' unavailable: {detail}")]
    ProviderUnavailable { provider: String, detail: String },

    /// Secret value is malformed (wrong format, empty, corrupt).
    #[error("Invalid secret value for '{name}': {detail}")]
    InvalidValue { name: String, detail: String },

    /// Configuration error (missing required config, invalid value).
    #[error("Secret provider configuration error: {detail}")]
    ConfigError { detail: String },
}

// ── SecretValue ──────────────────────────────────────────────────────────

/// A resolved secret value returned by any provider.
#[derive(Clone)]
pub struct SecretValue {
    /// Logical secret name (e.g., "token_signing_key").
    pub name: String,

    /// Raw secret bytes.
    pub value: Vec<u8>,

    /// Provider-specific version identifier (S3 object version ID).
    pub version: Option<String>,

    /// Timestamp when this value was fetched from the provider.
    pub loaded_at: DateTime<Utc>,
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretValue")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .field("version", &self.version)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl SecretValue {
    /// Create a new `SecretValue`.
    pub fn new(name: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            value,
            version: None,
            loaded_at: Utc::now(),
        }
    }

    /// Interpret the secret value as a UTF-8 string.
    pub fn as_str(&self) -> Result<&str, SecretError> {
        std::str::from_utf8(&self.value).map_err(|e| SecretError::InvalidValue {
            name: self.name.clone(),
            detail: format!("Not valid UTF-8: {e}"),
        })
    }
}

// ── SecretProvider Trait ──────────────────────────────────────────────────

/// Trait that all secret providers must implement.
///
/// Providers resolve logical secret names to their values from a backing
/// store (env vars, S3). A failed fetch is fatal to the request being
/// served; callers perform no retries.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Retrieve a secret by its logical name.
    ///
    /// Returns `SecretError::NotFound` if the secret does not exist in the provider.
    async fn get_secret(&self, name: &str) -> Result<SecretValue, SecretError>;

    /// Check if the provider is reachable and operational.
    ///
    /// Returns `Ok(true)` if healthy, `Ok(false)` if degraded, `Err` if unhealthy.
    async fn health_check(&self) -> Result<bool, SecretError>;

    /// Return the provider type name for logging/diagnostics.
    fn provider_type(&self) -> &'static str;
}

// ── Provider Factory ─────────────────────────────────────────────────────

/// Build a secret provider based on the given configuration.
///
/// The provider is wrapped in a `CachedSecretProvider`; a TTL of 0 (the
/// default) disables caching so every validation re-fetches the key, which
/// matches the per-request-fetch semantics of the original deployment.
pub async fn build_provider(
    config: &SecretProviderConfig,
) -> Result<Arc<dyn SecretProvider>, SecretError> {
    use config::ProviderType;

    let inner: Arc<dyn SecretProvider> = match config.provider_type {
        ProviderType::Env => {
            let p = EnvSecretProvider::new(config.secret_mappings.clone());
            Arc::new(p)
        }
        ProviderType::S3 => {
            let p = S3SecretProvider::new(config).await?;
            Arc::new(p)
        }
    };

    let cached = CachedSecretProvider::new(inner, config.cache_ttl_seconds);
    Ok(Arc::new(cached))
}
