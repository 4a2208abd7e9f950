//! Environment variable secret provider.
//!
//! Maps logical secret names to environment variable names using
//! uppercase + underscore convention. This is the default provider
//! for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::{SecretError, SecretProvider, SecretValue};

/// Secret provider that reads secrets from environment variables.
///
/// Logical names are mapped to env var names via the `mappings` `HashMap`,
/// or by converting to uppercase if no explicit mapping exists.
#[derive(Debug)]
pub struct EnvSecretProvider {
    /// Explicit logical name → env var name mappings from `SECRET_MAP_*` vars.
    mappings: HashMap<String, String>,
}

impl EnvSecretProvider {
    /// Create a new `EnvSecretProvider` with the given logical name mappings.
    #[must_use]
    pub fn new(mappings: HashMap<String, String>) -> Self {
        Self { mappings }
    }

    /// Resolve a logical secret name to an environment variable name.
    fn resolve_env_var_name(&self, logical_name: &str) -> String {
        if let Some(mapped) = self.mappings.get(logical_name) {
            // For the env provider the mapped value IS the env var name
            mapped.clone()
        } else {
            logical_name.to_uppercase()
        }
    }
}

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn get_secret(&self, name: &str) -> Result<SecretValue, SecretError> {
        let env_var = self.resolve_env_var_name(name);

        match std::env::var(&env_var) {
            Ok(value) if !value.is_empty() => {
                tracing::debug!(
                    secret_name = name,
                    env_var = %env_var,
                    "Secret loaded from environment variable"
                );
                Ok(SecretValue::new(name, value.into_bytes()))
            }
            // Empty value treated as not found
            Ok(_) => Err(SecretError::NotFound {
                name: name.to_string(),
            }),
            Err(_) => Err(SecretError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    async fn health_check(&self) -> Result<bool, SecretError> {
        Ok(true)
    }

    fn provider_type(&self) -> &'static str {
        "env"
    }
}
