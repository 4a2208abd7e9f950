//! Secret provider configuration parsed from environment variables.

use std::collections::HashMap;
use std::env;

use crate::SecretError;

/// Which secret provider to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Read from environment variables (default, development-friendly).
    Env,
    /// Read from an S3 object (production key material).
    S3,
}

impl ProviderType {
    /// Parse from string value (case-insensitive).
    pub fn from_str_value(s: &str) -> Result<Self, SecretError> {
        match s.to_lowercase().as_str() {
            "env" | "environment" => Ok(Self::Env),
            "s3" => Ok(Self::S3),
            other => Err(SecretError::ConfigError {
                detail: format!("Unknown SECRET_PROVIDER value '{other}'. Valid options: env, s3"),
            }),
        }
    }
}

/// Configuration specific to the S3 provider.
///
/// A location descriptor for one object holding the signing key material.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Bucket holding the key object.
    pub bucket: String,
    /// Object key within the bucket.
    pub object_key: String,
    /// AWS region of the bucket.
    pub region: String,
}

impl S3Config {
    /// Validate that the location descriptor is non-empty.
    pub fn validate(&self) -> Result<(), SecretError> {
        if self.bucket.is_empty() || self.object_key.is_empty() || self.region.is_empty() {
            return Err(SecretError::ConfigError {
                detail: "S3 location descriptor requires bucket, object key and region".to_string(),
            });
        }
        Ok(())
    }
}

/// Complete secret provider configuration.
#[derive(Debug, Clone)]
pub struct SecretProviderConfig {
    /// Which provider to use.
    pub provider_type: ProviderType,
    /// Maps logical name → provider-specific location (env var name).
    pub secret_mappings: HashMap<String, String>,
    /// Cache TTL in seconds. 0 (the default) disables caching so every
    /// validation re-fetches the key from the provider.
    pub cache_ttl_seconds: u64,
    /// S3-specific config (required if `provider_type` == S3).
    pub s3: Option<S3Config>,
}

impl SecretProviderConfig {
    /// Parse configuration from environment variables.
    ///
    /// Reads:
    /// - `SECRET_PROVIDER` — provider type (default: "env")
    /// - `SECRET_CACHE_TTL_SECONDS` — cache TTL (default: 0 = per-request fetch)
    /// - `SECRET_MAP_{NAME}` — logical secret name mappings
    /// - `SIGNING_KEY_BUCKET`, `SIGNING_KEY_OBJECT`, `AWS_REGION` — S3 location
    pub fn from_env() -> Result<Self, SecretError> {
        let provider_type = match env::var("SECRET_PROVIDER") {
            Ok(s) if !s.is_empty() => ProviderType::from_str_value(&s)?,
            _ => ProviderType::Env,
        };

        let cache_ttl_seconds = env::var("SECRET_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(0);

        let secret_mappings = Self::parse_secret_mappings();

        let s3 = if provider_type == ProviderType::S3 {
            Some(Self::parse_s3_config()?)
        } else {
            None
        };

        Ok(Self {
            provider_type,
            secret_mappings,
            cache_ttl_seconds,
            s3,
        })
    }

    /// Parse `SECRET_MAP_*` environment variables into a `HashMap`.
    ///
    /// e.g., `SECRET_MAP_TOKEN_SIGNING_KEY=JWT_KEY` → {"token_signing_key": "JWT_KEY"}
    fn parse_secret_mappings() -> HashMap<String, String> {
        let mut mappings = HashMap::new();
        for (key, value) in env::vars() {
            if let Some(name) = key.strip_prefix("SECRET_MAP_") {
                let logical_name = name.to_lowercase();
                mappings.insert(logical_name, value);
            }
        }
        mappings
    }

    /// Parse the S3 location descriptor.
    fn parse_s3_config() -> Result<S3Config, SecretError> {
        let bucket = env::var("SIGNING_KEY_BUCKET").map_err(|_| SecretError::ConfigError {
            detail: "SIGNING_KEY_BUCKET is required when SECRET_PROVIDER=s3".to_string(),
        })?;

        let object_key = env::var("SIGNING_KEY_OBJECT").map_err(|_| SecretError::ConfigError {
            detail: "SIGNING_KEY_OBJECT is required when SECRET_PROVIDER=s3".to_string(),
        })?;

        let region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .map_err(|_| SecretError::ConfigError {
                detail: "AWS_REGION is required when SECRET_PROVIDER=s3".to_string(),
            })?;

        let config = S3Config {
            bucket,
            object_key,
            region,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_from_str() {
        assert_eq!(
            ProviderType::from_str_value("env").unwrap(),
            ProviderType::Env
        );
        assert_eq!(
            ProviderType::from_str_value("ENV").unwrap(),
            ProviderType::Env
        );
        assert_eq!(ProviderType::from_str_value("s3").unwrap(), ProviderType::S3);
        assert!(ProviderType::from_str_value("invalid").is_err());
    }

    #[test]
    fn test_s3_config_validate() {
        let config = S3Config {
            bucket: "keys".to_string(),
            object_key: "token.txt".to_string(),
            region: "ap-southeast-1".to_string(),
        };
        assert!(config.validate().is_ok());

        let empty = S3Config {
            bucket: String::new(),
            object_key: "token.txt".to_string(),
            region: "ap-southeast-1".to_string(),
        };
        assert!(empty.validate().is_err());
    }
}
