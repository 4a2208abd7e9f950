//! S3 object secret provider.
//!
//! Fetches signing key material from a single object in an S3 bucket using
//! the official aws-sdk-s3 crate with IAM role or ambient credential
//! authentication. The location descriptor (bucket, object key, region) is
//! fixed at construction time.

use async_trait::async_trait;

use crate::config::{S3Config, SecretProviderConfig};
use crate::{SecretError, SecretProvider, SecretValue};

/// Secret provider that reads one key object from S3.
#[derive(Debug)]
pub struct S3SecretProvider {
    client: aws_sdk_s3::Client,
    location: S3Config,
}

impl S3SecretProvider {
    /// Create a new `S3SecretProvider` from configuration.
    pub async fn new(config: &SecretProviderConfig) -> Result<Self, SecretError> {
        let location = config.s3.as_ref().ok_or(SecretError::ConfigError {
            detail: "S3 configuration is required when SECRET_PROVIDER=s3".to_string(),
        })?;
        location.validate()?;

        let sdk_config = aws_config::from_env()
            .region(aws_config::Region::new(location.region.clone()))
            .load()
            .await;
        let client = aws_sdk_s3::Client::new(&sdk_config);

        tracing::info!(
            bucket = %location.bucket,
            object_key = %location.object_key,
            region = %location.region,
            "S3 secret provider initialized"
        );

        Ok(Self {
            client,
            location: location.clone(),
        })
    }
}

#[async_trait]
impl SecretProvider for S3SecretProvider {
    async fn get_secret(&self, name: &str) -> Result<SecretValue, SecretError> {
        let result = self
            .client
            .get_object()
            .bucket(&self.location.bucket)
            .key(&self.location.object_key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    SecretError::NotFound {
                        name: name.to_string(),
                    }
                } else {
                    SecretError::ProviderUnavailable {
                        provider: "s3".to_string(),
                        detail: format!(
                            "Failed to get object '{}' from bucket '{}' (region: {}): {}",
                            self.location.object_key, self.location.bucket, self.location.region, e
                        ),
                    }
                }
            })?;

        let version = result.version_id().map(|v| v.to_string());

        let body = result
            .body
            .collect()
            .await
            .map_err(|e| SecretError::ProviderUnavailable {
                provider: "s3".to_string(),
                detail: format!("Failed to read object body: {e}"),
            })?;
        let value_bytes = body.into_bytes().to_vec();

        if value_bytes.is_empty() {
            return Err(SecretError::InvalidValue {
                name: name.to_string(),
                detail: "S3 key object is empty".to_string(),
            });
        }

        tracing::info!(
            secret_name = name,
            bucket = %self.location.bucket,
            version = ?version,
            "Secret loaded from S3"
        );

        let mut sv = SecretValue::new(name, value_bytes);
        sv.version = version;
        Ok(sv)
    }

    async fn health_check(&self) -> Result<bool, SecretError> {
        // HeadObject on the key object to verify reachability and permissions
        match self
            .client
            .head_object()
            .bucket(&self.location.bucket)
            .key(&self.location.object_key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!(
                    bucket = %self.location.bucket,
                    object_key = %self.location.object_key,
                    error = %e,
                    "S3 secret provider health check failed"
                );
                Ok(false)
            }
        }
    }

    fn provider_type(&self) -> &'static str {
        "s3"
    }
}
