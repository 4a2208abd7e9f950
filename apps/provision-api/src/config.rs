//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading with validation: required variables must be present
//! and valid or the application exits with a clear error message. No
//! component reads the environment after startup; everything is passed in
//! as explicit configuration.

use std::env;
use thiserror::Error;

use provena_events::EventBusConfig;
use provena_secrets::SecretProviderConfig;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingVar { var: String },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Secret provider configuration error: {0}")]
    Secrets(#[from] provena_secrets::SecretError),

    #[error("Event bus configuration error: {0}")]
    Events(#[from] provena_events::EventError),
}

/// Which provisioning mechanism this deployment runs.
///
/// Exactly one strategy per process; the other's backend is never
/// initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Publish a provisioning request to the event bus.
    EventPublish,
    /// Create the backing table directly.
    DirectCreate,
}

impl StrategyKind {
    fn from_env_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "event" => Ok(Self::EventPublish),
            "direct" => Ok(Self::DirectCreate),
            other => Err(ConfigError::InvalidValue {
                var: "PROVISION_STRATEGY".to_string(),
                message: format!("expected 'event' or 'direct', got '{other}'"),
            }),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Log filter directive.
    pub rust_log: String,

    /// Selected provisioning strategy.
    pub strategy: StrategyKind,

    /// Signing key provider configuration.
    pub secret_provider: SecretProviderConfig,

    /// Event bus configuration; required for the event-publish strategy.
    pub event_bus: Option<EventBusConfig>,

    /// Region override for the table store.
    pub region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `PROVISION_STRATEGY=event` additionally requires `EVENT_BUS_NAME`
    /// - the secret provider variables per [`SecretProviderConfig::from_env`]
    ///
    /// Optional:
    /// - `HOST` (default "0.0.0.0")
    /// - `PORT` (default 8080)
    /// - `RUST_LOG` (default "info")
    /// - `PROVISION_STRATEGY` (default "event")
    /// - `AWS_REGION`
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(v) => v.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                var: "PORT".to_string(),
                message: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let strategy = match env::var("PROVISION_STRATEGY") {
            Ok(v) => StrategyKind::from_env_str(&v)?,
            Err(_) => StrategyKind::EventPublish,
        };

        let secret_provider = SecretProviderConfig::from_env()?;

        let event_bus = match strategy {
            StrategyKind::EventPublish => Some(EventBusConfig::from_env()?),
            StrategyKind::DirectCreate => None,
        };

        Ok(Self {
            host,
            port,
            rust_log,
            strategy,
            secret_provider,
            event_bus,
            region: env::var("AWS_REGION").ok(),
        })
    }

    /// The address to bind the listener to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_parsing() {
        assert_eq!(
            StrategyKind::from_env_str("event").unwrap(),
            StrategyKind::EventPublish
        );
        assert_eq!(
            StrategyKind::from_env_str("DIRECT").unwrap(),
            StrategyKind::DirectCreate
        );
        assert!(StrategyKind::from_env_str("both").is_err());
    }
}
