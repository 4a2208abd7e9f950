//! Event bus configuration management.

use crate::error::EventError;
use std::env;

/// Event bus connection configuration.
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Name or ARN of the target event bus.
    pub bus_name: String,
    /// Region override; falls back to ambient credentials when unset.
    pub region: Option<String>,
}

impl EventBusConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `EVENT_BUS_NAME`: Name or ARN of the event bus
    ///
    /// Optional:
    /// - `AWS_REGION`: Region override
    pub fn from_env() -> Result<Self, EventError> {
        let bus_name = env::var("EVENT_BUS_NAME").map_err(|_| EventError::ConfigMissing {
            var: "EVENT_BUS_NAME".to_string(),
        })?;

        if bus_name.trim().is_empty() {
            return Err(EventError::ConfigInvalid {
                var: "EVENT_BUS_NAME".to_string(),
                reason: "value is empty".to_string(),
            });
        }

        Ok(Self {
            bus_name,
            region: env::var("AWS_REGION").ok(),
        })
    }

    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> EventBusConfigBuilder {
        EventBusConfigBuilder::default()
    }
}

/// Builder for `EventBusConfig`.
#[derive(Debug, Default)]
pub struct EventBusConfigBuilder {
    bus_name: Option<String>,
    region: Option<String>,
}

impl EventBusConfigBuilder {
    /// Set the event bus name or ARN.
    pub fn bus_name(mut self, name: impl Into<String>) -> Self {
        self.bus_name = Some(name.into());
        self
    }

    /// Set the region override.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<EventBusConfig, EventError> {
        let bus_name = self.bus_name.ok_or(EventError::ConfigMissing {
            var: "bus_name".to_string(),
        })?;

        Ok(EventBusConfig {
            bus_name,
            region: self.region,
        })
    }
}
