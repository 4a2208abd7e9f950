//! Error types for the provena-events crate.

use thiserror::Error;

/// Errors that can occur during event operations.
#[derive(Debug, Error)]
pub enum EventError {
    // Configuration errors (permanent, no retry)
    /// Required configuration variable is missing.
    #[error("Configuration missing: {var}")]
    ConfigMissing { var: String },

    /// Configuration value is invalid.
    #[error("Configuration invalid for {var}: {reason}")]
    ConfigInvalid { var: String, reason: String },

    // Publishing errors
    /// Failed to publish event to the bus.
    #[error("Failed to publish to bus {bus}: {cause}")]
    PublishFailed { bus: String, cause: String },

    /// The bus accepted the request but rejected the entry.
    #[error("Bus {bus} rejected entry: {cause}")]
    EntryRejected { bus: String, cause: String },

    /// Failed to serialize event.
    #[error("Failed to serialize event type {detail_type}: {cause}")]
    SerializationFailed { detail_type: String, cause: String },
}

impl EventError {
    /// Returns true if this error is transient and can be retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, EventError::PublishFailed { .. })
    }

    /// Returns true if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EventError::ConfigMissing { .. } | EventError::ConfigInvalid { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_transient() {
        let transient = EventError::PublishFailed {
            bus: "bus-superadmin-create-tenan".to_string(),
            cause: "throttled".to_string(),
        };
        assert!(transient.is_transient());

        let permanent = EventError::ConfigMissing {
            var: "EVENT_BUS_NAME".to_string(),
        };
        assert!(!permanent.is_transient());
    }

    #[test]
    fn test_error_is_config_error() {
        let config_err = EventError::ConfigMissing {
            var: "EVENT_BUS_NAME".to_string(),
        };
        assert!(config_err.is_config_error());

        let other_err = EventError::SerializationFailed {
            detail_type: "Message".to_string(),
            cause: "bad payload".to_string(),
        };
        assert!(!other_err.is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = EventError::ConfigMissing {
            var: "EVENT_BUS_NAME".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration missing: EVENT_BUS_NAME");
    }
}
