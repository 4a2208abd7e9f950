//! Event bus transport seam.
//!
//! The object-safe `EventBus` trait carries fully-built entries so the
//! publisher can stay generic over event types while backends stay
//! swappable behind `Arc<dyn EventBus>`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::config::EventBusConfig;
use crate::error::EventError;

/// A fully-built bus entry ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusEntry {
    /// Name or ARN of the target bus.
    pub bus_name: String,
    /// Detail-type label.
    pub detail_type: String,
    /// Source identifier.
    pub source: String,
    /// JSON-encoded payload.
    pub detail: String,
    /// Entry timestamp.
    pub time: DateTime<Utc>,
}

/// Trait that all event bus transports must implement.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Put a single entry onto the bus.
    async fn put_event(&self, entry: BusEntry) -> Result<(), EventError>;

    /// Return the transport type name for logging/diagnostics.
    fn bus_type(&self) -> &'static str;
}

// ── EventBridge transport ────────────────────────────────────────────────

/// Event bus transport backed by AWS EventBridge.
#[derive(Debug)]
pub struct EventBridgeBus {
    client: aws_sdk_eventbridge::Client,
}

impl EventBridgeBus {
    /// Create a transport from an already-loaded SDK configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_eventbridge::Client::new(sdk_config),
        }
    }

    /// Create a transport from ambient credentials, honoring the config's
    /// region override.
    pub async fn from_config(config: &EventBusConfig) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            bus = %config.bus_name,
            region = ?sdk_config.region(),
            "EventBridge transport initialized"
        );

        Self::new(&sdk_config)
    }
}

#[async_trait]
impl EventBus for EventBridgeBus {
    async fn put_event(&self, entry: BusEntry) -> Result<(), EventError> {
        let BusEntry {
            bus_name,
            detail_type,
            source,
            detail,
            time,
        } = entry;

        let request_entry = aws_sdk_eventbridge::types::PutEventsRequestEntry::builder()
            .event_bus_name(bus_name.clone())
            .detail_type(detail_type)
            .source(source)
            .detail(detail)
            .time(aws_sdk_eventbridge::primitives::DateTime::from_millis(
                time.timestamp_millis(),
            ))
            .build();

        let result = self
            .client
            .put_events()
            .entries(request_entry)
            .send()
            .await
            .map_err(|e| EventError::PublishFailed {
                bus: bus_name.clone(),
                cause: format!("PutEvents call failed: {e}"),
            })?;

        // A 200 from PutEvents can still carry per-entry failures
        if result.failed_entry_count() != 0 {
            let cause = result
                .entries()
                .iter()
                .find_map(|e| e.error_message().map(String::from))
                .unwrap_or_else(|| "unknown entry failure".to_string());
            return Err(EventError::EntryRejected { bus: bus_name, cause });
        }

        Ok(())
    }

    fn bus_type(&self) -> &'static str {
        "eventbridge"
    }
}

// ── Recording transport for tests ────────────────────────────────────────

/// In-memory transport that records every entry it receives.
#[derive(Debug, Default)]
pub struct RecordingEventBus {
    entries: Mutex<Vec<BusEntry>>,
    fail_puts: bool,
}

impl RecordingEventBus {
    /// Create an empty recording transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `put_event` call fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_puts = true;
        self
    }

    /// Entries received so far, in call order.
    pub async fn entries(&self) -> Vec<BusEntry> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl EventBus for RecordingEventBus {
    async fn put_event(&self, entry: BusEntry) -> Result<(), EventError> {
        if self.fail_puts {
            return Err(EventError::PublishFailed {
                bus: entry.bus_name,
                cause: "simulated publish failure".to_string(),
            });
        }
        self.entries.lock().await.push(entry);
        Ok(())
    }

    fn bus_type(&self) -> &'static str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> BusEntry {
        BusEntry {
            bus_name: "bus-superadmin-create-tenan".to_string(),
            detail_type: "Message".to_string(),
            source: "provision-api".to_string(),
            detail: r#"{"tenantResourceName":"acme_demo_customer"}"#.to_string(),
            time: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_recording_bus_records() {
        let bus = RecordingEventBus::new();
        bus.put_event(entry()).await.unwrap();

        let entries = bus.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].detail_type, "Message");
    }

    #[tokio::test]
    async fn test_recording_bus_failure_injection() {
        let bus = RecordingEventBus::new().failing();
        let err = bus.put_event(entry()).await.unwrap_err();
        assert!(err.is_transient());
        assert!(bus.entries().await.is_empty());
    }
}
