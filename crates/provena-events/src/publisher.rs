//! Typed event publisher.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::bus::{BusEntry, EventBus};
use crate::config::EventBusConfig;
use crate::envelope::EventEnvelope;
use crate::error::EventError;
use crate::event::Event;

/// Publishes typed events to a configured bus.
///
/// Wraps each event in an envelope, serializes the payload, and hands the
/// built entry to the transport. Fire-and-forget: one attempt, no retries.
#[derive(Clone)]
pub struct EventBusPublisher {
    bus: Arc<dyn EventBus>,
    config: EventBusConfig,
}

impl EventBusPublisher {
    /// Create a publisher over the given transport.
    pub fn new(bus: Arc<dyn EventBus>, config: EventBusConfig) -> Self {
        Self { bus, config }
    }

    /// The configured bus name.
    #[must_use]
    pub fn bus_name(&self) -> &str {
        &self.config.bus_name
    }

    /// Publish an event to the bus.
    #[instrument(skip(self, event), fields(detail_type = %E::DETAIL_TYPE, bus = %self.config.bus_name))]
    pub async fn publish<E: Event>(&self, event: E) -> Result<(), EventError> {
        let envelope = EventEnvelope::new(event);
        self.publish_envelope(envelope).await
    }

    /// Publish a pre-constructed envelope.
    pub async fn publish_envelope<E: Event>(
        &self,
        envelope: EventEnvelope<E>,
    ) -> Result<(), EventError> {
        let detail = envelope.to_detail_json()?;

        debug!(
            event_id = %envelope.event_id,
            detail_size = detail.len(),
            transport = self.bus.bus_type(),
            "publishing event"
        );

        self.bus
            .put_event(BusEntry {
                bus_name: self.config.bus_name.clone(),
                detail_type: envelope.detail_type,
                source: envelope.source,
                detail,
                time: envelope.timestamp,
            })
            .await
    }
}
