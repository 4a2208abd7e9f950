//! Event envelope carrying the bus entry metadata alongside the payload.

use crate::error::EventError;
use crate::event::Event;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Wraps a payload with the metadata needed to build a bus entry.
///
/// The payload alone becomes the entry detail; the rest maps onto the
/// entry's detail-type, source, and timestamp fields.
#[derive(Debug, Clone)]
pub struct EventEnvelope<T> {
    /// Unique identifier for this event instance, used for log correlation.
    pub event_id: Uuid,

    /// Detail-type label for the bus entry.
    pub detail_type: String,

    /// Source identifier for the bus entry.
    pub source: String,

    /// Timestamp stamped onto the bus entry.
    pub timestamp: DateTime<Utc>,

    /// The actual event payload.
    pub payload: T,
}

impl<T: Event> EventEnvelope<T> {
    /// Create a new event envelope with a fresh event ID.
    pub fn new(payload: T) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            detail_type: T::DETAIL_TYPE.to_string(),
            source: T::SOURCE.to_string(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Create an envelope with a specific event ID.
    /// Useful for testing or replaying events.
    pub fn with_id(event_id: Uuid, payload: T) -> Self {
        Self {
            event_id,
            ..Self::new(payload)
        }
    }

    /// Serialize the payload to the JSON detail string.
    pub fn to_detail_json(&self) -> Result<String, EventError> {
        serde_json::to_string(&self.payload).map_err(|e| EventError::SerializationFailed {
            detail_type: T::DETAIL_TYPE.to_string(),
            cause: e.to_string(),
        })
    }
}
