//! Typed event publishing to an AWS event bus.
//!
//! Events implement the [`Event`] trait to declare their detail-type and
//! source; the [`EventBusPublisher`] wraps them in an envelope and hands
//! them to an [`EventBus`] transport. Production uses [`EventBridgeBus`];
//! tests use [`RecordingEventBus`].

pub mod bus;
pub mod config;
pub mod envelope;
pub mod error;
pub mod event;
pub mod publisher;

pub use bus::{BusEntry, EventBridgeBus, EventBus, RecordingEventBus};
pub use config::EventBusConfig;
pub use envelope::EventEnvelope;
pub use error::EventError;
pub use event::Event;
pub use publisher::EventBusPublisher;
