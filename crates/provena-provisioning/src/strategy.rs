//! Provisioning strategies.
//!
//! Two interchangeable ways to bring a tenant's backing resource into
//! existence, selected at configuration time and never both in one
//! process: create the table directly, or publish a request for a
//! downstream consumer. Both are fire-and-forget single attempts.

use std::sync::Arc;

use async_trait::async_trait;
use provena_events::{EventBusPublisher, EventError};
use provena_store::{StoreError, TableCapacity, TableSchema, TableStore};
use tracing::info;

use crate::events::TenantResourceRequested;
use crate::resource::ResourceName;

/// Errors returned by provisioning strategies.
///
/// The variant identifies which strategy failed, which drives the
/// strategy-specific failure response.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// Direct resource creation failed at the backend.
    #[error(transparent)]
    Backend(#[from] StoreError),

    /// Publishing the provisioning request failed.
    #[error(transparent)]
    Publish(#[from] EventError),
}

/// A mechanism for provisioning a tenant's backing resource.
#[async_trait]
pub trait ProvisioningStrategy: Send + Sync {
    /// Provision the resource with the given name.
    async fn provision(&self, name: &ResourceName) -> Result<(), ProvisionError>;

    /// Return the strategy name for logging/diagnostics.
    fn strategy_type(&self) -> &'static str;
}

// ── Direct-create strategy ───────────────────────────────────────────────

/// Creates the backing table directly with a fixed schema and capacity.
pub struct DirectCreateStrategy {
    store: Arc<dyn TableStore>,
    schema: TableSchema,
    capacity: TableCapacity,
}

impl DirectCreateStrategy {
    /// Create a strategy using the standard customer table schema.
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            store,
            schema: TableSchema::demo_customer(),
            capacity: TableCapacity::default(),
        }
    }
}

#[async_trait]
impl ProvisioningStrategy for DirectCreateStrategy {
    async fn provision(&self, name: &ResourceName) -> Result<(), ProvisionError> {
        self.store
            .create_table(name.as_str(), &self.schema, &self.capacity)
            .await?;

        info!(resource = %name, "resource created");
        Ok(())
    }

    fn strategy_type(&self) -> &'static str {
        "direct-create"
    }
}

// ── Event-publish strategy ───────────────────────────────────────────────

/// Publishes a provisioning request for a downstream consumer to act on.
///
/// Does not itself create the resource, and attaches no idempotency token
/// to the publish; a redelivery can duplicate provisioning intent
/// downstream.
pub struct EventPublishStrategy {
    publisher: EventBusPublisher,
}

impl EventPublishStrategy {
    /// Create a strategy over the given publisher.
    pub fn new(publisher: EventBusPublisher) -> Self {
        Self { publisher }
    }
}

#[async_trait]
impl ProvisioningStrategy for EventPublishStrategy {
    async fn provision(&self, name: &ResourceName) -> Result<(), ProvisionError> {
        let event = TenantResourceRequested {
            tenant_resource_name: name.to_string(),
            channel: self.publisher.bus_name().to_string(),
        };

        self.publisher.publish(event).await?;

        info!(resource = %name, "provisioning request published");
        Ok(())
    }

    fn strategy_type(&self) -> &'static str {
        "event-publish"
    }
}
