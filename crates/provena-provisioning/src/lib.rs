//! Tenant resource provisioning.
//!
//! Derives deterministic resource names, checks live backend state for
//! existing resources, and provisions missing ones through one of two
//! interchangeable strategies.

pub mod checker;
pub mod events;
pub mod resource;
pub mod strategy;

pub use checker::{ExistenceChecker, ResourceStatus};
pub use events::TenantResourceRequested;
pub use resource::{ResourceName, RESOURCE_SUFFIX};
pub use strategy::{
    DirectCreateStrategy, EventPublishStrategy, ProvisionError, ProvisioningStrategy,
};
