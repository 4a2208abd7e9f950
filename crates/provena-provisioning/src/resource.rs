//! Deterministic resource naming.

use std::fmt;

use provena_core::TenantName;

/// Fixed suffix appended to every tenant's backing resource name.
pub const RESOURCE_SUFFIX: &str = "demo_customer";

/// Name of a tenant's backing resource.
///
/// Derived deterministically from the tenant name; a given tenant always
/// maps to exactly one resource name, which makes the name itself the
/// idempotency key for provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Derive the resource name for a tenant.
    #[must_use]
    pub fn for_tenant(tenant: &TenantName) -> Self {
        Self(format!("{}_{RESOURCE_SUFFIX}", tenant.as_str()))
    }

    /// The resource name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
