//! Event trait definition for type-safe event publishing.

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be published as bus events.
///
/// Implementors define the detail-type label and source identifier stamped
/// onto every published entry. The payload is serialized as JSON into the
/// entry detail.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use provena_events::Event;
///
/// #[derive(Debug, Serialize, Deserialize)]
/// pub struct TenantResourceRequested {
///     #[serde(rename = "tenantResourceName")]
///     pub tenant_resource_name: String,
///     pub channel: String,
/// }
///
/// impl Event for TenantResourceRequested {
///     const DETAIL_TYPE: &'static str = "Message";
///     const SOURCE: &'static str = "provision-api";
/// }
/// ```
pub trait Event: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The detail-type label attached to published entries.
    const DETAIL_TYPE: &'static str;

    /// The source identifier attached to published entries.
    const SOURCE: &'static str;
}
