//! Events emitted by the provisioning flow.

use provena_events::Event;
use serde::{Deserialize, Serialize};

/// Published once per successful provisioning decision under the
/// event-publish strategy. A downstream consumer creates the resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantResourceRequested {
    /// Name of the resource the downstream consumer should create.
    #[serde(rename = "tenantResourceName")]
    pub tenant_resource_name: String,

    /// Channel the request was published on.
    pub channel: String,
}

impl Event for TenantResourceRequested {
    const DETAIL_TYPE: &'static str = "Message";
    const SOURCE: &'static str = "provision-api";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let event = TenantResourceRequested {
            tenant_resource_name: "acme_demo_customer".to_string(),
            channel: "bus-superadmin-create-tenan".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["tenantResourceName"], "acme_demo_customer");
        assert_eq!(json["channel"], "bus-superadmin-create-tenan");
    }
}
