//! Token claims matching the provisioning token wire format.
//!
//! The payload carries the registered claims at the top level and a nested
//! `data` object with the tenant context. Wire field names (including the
//! `tenan` spelling) are part of the token contract and must not change.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Tenant context carried in the `data` claim.
///
/// # Wire format
///
/// ```json
/// {
///   "authStatus": true,
///   "email": "ops@example.com",
///   "isProduct": ["demo"],
///   "tenan": "acme",
///   "type": "super_admin"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantClaims {
    /// Whether the bearer completed authentication upstream.
    #[serde(rename = "authStatus")]
    pub auth_status: bool,

    /// Bearer email address.
    pub email: String,

    /// Product flags granted to the bearer.
    #[serde(rename = "isProduct", default)]
    pub is_product: Vec<String>,

    /// Tenant identifier the token was issued for.
    pub tenan: String,

    /// Bearer role. Provisioning requires the privileged role.
    #[serde(rename = "type")]
    pub role: String,
}

impl TenantClaims {
    /// Check whether the bearer carries the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// Full token payload: registered claims plus the nested tenant context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvisioningClaims {
    /// Tenant context.
    pub data: TenantClaims,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// Not-before as Unix timestamp (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

impl ProvisioningClaims {
    /// Create a new claims builder.
    #[must_use]
    pub fn builder() -> ProvisioningClaimsBuilder {
        ProvisioningClaimsBuilder::default()
    }
}

/// Builder for `ProvisioningClaims`.
#[derive(Debug, Default)]
pub struct ProvisioningClaimsBuilder {
    tenant: Option<String>,
    role: Option<String>,
    email: Option<String>,
    auth_status: bool,
    is_product: Vec<String>,
    exp: Option<i64>,
}

impl ProvisioningClaimsBuilder {
    /// Set the tenant identifier.
    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Set the bearer role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the bearer email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the upstream authentication status flag.
    #[must_use]
    pub fn auth_status(mut self, status: bool) -> Self {
        self.auth_status = status;
        self
    }

    /// Set the granted product flags.
    pub fn product_flags(mut self, flags: Vec<impl Into<String>>) -> Self {
        self.is_product = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the expiration to `secs` seconds from now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.exp = Some((Utc::now() + Duration::seconds(secs)).timestamp());
        self
    }

    /// Set an absolute expiration timestamp.
    #[must_use]
    pub fn expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Build the claims.
    #[must_use]
    pub fn build(self) -> ProvisioningClaims {
        let now = Utc::now().timestamp();
        ProvisioningClaims {
            data: TenantClaims {
                auth_status: self.auth_status,
                email: self.email.unwrap_or_default(),
                is_product: self.is_product,
                tenan: self.tenant.unwrap_or_default(),
                role: self.role.unwrap_or_default(),
            },
            exp: self.exp.unwrap_or(now + 3600),
            iat: now,
            nbf: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let claims = ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .build();

        assert_eq!(claims.data.tenan, "acme");
        assert_eq!(claims.data.role, "super_admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_has_role() {
        let claims = ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .build();

        assert!(claims.data.has_role("super_admin"));
        assert!(!claims.data.has_role("regular_user"));
    }

    #[test]
    fn test_wire_field_names() {
        let claims = ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .email("ops@example.com")
            .auth_status(true)
            .product_flags(vec!["demo"])
            .expiration(1_700_000_000)
            .build();

        let json = serde_json::to_value(&claims).unwrap();
        let data = &json["data"];
        assert_eq!(data["authStatus"], true);
        assert_eq!(data["email"], "ops@example.com");
        assert_eq!(data["isProduct"][0], "demo");
        assert_eq!(data["tenan"], "acme");
        assert_eq!(data["type"], "super_admin");
        assert_eq!(json["exp"], 1_700_000_000);
    }

    #[test]
    fn test_deserialize_missing_product_flags() {
        let json = r#"{
            "data": {
                "authStatus": false,
                "email": "",
                "tenan": "acme",
                "type": "regular_user"
            },
            "exp": 1700000000,
            "iat": 1600000000
        }"#;

        let claims: ProvisioningClaims = serde_json::from_str(json).unwrap();
        assert!(claims.data.is_product.is_empty());
        assert_eq!(claims.data.role, "regular_user");
    }
}
