//! Validated Tenant Names
//!
//! Tenant names arrive as free-form strings in the request body and are used
//! to derive backing resource names. Using the newtype pattern keeps raw,
//! unvalidated strings from flowing into the provisioning path.
//!
//! # Example
//!
//! ```
//! use provena_core::TenantName;
//!
//! let tenant: TenantName = "acme".parse().unwrap();
//! assert_eq!(tenant.as_str(), "acme");
//!
//! assert!("".parse::<TenantName>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Error type for tenant name validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid tenant name: {reason}")]
pub struct InvalidTenantName {
    /// Why the candidate name was rejected.
    pub reason: String,
}

/// A validated tenant name.
///
/// Invariant: never empty and carries no surrounding whitespace, so the
/// derived resource name is stable for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantName(String);

impl TenantName {
    /// Validate and wrap a candidate tenant name.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidTenantName> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidTenantName {
                reason: "tenant name must not be empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tenant name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TenantName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TenantName {
    type Err = InvalidTenantName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
