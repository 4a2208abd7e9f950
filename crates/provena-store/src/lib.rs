//! Table store abstraction for tenant resource provisioning.
//!
//! Provides a `TableStore` trait over the operations the provisioning flow
//! needs: listing table names and creating a table. The production backend
//! is DynamoDB; an in-memory store backs the tests.

pub mod dynamo;
pub mod memory;
pub mod schema;

use async_trait::async_trait;

pub use dynamo::DynamoTableStore;
pub use memory::InMemoryTableStore;
pub use schema::{KeyAttributeType, TableCapacity, TableSchema};

// ── StoreError ───────────────────────────────────────────────────────────

/// Errors returned by table store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Listing table names failed.
    #[error("Failed to list tables: {detail}")]
    ListFailed { detail: String },

    /// Creating a table failed.
    #[error("Failed to create table '{name}': {detail}")]
    CreateFailed { name: String, detail: String },

    /// Configuration error (missing region, bad endpoint).
    #[error("Table store configuration error: {detail}")]
    ConfigError { detail: String },
}

// ── TableStore Trait ─────────────────────────────────────────────────────

/// Trait that all table store backends must implement.
///
/// The existence check reads the full table listing in one call; stores
/// with more tables than a single page holds are out of scope for this
/// service.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// List all table names in the store.
    async fn list_table_names(&self) -> Result<Vec<String>, StoreError>;

    /// Create a table with the given schema and capacity.
    ///
    /// Callers check existence first; a create racing another create may
    /// still fail at the backend and is surfaced as `CreateFailed`.
    async fn create_table(
        &self,
        name: &str,
        schema: &TableSchema,
        capacity: &TableCapacity,
    ) -> Result<(), StoreError>;

    /// Return the store type name for logging/diagnostics.
    fn store_type(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::ListFailed {
            detail: "timeout".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to list tables: timeout");

        let err = StoreError::CreateFailed {
            name: "acme_demo_customer".to_string(),
            detail: "throttled".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create table 'acme_demo_customer': throttled"
        );
    }
}
