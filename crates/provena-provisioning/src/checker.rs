//! Resource existence check against the live backend state.

use std::sync::Arc;

use provena_store::{StoreError, TableStore};
use tracing::debug;

use crate::resource::ResourceName;

/// Outcome of an existence check.
///
/// A tri-state result instead of a bare boolean so "go ahead" and "already
/// provisioned" cannot be confused at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    /// The name is unclaimed; provisioning may proceed.
    Available,
    /// The resource already exists; provisioning is a no-op.
    AlreadyExists,
}

/// Checks whether a tenant's backing resource already exists.
///
/// The backend listing is the source of truth; nothing is cached in
/// process memory.
#[derive(Clone)]
pub struct ExistenceChecker {
    store: Arc<dyn TableStore>,
}

impl ExistenceChecker {
    /// Create a checker over the given store.
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Check the live backend for the given resource name.
    pub async fn check(&self, name: &ResourceName) -> Result<ResourceStatus, StoreError> {
        let tables = self.store.list_table_names().await?;

        let status = if tables.iter().any(|t| t == name.as_str()) {
            ResourceStatus::AlreadyExists
        } else {
            ResourceStatus::Available
        };

        debug!(resource = %name, ?status, "existence check");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provena_core::TenantName;
    use provena_store::InMemoryTableStore;

    fn resource(tenant: &str) -> ResourceName {
        ResourceName::for_tenant(&TenantName::new(tenant).unwrap())
    }

    #[tokio::test]
    async fn test_check_available() {
        let store = Arc::new(InMemoryTableStore::new());
        let checker = ExistenceChecker::new(store);

        let status = checker.check(&resource("acme")).await.unwrap();
        assert_eq!(status, ResourceStatus::Available);
    }

    #[tokio::test]
    async fn test_check_already_exists() {
        let store = Arc::new(InMemoryTableStore::with_tables(vec![
            "acme_demo_customer".to_string(),
        ]));
        let checker = ExistenceChecker::new(store);

        let status = checker.check(&resource("acme")).await.unwrap();
        assert_eq!(status, ResourceStatus::AlreadyExists);
    }

    #[tokio::test]
    async fn test_check_other_tenant_does_not_match() {
        let store = Arc::new(InMemoryTableStore::with_tables(vec![
            "globex_demo_customer".to_string(),
        ]));
        let checker = ExistenceChecker::new(store);

        let status = checker.check(&resource("acme")).await.unwrap();
        assert_eq!(status, ResourceStatus::Available);
    }

    #[tokio::test]
    async fn test_check_propagates_backend_failure() {
        let store = Arc::new(InMemoryTableStore::new().failing_lists());
        let checker = ExistenceChecker::new(store);

        assert!(checker.check(&resource("acme")).await.is_err());
    }
}
