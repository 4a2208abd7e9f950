//! In-memory table store for tests and local development.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{StoreError, TableCapacity, TableSchema, TableStore};

/// Table store that keeps table names in memory.
///
/// Records every create call so tests can assert on provisioning behavior.
/// Failure injection flags let tests exercise backend error paths.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    tables: RwLock<Vec<String>>,
    created: RwLock<Vec<String>>,
    fail_lists: bool,
    fail_creates: bool,
}

impl InMemoryTableStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the given table names.
    #[must_use]
    pub fn with_tables(names: Vec<String>) -> Self {
        Self {
            tables: RwLock::new(names),
            ..Self::default()
        }
    }

    /// Make every `list_table_names` call fail.
    #[must_use]
    pub fn failing_lists(mut self) -> Self {
        self.fail_lists = true;
        self
    }

    /// Make every `create_table` call fail.
    #[must_use]
    pub fn failing_creates(mut self) -> Self {
        self.fail_creates = true;
        self
    }

    /// Table names passed to `create_table`, in call order.
    pub async fn created_tables(&self) -> Vec<String> {
        self.created.read().await.clone()
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn list_table_names(&self) -> Result<Vec<String>, StoreError> {
        if self.fail_lists {
            return Err(StoreError::ListFailed {
                detail: "simulated list failure".to_string(),
            });
        }
        Ok(self.tables.read().await.clone())
    }

    async fn create_table(
        &self,
        name: &str,
        _schema: &TableSchema,
        _capacity: &TableCapacity,
    ) -> Result<(), StoreError> {
        if self.fail_creates {
            return Err(StoreError::CreateFailed {
                name: name.to_string(),
                detail: "simulated create failure".to_string(),
            });
        }

        let mut tables = self.tables.write().await;
        if tables.iter().any(|t| t == name) {
            return Err(StoreError::CreateFailed {
                name: name.to_string(),
                detail: "table already exists".to_string(),
            });
        }
        tables.push(name.to_string());
        self.created.write().await.push(name.to_string());
        Ok(())
    }

    fn store_type(&self) -> &'static str {
        "memory"
    }
}
