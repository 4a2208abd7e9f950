//! DynamoDB table store backend.
//!
//! Uses the official aws-sdk-dynamodb crate with IAM role or ambient
//! credential authentication.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};

use crate::schema::KeyAttributeType;
use crate::{StoreError, TableCapacity, TableSchema, TableStore};

/// Table store backed by DynamoDB.
#[derive(Debug)]
pub struct DynamoTableStore {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoTableStore {
    /// Create a store from an already-loaded SDK configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_dynamodb::Client::new(sdk_config),
        }
    }

    /// Create a store from ambient credentials, optionally pinning the region.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            region = ?sdk_config.region(),
            "DynamoDB table store initialized"
        );

        Self::new(&sdk_config)
    }
}

fn scalar_type(t: KeyAttributeType) -> ScalarAttributeType {
    match t {
        KeyAttributeType::String => ScalarAttributeType::S,
        KeyAttributeType::Number => ScalarAttributeType::N,
        KeyAttributeType::Binary => ScalarAttributeType::B,
    }
}

#[async_trait]
impl TableStore for DynamoTableStore {
    async fn list_table_names(&self) -> Result<Vec<String>, StoreError> {
        let result = self
            .client
            .list_tables()
            .send()
            .await
            .map_err(|e| StoreError::ListFailed {
                detail: format!("ListTables call failed: {e}"),
            })?;

        Ok(result.table_names().to_vec())
    }

    async fn create_table(
        &self,
        name: &str,
        schema: &TableSchema,
        capacity: &TableCapacity,
    ) -> Result<(), StoreError> {
        let build_err = |e: aws_sdk_dynamodb::error::BuildError| StoreError::CreateFailed {
            name: name.to_string(),
            detail: format!("Invalid table definition: {e}"),
        };

        let attribute = AttributeDefinition::builder()
            .attribute_name(&schema.partition_key)
            .attribute_type(scalar_type(schema.partition_key_type))
            .build()
            .map_err(build_err)?;

        let key = KeySchemaElement::builder()
            .attribute_name(&schema.partition_key)
            .key_type(KeyType::Hash)
            .build()
            .map_err(build_err)?;

        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(capacity.read_units)
            .write_capacity_units(capacity.write_units)
            .build()
            .map_err(build_err)?;

        self.client
            .create_table()
            .table_name(name)
            .attribute_definitions(attribute)
            .key_schema(key)
            .provisioned_throughput(throughput)
            .send()
            .await
            .map_err(|e| StoreError::CreateFailed {
                name: name.to_string(),
                detail: format!("CreateTable call failed: {e}"),
            })?;

        tracing::info!(table = name, "table created");
        Ok(())
    }

    fn store_type(&self) -> &'static str {
        "dynamodb"
    }
}
