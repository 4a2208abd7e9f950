//! Table schema and capacity definitions.

/// Attribute type for a key attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAttributeType {
    String,
    Number,
    Binary,
}

/// Schema for a provisioned table.
///
/// Only the key attribute is declared at creation; the item attributes are
/// schemaless in the backing store and listed here to fix the expected item
/// shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Partition key attribute name.
    pub partition_key: String,

    /// Partition key attribute type.
    pub partition_key_type: KeyAttributeType,

    /// Non-key attributes items are expected to carry.
    pub item_attributes: Vec<String>,
}

impl TableSchema {
    /// Schema for the per-tenant customer table: `customerID` string
    /// partition key plus the four claim-derived item attributes.
    #[must_use]
    pub fn demo_customer() -> Self {
        Self {
            partition_key: "customerID".to_string(),
            partition_key_type: KeyAttributeType::String,
            item_attributes: ["authStatus", "email", "tenan", "type"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Provisioned throughput for a new table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCapacity {
    pub read_units: i64,
    pub write_units: i64,
}

impl Default for TableCapacity {
    fn default() -> Self {
        Self {
            read_units: 5,
            write_units: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_customer_schema() {
        let schema = TableSchema::demo_customer();
        assert_eq!(schema.partition_key, "customerID");
        assert_eq!(schema.partition_key_type, KeyAttributeType::String);
        assert_eq!(
            schema.item_attributes,
            vec!["authStatus", "email", "tenan", "type"]
        );
    }

    #[test]
    fn test_default_capacity() {
        let capacity = TableCapacity::default();
        assert_eq!(capacity.read_units, 5);
        assert_eq!(capacity.write_units, 5);
    }
}
