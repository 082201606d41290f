//! Snowflake dialect adapter.
//!
//! Bundles the Snowflake connection config shape (account, warehouse,
//! role), the mapping from Snowflake catalog type names to canonical
//! types, and Snowflake's SQL expression spellings.

mod adapter;
mod config;

pub use adapter::{create, SnowflakeDialect, SCHEME, SERVICE_TYPE};
pub use config::SnowflakeConnectionConfig;

use dialect_core::SqlExpressions;
use ingest_core::{SupportedDataType, TypeRegistry};
use std::sync::OnceLock;

static TYPES: OnceLock<TypeRegistry> = OnceLock::new();

/// The Snowflake type registry, populated once at first use and read-only
/// afterward.
pub fn type_registry() -> &'static TypeRegistry {
    TYPES.get_or_init(|| {
        let mut registry = TypeRegistry::new();
        registry.register(
            &["VARCHAR", "CHAR", "CHARACTER", "STRING", "TEXT"],
            SupportedDataType::Text,
        );
        registry.register(
            &[
                "NUMBER",
                "INT",
                "INTEGER",
                "BIGINT",
                "SMALLINT",
                "TINYINT",
                "BYTEINT",
                "FLOAT",
                "FLOAT4",
                "FLOAT8",
                "DOUBLE",
                "DOUBLE PRECISION",
                "REAL",
            ],
            SupportedDataType::Numeric,
        );
        registry.register(
            &[
                "DATE",
                "DATETIME",
                "TIME",
                "TIMESTAMP",
                "TIMESTAMP_LTZ",
                "TIMESTAMP_NTZ",
                "TIMESTAMP_TZ",
            ],
            SupportedDataType::Time,
        );
        registry.register(&["BOOLEAN"], SupportedDataType::Boolean);
        registry.register(&["BINARY", "VARBINARY"], SupportedDataType::Binary);
        registry.register(
            &["VARIANT", "OBJECT", "ARRAY", "GEOGRAPHY"],
            SupportedDataType::Complex,
        );
        registry
    })
}

/// Snowflake's SQL expression spellings.
pub fn sql_expressions() -> SqlExpressions {
    SqlExpressions {
        count_conditional: "COUNT(CASE WHEN {} THEN 1 END) AS _",
        regex_like: "{} regexp '{}'",
        ..SqlExpressions::default()
    }
}
