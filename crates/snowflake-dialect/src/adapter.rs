//! Snowflake dialect adapter.

use crate::SnowflakeConnectionConfig;
use dialect_core::{
    ConnectionConfig, DialectAdapter, RawConfig, SqlExpressions, ValidationError,
};
use ingest_core::TypeRegistry;

pub const SCHEME: &str = "snowflake";
pub const SERVICE_TYPE: &str = "Snowflake";

pub struct SnowflakeDialect {
    config: SnowflakeConnectionConfig,
    sql_exprs: SqlExpressions,
}

impl SnowflakeDialect {
    pub fn new(config: SnowflakeConnectionConfig) -> Self {
        Self {
            config,
            sql_exprs: crate::sql_expressions(),
        }
    }
}

impl DialectAdapter for SnowflakeDialect {
    fn scheme(&self) -> &'static str {
        SCHEME
    }

    fn service_type(&self) -> &'static str {
        SERVICE_TYPE
    }

    fn config(&self) -> &dyn ConnectionConfig {
        &self.config
    }

    fn type_registry(&self) -> &TypeRegistry {
        crate::type_registry()
    }

    fn sql_exprs(&self) -> &SqlExpressions {
        &self.sql_exprs
    }
}

/// Factory registered with the dialect registry. Validation failures
/// propagate unchanged.
pub fn create(raw: &RawConfig) -> Result<Box<dyn DialectAdapter>, ValidationError> {
    let config = SnowflakeConnectionConfig::from_raw(raw)?;
    Ok(Box::new(SnowflakeDialect::new(config)))
}
