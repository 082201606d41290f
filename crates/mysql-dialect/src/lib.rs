//! MySQL dialect adapter.

use dialect_core::{
    BaseConnectionConfig, ConnectionConfig, DialectAdapter, RawConfig, SqlExpressions,
    ValidationError,
};
use ingest_core::{SupportedDataType, TypeRegistry};
use std::sync::OnceLock;

pub const SCHEME: &str = "mysql";
pub const SERVICE_TYPE: &str = "MySQL";

const DEFAULT_PORT: u16 = 3306;

static TYPES: OnceLock<TypeRegistry> = OnceLock::new();

/// The MySQL type registry, populated once at first use.
pub fn type_registry() -> &'static TypeRegistry {
    TYPES.get_or_init(|| {
        let mut registry = TypeRegistry::new();
        registry.register(
            &[
                "CHAR", "VARCHAR", "TINYTEXT", "TEXT", "MEDIUMTEXT", "LONGTEXT",
            ],
            SupportedDataType::Text,
        );
        registry.register(
            &[
                "TINYINT",
                "SMALLINT",
                "MEDIUMINT",
                "INT",
                "INTEGER",
                "BIGINT",
                "DECIMAL",
                "NUMERIC",
                "FLOAT",
                "DOUBLE",
                "DOUBLE PRECISION",
                "REAL",
            ],
            SupportedDataType::Numeric,
        );
        registry.register(
            &["DATE", "DATETIME", "TIMESTAMP", "TIME", "YEAR"],
            SupportedDataType::Time,
        );
        registry.register(&["BOOLEAN", "BOOL"], SupportedDataType::Boolean);
        registry.register(
            &[
                "BINARY",
                "VARBINARY",
                "TINYBLOB",
                "BLOB",
                "MEDIUMBLOB",
                "LONGBLOB",
            ],
            SupportedDataType::Binary,
        );
        registry.register(&["JSON", "ENUM", "SET"], SupportedDataType::Complex);
        registry
    })
}

/// MySQL spells regex matching with the `regexp` operator.
pub fn sql_expressions() -> SqlExpressions {
    SqlExpressions {
        regex_like: "{} REGEXP '{}'",
        ..SqlExpressions::default()
    }
}

/// MySQL connection configuration. No engine-specific extra parameters,
/// so the connection URL never carries a query string.
#[derive(Debug, Clone, PartialEq)]
pub struct MySqlConnectionConfig {
    pub base: BaseConnectionConfig,
}

impl MySqlConnectionConfig {
    pub fn from_raw(raw: &RawConfig) -> Result<Self, ValidationError> {
        let base = BaseConnectionConfig::parse(SCHEME, DEFAULT_PORT, raw)?;
        Ok(Self { base })
    }
}

impl ConnectionConfig for MySqlConnectionConfig {
    fn base(&self) -> &BaseConnectionConfig {
        &self.base
    }
}

pub struct MySqlDialect {
    config: MySqlConnectionConfig,
    sql_exprs: SqlExpressions,
}

impl DialectAdapter for MySqlDialect {
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
        type_registry()
    }

    fn sql_exprs(&self) -> &SqlExpressions {
        &self.sql_exprs
    }
}

/// Factory registered with the dialect registry.
pub fn create(raw: &RawConfig) -> Result<Box<dyn DialectAdapter>, ValidationError> {
    let config = MySqlConnectionConfig::from_raw(raw)?;
    Ok(Box::new(MySqlDialect {
        config,
        sql_exprs: sql_expressions(),
    }))
}
