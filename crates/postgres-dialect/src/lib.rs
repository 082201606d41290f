//! PostgreSQL dialect adapter.

use dialect_core::{
    optional_string, optional_u64, BaseConnectionConfig, ConnectionConfig, DialectAdapter,
    RawConfig, SqlExpressions, ValidationError,
};
use ingest_core::{SupportedDataType, TypeRegistry};
use std::sync::OnceLock;

pub const SCHEME: &str = "postgresql";
pub const SERVICE_TYPE: &str = "PostgreSQL";

const DEFAULT_PORT: u16 = 5432;

static TYPES: OnceLock<TypeRegistry> = OnceLock::new();

/// The PostgreSQL type registry, populated once at first use.
pub fn type_registry() -> &'static TypeRegistry {
    TYPES.get_or_init(|| {
        let mut registry = TypeRegistry::new();
        registry.register(
            &["CHARACTER VARYING", "VARCHAR", "CHARACTER", "CHAR", "TEXT", "NAME"],
            SupportedDataType::Text,
        );
        registry.register(
            &[
                "SMALLINT",
                "INTEGER",
                "INT",
                "BIGINT",
                "NUMERIC",
                "DECIMAL",
                "REAL",
                "DOUBLE PRECISION",
                "SMALLSERIAL",
                "SERIAL",
                "BIGSERIAL",
                "MONEY",
            ],
            SupportedDataType::Numeric,
        );
        registry.register(
            &[
                "DATE",
                "TIME",
                "TIMETZ",
                "TIMESTAMP",
                "TIMESTAMPTZ",
                "TIMESTAMP WITH TIME ZONE",
                "TIMESTAMP WITHOUT TIME ZONE",
                "INTERVAL",
            ],
            SupportedDataType::Time,
        );
        registry.register(&["BOOLEAN", "BOOL"], SupportedDataType::Boolean);
        registry.register(&["BYTEA"], SupportedDataType::Binary);
        registry.register(
            &["JSON", "JSONB", "XML", "UUID", "ARRAY", "HSTORE"],
            SupportedDataType::Complex,
        );
        registry
    })
}

/// PostgreSQL matches regexes with the `~` operator.
pub fn sql_expressions() -> SqlExpressions {
    SqlExpressions {
        regex_like: "{} ~ '{}'",
        ..SqlExpressions::default()
    }
}

/// PostgreSQL connection configuration with the optional libpq-style
/// `sslmode` and `connect_timeout` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PostgresConnectionConfig {
    pub base: BaseConnectionConfig,
    pub sslmode: Option<String>,
    pub connect_timeout: Option<u64>,
}

impl PostgresConnectionConfig {
    pub fn from_raw(raw: &RawConfig) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();
        let base = BaseConnectionConfig::from_raw(SCHEME, DEFAULT_PORT, raw, &mut missing);
        let connect_timeout = optional_u64(raw, "connect_timeout", &mut missing);
        if !missing.is_empty() {
            return Err(ValidationError { fields: missing });
        }

        Ok(Self {
            base,
            sslmode: optional_string(raw, "sslmode"),
            connect_timeout,
        })
    }
}

impl ConnectionConfig for PostgresConnectionConfig {
    fn base(&self) -> &BaseConnectionConfig {
        &self.base
    }

    fn extra_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sslmode", self.sslmode.clone().unwrap_or_default()),
            (
                "connect_timeout",
                self.connect_timeout
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
            ),
        ]
    }
}

pub struct PostgresDialect {
    config: PostgresConnectionConfig,
    sql_exprs: SqlExpressions,
}

impl DialectAdapter for PostgresDialect {
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
    let config = PostgresConnectionConfig::from_raw(raw)?;
    Ok(Box::new(PostgresDialect {
        config,
        sql_exprs: sql_expressions(),
    }))
}
