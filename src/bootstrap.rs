//! Explicit registration of the bundled sinks and dialects.
//!
//! Registries are populated here, once, at process startup, before any
//! resolution happens. Keeping registration in one visible place avoids
//! hidden load-order dependencies; a plugin stage would call the same
//! `register` methods.

use dialect_core::{DialectRegistry, UnknownSchemeError};
use ingest_core::TypeRegistry;
use sink_core::SinkRegistry;
use std::sync::Arc;

/// Build the sink registry with every bundled sink.
pub fn sink_registry() -> SinkRegistry {
    let mut registry = SinkRegistry::new();
    registry.register(Arc::new(console_sink::ConsoleSinkFactory));
    registry.register(Arc::new(jsonl_sink::JsonlSinkFactory));
    registry
}

/// Build the dialect registry with every bundled engine.
///
/// Each dialect's type registry is populated here as well, before any
/// adapter instance or concurrent reader exists.
pub fn dialect_registry() -> DialectRegistry {
    let mut registry = DialectRegistry::new();
    registry.register(snowflake_dialect::SCHEME, snowflake_dialect::create);
    registry.register(mysql_dialect::SCHEME, mysql_dialect::create);
    registry.register(postgres_dialect::SCHEME, postgres_dialect::create);

    snowflake_dialect::type_registry();
    mysql_dialect::type_registry();
    postgres_dialect::type_registry();

    registry
}

/// Look up a dialect's type registry without constructing an adapter.
///
/// Used by the `classify` subcommand, which has no connection config to
/// validate.
pub fn type_registry_for(scheme: &str) -> Result<&'static TypeRegistry, UnknownSchemeError> {
    match scheme {
        snowflake_dialect::SCHEME => Ok(snowflake_dialect::type_registry()),
        mysql_dialect::SCHEME => Ok(mysql_dialect::type_registry()),
        postgres_dialect::SCHEME => Ok(postgres_dialect::type_registry()),
        other => Err(UnknownSchemeError(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_sinks_are_registered() {
        let registry = sink_registry();
        assert_eq!(registry.names(), vec!["console", "jsonl"]);
    }

    #[test]
    fn test_bundled_dialects_are_registered() {
        let registry = dialect_registry();
        assert_eq!(registry.schemes(), vec!["mysql", "postgresql", "snowflake"]);
    }

    #[test]
    fn test_type_registry_lookup() {
        assert!(type_registry_for("snowflake").is_ok());
        assert!(matches!(
            type_registry_for("oracle"),
            Err(UnknownSchemeError(_))
        ));
    }
}
