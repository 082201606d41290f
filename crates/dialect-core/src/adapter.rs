//! Dialect adapter trait and scheme registry.

use crate::{ConnectionConfig, RawConfig, SqlExpressions, ValidationError};
use ingest_core::{SupportedDataType, TypeRegistry, UnknownTypeError};
use std::collections::HashMap;

/// Per-engine strategy object bundling a connection config, a populated
/// type registry and the engine's SQL expression templates.
///
/// Instances are immutable after construction and freely shareable
/// read-only within a run.
pub trait DialectAdapter: Send + Sync {
    /// URL scheme and unique registry key (e.g. "snowflake").
    fn scheme(&self) -> &'static str;

    /// Human-readable service type (e.g. "Snowflake").
    fn service_type(&self) -> &'static str;

    /// The validated connection configuration this adapter was built from.
    fn config(&self) -> &dyn ConnectionConfig;

    /// The dialect's raw-name type registry, populated before any adapter
    /// instance is constructed and read-only afterward.
    fn type_registry(&self) -> &TypeRegistry;

    /// The dialect's SQL expression templates.
    fn sql_exprs(&self) -> &SqlExpressions;

    /// Connection endpoint consumed by downstream SQL client libraries.
    fn connection_url(&self) -> String {
        self.config().build_connection_url()
    }

    /// Classify a raw catalog type name via the dialect's type registry.
    fn classify(&self, raw_name: &str) -> Result<SupportedDataType, UnknownTypeError> {
        self.type_registry().classify(raw_name)
    }
}

/// Constructor for one dialect: validates a raw config block and returns a
/// ready adapter. Validation failures propagate unchanged.
pub type DialectFactory = fn(&RawConfig) -> Result<Box<dyn DialectAdapter>, ValidationError>;

/// Error returned by [`DialectRegistry::resolve`] for a scheme no dialect
/// was registered under.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect scheme: {0}")]
pub struct UnknownSchemeError(pub String);

/// Registry of dialect factories, keyed by scheme.
///
/// Populated once by the bootstrap stage, before any lookup happens;
/// read-only afterward. This is the extensibility point: a new engine is
/// one more `register` call, with no change to generic pipeline code.
#[derive(Default)]
pub struct DialectRegistry {
    factories: HashMap<&'static str, DialectFactory>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, scheme: &'static str, factory: DialectFactory) {
        tracing::debug!("Registering dialect: {scheme}");
        self.factories.insert(scheme, factory);
    }

    /// Resolve a scheme to its dialect factory.
    pub fn resolve(&self, scheme: &str) -> Result<DialectFactory, UnknownSchemeError> {
        self.factories
            .get(scheme)
            .copied()
            .ok_or_else(|| UnknownSchemeError(scheme.to_string()))
    }

    /// Resolve and construct in one step.
    pub fn create(
        &self,
        scheme: &str,
        raw: &RawConfig,
    ) -> Result<Box<dyn DialectAdapter>, DialectError> {
        let factory = self.resolve(scheme)?;
        Ok(factory(raw)?)
    }

    /// Registered schemes, sorted for reproducible logs.
    pub fn schemes(&self) -> Vec<&'static str> {
        let mut schemes: Vec<_> = self.factories.keys().copied().collect();
        schemes.sort_unstable();
        schemes
    }
}

/// Either failure mode of [`DialectRegistry::create`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    #[error(transparent)]
    UnknownScheme(#[from] UnknownSchemeError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
