//! Dialect adapter contract for meta-ingest.
//!
//! A dialect adapter bundles everything the profiler and the metadata
//! extractor need to talk to one SQL engine:
//!
//! - a validated connection configuration that derives the engine's
//!   connection URL ([`ConnectionConfig`])
//! - a populated type registry mapping the engine's raw catalog type names
//!   to canonical types (built by each dialect crate)
//! - the engine's SQL expression templates ([`SqlExpressions`])
//!
//! Adding a new engine means implementing [`DialectAdapter`] in a new crate
//! and registering its factory with [`DialectRegistry`]; generic pipeline
//! code never changes.

mod adapter;
mod config;
mod expressions;

pub use adapter::{
    DialectAdapter, DialectError, DialectFactory, DialectRegistry, UnknownSchemeError,
};
pub use config::{
    optional_string, optional_u64, require_string, BaseConnectionConfig, ConnectionConfig,
    RawConfig, ValidationError,
};
pub use expressions::{render, SqlExpressions};
