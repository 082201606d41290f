//! Core types for the meta-ingest framework.
//!
//! This crate provides the foundational types used across the ingestion
//! framework, including:
//!
//! - [`SupportedDataType`] - Canonical, engine-agnostic column type classification
//! - [`TypeRegistry`] - Mapping from raw engine type names to canonical types
//! - [`Entity`] - One unit of metadata produced by an upstream extraction stage
//! - [`WorkflowContext`] - Shared, read-only run-scoped handle passed to pipeline stages
//!
//! # Architecture
//!
//! The ingest-core crate sits at the foundation of the framework:
//!
//! ```text
//! ingest-core (this crate)
//!    │
//!    ├─── dialect-core        (connection config, SQL templates, adapter trait)
//!    │       ├─── snowflake-dialect
//!    │       ├─── mysql-dialect
//!    │       └─── postgres-dialect
//!    │
//!    └─── sink-core           (Sink trait, status ledger, sink registry)
//!            ├─── console-sink
//!            └─── jsonl-sink
//! ```
//!
//! # Example
//!
//! ```rust
//! use ingest_core::{SupportedDataType, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(&["VARCHAR", "TEXT"], SupportedDataType::Text);
//!
//! // Lookups are case-insensitive
//! assert_eq!(registry.classify("varchar").unwrap(), SupportedDataType::Text);
//! ```

pub mod context;
pub mod entity;
pub mod types;

// Re-exports for convenience
pub use context::WorkflowContext;
pub use entity::Entity;
pub use types::{SupportedDataType, TypeRegistry, UnknownTypeError};
