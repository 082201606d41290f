//! Sink abstraction for the meta-ingest framework.
//!
//! This crate defines the `Sink` trait that all terminal pipeline stages
//! implement, the `SinkStatus` ledger that records run health, and the
//! `SinkRegistry` that resolves a configured sink name to a factory.
//!
//! # Architecture
//!
//! A workflow run drives exactly one sink:
//!
//! 1. The runner resolves a factory by name via [`SinkRegistry::resolve`]
//! 2. The factory validates config and acquires resources in
//!    [`SinkFactory::create`], returning a ready sink or
//!    [`SinkInitializationError`] (no partial sink on failure)
//! 3. The runner calls [`Sink::write_record`] once per entity
//! 4. The runner calls [`Sink::close`] exactly once, on every exit path
//!
//! # Failure handling
//!
//! The key contract is "continue on per-item error, surface in the report":
//! a recoverable per-record problem appends a warning, an unrecoverable one
//! appends a failure, and in both cases the run continues. Only
//! infrastructure failures propagate out of `write_record`. The final
//! [`SinkStatus`] is the single source of truth for run health; aggregate
//! failure policy belongs to the caller.

mod registry;
mod status;
mod traits;

pub use registry::{SinkRegistry, UnknownSinkError};
pub use status::{SinkFailure, SinkStatus, SinkWarning};
pub use traits::{Sink, SinkFactory, SinkInitializationError};

/// Raw, untyped configuration block as found in a workflow file.
pub type RawConfig = serde_json::Map<String, serde_json::Value>;
