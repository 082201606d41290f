//! Sink and sink factory trait definitions.

use crate::{RawConfig, SinkStatus};
use ingest_core::{Entity, WorkflowContext};
use std::sync::Arc;

/// Error returned when a sink cannot be constructed.
///
/// Construction either returns a ready sink or this error; a failed
/// `create` never leaks a partially-initialized sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkInitializationError {
    /// The sink configuration block is missing or malformed.
    #[error("invalid sink configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A resource the sink needs (file, connection) could not be acquired.
    #[error("failed to acquire sink resource {resource}")]
    Resource {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

/// Terminal pipeline stage that persists or forwards processed entities.
///
/// Lifecycle: created once per run by a [`SinkFactory`], written many
/// times, closed exactly once. `close` consumes the sink, so a second call
/// is rejected at compile time; the workflow runner owns the sink and
/// guarantees `close` runs on every exit path, including when an earlier
/// `write_record` returned an error.
///
/// `write_record` calls are never issued concurrently against the same
/// sink. Internal batching is a concrete sink's private concern and must
/// preserve call-order semantics for [`Sink::status`].
#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    /// Write one entity.
    ///
    /// Per-record problems are absorbed into the status ledger (warning or
    /// failure) and the call returns `Ok`; an `Err` means an
    /// infrastructure failure that makes continuing pointless.
    async fn write_record(&mut self, entity: &Entity) -> anyhow::Result<()>;

    /// Live view of the status ledger. Callers must not assume the
    /// snapshot is stable across subsequent writes; clone it to keep one.
    fn status(&self) -> &SinkStatus;

    /// Release all resources acquired at construction.
    ///
    /// Errors during release are reported to the caller, which must not
    /// let them mask an earlier in-flight write error.
    async fn close(self: Box<Self>) -> anyhow::Result<()>;
}

/// Factory resolved from the [`crate::SinkRegistry`] by sink name.
///
/// `metadata_config` carries the shared metadata-service configuration
/// block; sinks that do not talk to the metadata service ignore it.
#[async_trait::async_trait]
pub trait SinkFactory: Send + Sync {
    /// Registry key for this sink type (e.g. "console", "jsonl").
    fn name(&self) -> &'static str;

    /// Validate configuration, acquire resources and return a ready sink.
    async fn create(
        &self,
        config: &RawConfig,
        metadata_config: &RawConfig,
        ctx: Arc<WorkflowContext>,
    ) -> Result<Box<dyn Sink>, SinkInitializationError>;
}
