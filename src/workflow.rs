//! Workflow runner.
//!
//! A workflow run resolves its configured sink, streams entities from the
//! source into it, and reports health through the sink's status ledger.
//! The runner owns the sink for the whole run and closes it exactly once,
//! on every exit path, including when a write fails mid-run.

use anyhow::{Context, Result};
use ingest_core::WorkflowContext;
use serde::Deserialize;
use sink_core::{Sink, SinkRegistry, SinkStatus};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::jsonl::EntityReader;

fn default_id_field() -> String {
    "fqn".to_string()
}

fn default_kind() -> String {
    "table".to_string()
}

/// Source section of a workflow file: where entities come from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Path to a JSONL file of entities
    pub path: PathBuf,

    /// JSON field holding the entity's fully-qualified name
    #[serde(default = "default_id_field")]
    pub id_field: String,

    /// Entity kind for lines without an explicit `kind` field
    #[serde(default = "default_kind")]
    pub kind: String,
}

/// Sink section of a workflow file: destination type plus its raw config.
#[derive(Debug, Clone, Deserialize)]
pub struct SinkSection {
    /// Registered sink name (e.g. "console", "jsonl")
    #[serde(rename = "type")]
    pub sink_type: String,

    /// Sink-specific configuration block, validated by the sink factory
    #[serde(default)]
    pub config: sink_core::RawConfig,
}

/// One workflow configuration, loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowConfig {
    pub name: String,
    pub source: SourceConfig,
    pub sink: SinkSection,

    /// Shared metadata-service configuration passed to the sink factory
    #[serde(default)]
    pub metadata: sink_core::RawConfig,

    /// Abort policy: fail the run when failures / (records + failures)
    /// exceeds this ratio. A run with failures below the threshold still
    /// exits cleanly; the ledger is the record of what went wrong.
    #[serde(default)]
    pub max_failure_ratio: Option<f64>,
}

impl WorkflowConfig {
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read workflow config {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse workflow config {}", path.display()))
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct WorkflowReport {
    pub status: SinkStatus,
}

/// Execute one workflow run.
pub async fn run(config: &WorkflowConfig, sinks: &SinkRegistry) -> Result<WorkflowReport> {
    let ctx = Arc::new(WorkflowContext::new(&config.name));
    tracing::info!("Starting workflow '{}' (run {})", config.name, ctx.run_id);

    let factory = sinks.resolve(&config.sink.sink_type)?;
    let mut sink = factory
        .create(&config.sink.config, &config.metadata, ctx.clone())
        .await?;

    let write_result = drive(sink.as_mut(), &config.source).await;

    // Close on every exit path; a close error must not mask an earlier
    // in-flight write error.
    let status = sink.status().clone();
    let close_result = sink.close().await;
    if let Err(e) = &close_result {
        tracing::error!("Failed to close sink: {e:#}");
    }
    write_result?;
    close_result?;

    tracing::info!(
        "Workflow '{}' finished: {} records, {} warnings, {} failures",
        config.name,
        status.records.len(),
        status.warnings.len(),
        status.failures.len()
    );

    if let Some(threshold) = config.max_failure_ratio {
        let ratio = status.failure_ratio();
        if ratio > threshold {
            anyhow::bail!(
                "failure ratio {ratio:.3} exceeded the configured threshold {threshold:.3}"
            );
        }
    }

    Ok(WorkflowReport { status })
}

async fn drive(sink: &mut dyn Sink, source: &SourceConfig) -> Result<()> {
    let reader = EntityReader::open(&source.path, &source.id_field, &source.kind)?;

    let mut seen = 0usize;
    for entity in reader {
        let entity = entity?;
        sink.write_record(&entity).await?;
        seen += 1;
        if seen % 1000 == 0 {
            let status = sink.status();
            tracing::debug!(
                "Progress: {} entities seen, {} written, {} failed",
                seen,
                status.records.len(),
                status.failures.len()
            );
        }
    }

    tracing::debug!("Source drained after {seen} entities");
    Ok(())
}
