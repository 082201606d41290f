//! JSONL file sink.
//!
//! Writes each entity as one JSON object per line. The file is created (or
//! truncated) when the sink is constructed and flushed when it is closed,
//! so the output of a run is a self-contained JSONL document.
//!
//! Configuration:
//!
//! ```yaml
//! sink:
//!   type: jsonl
//!   config:
//!     path: ./out/entities.jsonl   # required
//! ```

use ingest_core::{Entity, WorkflowContext};
use sink_core::{RawConfig, Sink, SinkFactory, SinkInitializationError, SinkStatus};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub struct JsonlSink {
    path: PathBuf,
    writer: BufWriter<File>,
    status: SinkStatus,
}

#[async_trait::async_trait]
impl Sink for JsonlSink {
    async fn write_record(&mut self, entity: &Entity) -> anyhow::Result<()> {
        if entity.fqn.trim().is_empty() {
            self.status
                .warning(&entity.kind, "entity has a blank fully-qualified name");
            return Ok(());
        }

        let line = match serde_json::to_string(entity) {
            Ok(line) => line,
            Err(e) => {
                self.status
                    .failure(&entity.fqn, format!("failed to serialize entity: {e}"));
                return Ok(());
            }
        };

        match writeln!(self.writer, "{line}") {
            Ok(()) => self.status.record_written(&entity.fqn),
            Err(e) => {
                self.status
                    .failure(&entity.fqn, format!("failed to write entity: {e}"));
            }
        }
        Ok(())
    }

    fn status(&self) -> &SinkStatus {
        &self.status
    }

    async fn close(self: Box<Self>) -> anyhow::Result<()> {
        let JsonlSink {
            path,
            mut writer,
            status,
        } = *self;
        writer.flush()?;
        tracing::info!("Wrote {} records to {}", status.records.len(), path.display());
        Ok(())
    }
}

pub struct JsonlSinkFactory;

#[async_trait::async_trait]
impl SinkFactory for JsonlSinkFactory {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    async fn create(
        &self,
        config: &RawConfig,
        _metadata_config: &RawConfig,
        ctx: Arc<WorkflowContext>,
    ) -> Result<Box<dyn Sink>, SinkInitializationError> {
        let path = match config.get("path").and_then(|v| v.as_str()) {
            Some(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => {
                return Err(SinkInitializationError::InvalidConfig {
                    reason: "'path' is required".to_string(),
                })
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SinkInitializationError::Resource {
                resource: parent.display().to_string(),
                source: e,
            })?;
        }

        let file = File::create(&path).map_err(|e| SinkInitializationError::Resource {
            resource: path.display().to_string(),
            source: e,
        })?;

        tracing::debug!(
            "Creating JSONL sink at {} for run {}",
            path.display(),
            ctx.run_id
        );
        Ok(Box::new(JsonlSink {
            path,
            writer: BufWriter::new(file),
            status: SinkStatus::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(path: &std::path::Path) -> RawConfig {
        let mut config = RawConfig::new();
        config.insert(
            "path".to_string(),
            serde_json::json!(path.to_str().unwrap()),
        );
        config
    }

    #[tokio::test]
    async fn test_entities_round_trip_through_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entities.jsonl");
        let ctx = Arc::new(WorkflowContext::new("test"));

        let mut sink = JsonlSinkFactory
            .create(&config_for(&path), &RawConfig::new(), ctx)
            .await
            .unwrap();

        let a = Entity::new("table", "db.a", serde_json::json!({"rows": 10}));
        let b = Entity::new("table", "db.b", serde_json::json!({"rows": 20}));
        sink.write_record(&a).await.unwrap();
        sink.write_record(&b).await.unwrap();

        let status = sink.status().clone();
        assert_eq!(status.records, vec!["db.a", "db.b"]);
        sink.close().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let entities: Vec<Entity> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entities, vec![a, b]);
    }

    #[tokio::test]
    async fn test_missing_path_is_rejected() {
        let ctx = Arc::new(WorkflowContext::new("test"));
        let err = JsonlSinkFactory
            .create(&RawConfig::new(), &RawConfig::new(), ctx)
            .await
            .err()
            .expect("config must be rejected");
        assert!(matches!(err, SinkInitializationError::InvalidConfig { .. }));
    }

    #[tokio::test]
    async fn test_unwritable_path_is_a_resource_error() {
        let dir = TempDir::new().unwrap();
        // A path whose parent is a regular file cannot be created
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();
        let path = blocker.join("entities.jsonl");

        let ctx = Arc::new(WorkflowContext::new("test"));
        let err = JsonlSinkFactory
            .create(&config_for(&path), &RawConfig::new(), ctx)
            .await
            .err()
            .expect("creation must fail");
        assert!(matches!(err, SinkInitializationError::Resource { .. }));
    }
}
