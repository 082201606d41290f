//! Console sink.
//!
//! Prints each entity to stdout as one JSON document. Useful for wiring up
//! and debugging a workflow before pointing it at a real destination.
//!
//! Configuration:
//!
//! ```yaml
//! sink:
//!   type: console
//!   config:
//!     pretty: true   # optional, default false
//! ```

use ingest_core::{Entity, WorkflowContext};
use sink_core::{RawConfig, Sink, SinkFactory, SinkInitializationError, SinkStatus};
use std::sync::Arc;

pub struct ConsoleSink {
    pretty: bool,
    status: SinkStatus,
}

#[async_trait::async_trait]
impl Sink for ConsoleSink {
    async fn write_record(&mut self, entity: &Entity) -> anyhow::Result<()> {
        if entity.fqn.trim().is_empty() {
            self.status.warning(
                &entity.kind,
                "entity has a blank fully-qualified name",
            );
        }

        let rendered = if self.pretty {
            serde_json::to_string_pretty(entity)
        } else {
            serde_json::to_string(entity)
        };

        match rendered {
            Ok(line) => {
                println!("{line}");
                if !entity.fqn.trim().is_empty() {
                    self.status.record_written(&entity.fqn);
                }
            }
            Err(e) => {
                self.status
                    .failure(&entity.fqn, format!("failed to serialize entity: {e}"));
            }
        }
        Ok(())
    }

    fn status(&self) -> &SinkStatus {
        &self.status
    }

    async fn close(self: Box<Self>) -> anyhow::Result<()> {
        tracing::debug!(
            "Console sink closed after {} records",
            self.status.records.len()
        );
        Ok(())
    }
}

pub struct ConsoleSinkFactory;

#[async_trait::async_trait]
impl SinkFactory for ConsoleSinkFactory {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn create(
        &self,
        config: &RawConfig,
        _metadata_config: &RawConfig,
        ctx: Arc<WorkflowContext>,
    ) -> Result<Box<dyn Sink>, SinkInitializationError> {
        let pretty = match config.get("pretty") {
            None => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(other) => {
                return Err(SinkInitializationError::InvalidConfig {
                    reason: format!("'pretty' must be a boolean, got: {other}"),
                })
            }
        };

        tracing::debug!("Creating console sink for run {}", ctx.run_id);
        Ok(Box::new(ConsoleSink {
            pretty,
            status: SinkStatus::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_sink(config: RawConfig) -> Box<dyn Sink> {
        let ctx = Arc::new(WorkflowContext::new("test"));
        ConsoleSinkFactory
            .create(&config, &RawConfig::new(), ctx)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_written_entities_are_recorded() {
        let mut sink = make_sink(RawConfig::new()).await;
        let entity = Entity::new("table", "db.t", serde_json::json!({"a": 1}));
        sink.write_record(&entity).await.unwrap();

        assert_eq!(sink.status().records, vec!["db.t"]);
        assert!(sink.status().is_clean());
        sink.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_fqn_becomes_a_warning() {
        let mut sink = make_sink(RawConfig::new()).await;
        let entity = Entity::new("table", "  ", serde_json::Value::Null);
        sink.write_record(&entity).await.unwrap();

        let status = sink.status();
        assert!(status.records.is_empty());
        assert_eq!(status.warnings.len(), 1);
        assert_eq!(status.warnings[0].record, "table");
    }

    #[tokio::test]
    async fn test_non_boolean_pretty_is_rejected() {
        let ctx = Arc::new(WorkflowContext::new("test"));
        let mut config = RawConfig::new();
        config.insert("pretty".to_string(), serde_json::json!("yes"));

        let err = ConsoleSinkFactory
            .create(&config, &RawConfig::new(), ctx)
            .await
            .err()
            .expect("config must be rejected");
        assert!(matches!(err, SinkInitializationError::InvalidConfig { .. }));
    }
}
