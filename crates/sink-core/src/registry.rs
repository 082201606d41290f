//! Sink name to factory resolution.

use crate::SinkFactory;
use std::collections::HashMap;
use std::sync::Arc;

/// Error returned by [`SinkRegistry::resolve`] for a name no factory was
/// registered under.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sink type: {0}")]
pub struct UnknownSinkError(pub String);

/// Registry of sink factories, keyed by sink name.
///
/// Registration happens once at process startup, by the bootstrap stage;
/// resolution happens once per workflow run. A lookup miss never corrupts
/// registry state.
#[derive(Default)]
pub struct SinkRegistry {
    factories: HashMap<&'static str, Arc<dyn SinkFactory>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under its own [`SinkFactory::name`].
    pub fn register(&mut self, factory: Arc<dyn SinkFactory>) {
        tracing::debug!("Registering sink factory: {}", factory.name());
        self.factories.insert(factory.name(), factory);
    }

    /// Resolve a configured sink name to its factory.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn SinkFactory>, UnknownSinkError> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| UnknownSinkError(name.to_string()))
    }

    /// Registered sink names, sorted for reproducible logs.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawConfig, Sink, SinkInitializationError, SinkStatus};
    use ingest_core::{Entity, WorkflowContext};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory sink that fails any record whose kind is "bad" and counts
    /// close calls, exercising the full lifecycle contract without I/O.
    struct MemorySink {
        status: SinkStatus,
        closes: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl Sink for MemorySink {
        async fn write_record(&mut self, entity: &Entity) -> anyhow::Result<()> {
            if entity.kind == "bad" {
                self.status.failure(&entity.fqn, "rejected by sink");
            } else {
                self.status.record_written(&entity.fqn);
            }
            Ok(())
        }

        fn status(&self) -> &SinkStatus {
            &self.status
        }

        async fn close(self: Box<Self>) -> anyhow::Result<()> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct MemorySinkFactory {
        closes: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl SinkFactory for MemorySinkFactory {
        fn name(&self) -> &'static str {
            "memory"
        }

        async fn create(
            &self,
            _config: &RawConfig,
            _metadata_config: &RawConfig,
            _ctx: Arc<WorkflowContext>,
        ) -> Result<Box<dyn Sink>, SinkInitializationError> {
            Ok(Box::new(MemorySink {
                status: SinkStatus::new(),
                closes: self.closes.clone(),
            }))
        }
    }

    #[test]
    fn test_resolve_unknown_sink() {
        let registry = SinkRegistry::new();
        let err = match registry.resolve("rest") {
            Ok(_) => panic!("expected unknown sink error"),
            Err(e) => e,
        };
        assert_eq!(err, UnknownSinkError("rest".to_string()));
    }

    #[tokio::test]
    async fn test_resolved_factory_matches_lifecycle_contract() {
        let closes = Arc::new(AtomicUsize::new(0));
        let mut registry = SinkRegistry::new();
        registry.register(Arc::new(MemorySinkFactory {
            closes: closes.clone(),
        }));
        assert_eq!(registry.names(), vec!["memory"]);

        let ctx = Arc::new(WorkflowContext::new("test"));
        let factory = registry.resolve("memory").unwrap();
        let mut sink = factory
            .create(&RawConfig::new(), &RawConfig::new(), ctx)
            .await
            .unwrap();

        // A fails, B succeeds, the run continues through the failure
        let a = Entity::new("bad", "db.a", serde_json::Value::Null);
        let b = Entity::new("table", "db.b", serde_json::Value::Null);
        sink.write_record(&a).await.unwrap();
        sink.write_record(&b).await.unwrap();

        let status = sink.status().clone();
        assert_eq!(status.records, vec!["db.b"]);
        assert_eq!(status.failures.len(), 1);
        assert_eq!(status.failures[0].record, "db.a");

        sink.close().await.unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
}
