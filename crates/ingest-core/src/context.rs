//! Run-scoped workflow context.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Shared, read-only handle describing one workflow run.
///
/// The workflow runner creates a single context per run and passes it by
/// reference (`Arc`) into every pipeline stage. Stages treat it as
/// read-only; no stage-local state lives here.
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// Unique identifier for this run
    pub run_id: Uuid,

    /// Human-readable workflow name from the workflow configuration
    pub workflow_name: String,

    /// When the run started
    pub started_at: DateTime<Utc>,
}

impl WorkflowContext {
    pub fn new(workflow_name: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            workflow_name: workflow_name.into(),
            started_at: Utc::now(),
        }
    }
}
