//! Entity payloads consumed by sinks.

use serde::{Deserialize, Serialize};

/// One unit of metadata produced by an upstream extraction stage.
///
/// The framework places no constraints on the payload shape beyond it being
/// JSON; concrete sinks declare which entity kinds they accept. Entities are
/// identified by their fully-qualified name, which is what ends up in the
/// sink status ledger when a write succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity kind (e.g. "table", "database", "pipeline")
    pub kind: String,

    /// Fully-qualified name, unique within a run (e.g. "prod.sales.orders")
    pub fqn: String,

    /// The extracted metadata document
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Entity {
    pub fn new(
        kind: impl Into<String>,
        fqn: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            kind: kind.into(),
            fqn: fqn.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_serde_roundtrip() {
        let entity = Entity::new(
            "table",
            "prod.sales.orders",
            serde_json::json!({"columns": ["id", "amount"]}),
        );

        let json = serde_json::to_string(&entity).unwrap();
        let parsed: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entity);
    }

    #[test]
    fn test_entity_payload_defaults_to_null() {
        let parsed: Entity =
            serde_json::from_str(r#"{"kind": "table", "fqn": "db.t"}"#).unwrap();
        assert_eq!(parsed.payload, serde_json::Value::Null);
    }
}
