//! Canonical data types and the raw-name type registry.
//!
//! Every SQL engine reports column types under its own catalog names
//! (`NUMBER`, `VARCHAR`, `TIMESTAMP_LTZ`, ...). The profiler and the schema
//! extraction stages only care about a small canonical classification, so
//! each dialect populates a [`TypeRegistry`] mapping its raw names onto
//! [`SupportedDataType`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical, engine-agnostic classification of a column's raw type.
///
/// The set is closed on purpose: downstream stages branch on these variants
/// and an engine-specific type that does not fit any of them is registered
/// as [`SupportedDataType::Complex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportedDataType {
    /// Character data (CHAR, VARCHAR, TEXT, ...)
    Text,
    /// Exact and approximate numerics (INT, NUMBER, DOUBLE, ...)
    Numeric,
    /// Dates, times and timestamps
    Time,
    /// Boolean values
    Boolean,
    /// Raw byte data (BINARY, BLOB, BYTEA, ...)
    Binary,
    /// Semi-structured or engine-specific types (JSON, VARIANT, ARRAY, ...)
    Complex,
}

impl std::fmt::Display for SupportedDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SupportedDataType::Text => "text",
            SupportedDataType::Numeric => "numeric",
            SupportedDataType::Time => "time",
            SupportedDataType::Boolean => "boolean",
            SupportedDataType::Binary => "binary",
            SupportedDataType::Complex => "complex",
        };
        f.write_str(s)
    }
}

/// Error returned by [`TypeRegistry::classify`] for a name that was never
/// registered. Lookup misses never corrupt registry state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown data type name: {0}")]
pub struct UnknownTypeError(pub String);

/// Mapping from raw engine type names to [`SupportedDataType`].
///
/// Each dialect builds one registry when it is registered with the dialect
/// registry, before any adapter instance exists; after that the registry is
/// only read. Name comparison is case-insensitive: names are canonicalized
/// to uppercase on insert and on lookup.
///
/// Re-registering a raw name overwrites the previous entry (last
/// registration wins), matching plain map-update semantics.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    mapping: HashMap<String, SupportedDataType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a set of raw type names under one canonical type.
    pub fn register(&mut self, raw_names: &[&str], canonical: SupportedDataType) {
        for name in raw_names {
            self.mapping.insert(name.to_uppercase(), canonical);
        }
    }

    /// Classify a raw type name as reported by the engine's catalog.
    ///
    /// Returns [`UnknownTypeError`] for names that were never registered;
    /// there is no wildcard or prefix matching.
    pub fn classify(&self, raw_name: &str) -> Result<SupportedDataType, UnknownTypeError> {
        self.mapping
            .get(&raw_name.to_uppercase())
            .copied()
            .ok_or_else(|| UnknownTypeError(raw_name.to_string()))
    }

    /// Number of registered raw names.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_case_insensitive() {
        let mut registry = TypeRegistry::new();
        registry.register(&["VARCHAR", "TEXT"], SupportedDataType::Text);

        for name in ["VARCHAR", "varchar", "VarChar"] {
            assert_eq!(registry.classify(name).unwrap(), SupportedDataType::Text);
        }
    }

    #[test]
    fn test_classify_unknown_name() {
        let mut registry = TypeRegistry::new();
        registry.register(&["NUMBER"], SupportedDataType::Numeric);

        let err = registry.classify("GEOGRAPHY").unwrap_err();
        assert_eq!(err, UnknownTypeError("GEOGRAPHY".to_string()));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = TypeRegistry::new();
        registry.register(&["JSON"], SupportedDataType::Text);
        registry.register(&["JSON"], SupportedDataType::Complex);

        assert_eq!(registry.classify("json").unwrap(), SupportedDataType::Complex);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_supported_data_type_serde_roundtrip() {
        let json = serde_json::to_string(&SupportedDataType::Numeric).unwrap();
        assert_eq!(json, "\"numeric\"");

        let parsed: SupportedDataType = serde_json::from_str("\"time\"").unwrap();
        assert_eq!(parsed, SupportedDataType::Time);
    }
}
