//! JSONL entity source.
//!
//! Reads entities from a JSON Lines file: one JSON object per line, blank
//! lines skipped. The identifier field is configurable; a line without it
//! is a malformed source and aborts the read with a 1-based line number in
//! the error.

use anyhow::{anyhow, Result};
use ingest_core::Entity;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Iterator over entities in a JSONL file.
pub struct EntityReader {
    lines: Lines<BufReader<File>>,
    source_name: String,
    id_field: String,
    default_kind: String,
    line_no: usize,
}

impl EntityReader {
    /// Open a JSONL file for reading.
    ///
    /// `id_field` names the JSON field holding the entity's
    /// fully-qualified name; `default_kind` is used for lines without an
    /// explicit `kind` field.
    pub fn open(path: &Path, id_field: &str, default_kind: &str) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| anyhow!("failed to open entity source {}: {e}", path.display()))?;
        tracing::info!("Reading entities from: {}", path.display());

        Ok(Self {
            lines: BufReader::new(file).lines(),
            source_name: path.display().to_string(),
            id_field: id_field.to_string(),
            default_kind: default_kind.to_string(),
            line_no: 0,
        })
    }

    fn parse_line(&self, line: &str) -> Result<Entity> {
        let value: Value = serde_json::from_str(line).map_err(|e| {
            anyhow!(
                "error parsing JSON at {}:{}: {e}",
                self.source_name,
                self.line_no
            )
        })?;

        let obj = value.as_object().ok_or_else(|| {
            anyhow!(
                "entity at {}:{} must be a JSON object",
                self.source_name,
                self.line_no
            )
        })?;

        let fqn = match obj.get(&self.id_field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(anyhow!(
                    "entity at {}:{} is missing identifier field '{}'",
                    self.source_name,
                    self.line_no,
                    self.id_field
                ))
            }
        };

        let kind = obj
            .get("kind")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.default_kind)
            .to_string();

        Ok(Entity {
            kind,
            fqn,
            payload: value,
        })
    }
}

impl Iterator for EntityReader {
    type Item = Result<Entity>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line(&line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("entities.jsonl");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_reads_entities_and_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_source(
            &dir,
            "{\"fqn\": \"db.a\", \"kind\": \"table\"}\n\n{\"fqn\": \"db.b\"}\n",
        );

        let entities: Vec<Entity> = EntityReader::open(&path, "fqn", "table")
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].fqn, "db.a");
        assert_eq!(entities[1].fqn, "db.b");
        assert_eq!(entities[1].kind, "table");
    }

    #[test]
    fn test_missing_id_field_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "{\"fqn\": \"db.a\"}\n{\"name\": \"db.b\"}\n");

        let result: Result<Vec<Entity>> =
            EntityReader::open(&path, "fqn", "table").unwrap().collect();
        let err = result.unwrap_err().to_string();
        assert!(err.contains(":2"), "unexpected error: {err}");
        assert!(err.contains("fqn"), "unexpected error: {err}");
    }

    #[test]
    fn test_numeric_identifier_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "{\"id\": 42}\n");

        let entities: Vec<Entity> = EntityReader::open(&path, "id", "row")
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(entities[0].fqn, "42");
        assert_eq!(entities[0].kind, "row");
    }
}
