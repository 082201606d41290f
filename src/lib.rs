//! meta-ingest library
//!
//! A pluggable sink and dialect-adapter framework for metadata ingestion
//! workflows.
//!
//! # Features
//!
//! - Sink registry: heterogeneous output destinations resolved by name and
//!   driven uniformly by the workflow runner
//! - Status ledger: per-record warnings and failures surface in the run
//!   report instead of aborting the run
//! - Dialect adapters: per-engine connection config, raw-type
//!   classification and SQL expression templates behind one contract
//! - Guaranteed cleanup: the runner closes the sink on every exit path
//!
//! # Workspace crates
//!
//! Each concern has its own dedicated crate:
//!
//! - `ingest_core` - canonical types, type registry, entities, run context
//! - `sink_core` - `Sink` trait, status ledger, sink registry
//! - `dialect_core` - connection config, SQL templates, dialect registry
//! - `snowflake_dialect` / `mysql_dialect` / `postgres_dialect` - engines
//! - `console_sink` / `jsonl_sink` - bundled sink implementations
//!
//! # CLI Usage
//!
//! ```bash
//! # Execute a workflow
//! meta-ingest run --config workflow.yaml
//!
//! # Print the connection URL a dialect would hand to its SQL client
//! meta-ingest url --scheme snowflake --host h --username u --password p \
//!   --database db --param account=acct1 --param role=admin
//!
//! # Classify a raw catalog type name
//! meta-ingest classify --scheme snowflake TIMESTAMP_LTZ
//! ```

use clap::Parser;

pub mod bootstrap;
pub mod jsonl;
pub mod workflow;

/// Connection flags shared by the dialect-oriented subcommands.
///
/// Dialect-specific parameters (account, warehouse, sslmode, ...) are
/// passed as repeatable `--param key=value` flags and validated by the
/// dialect itself.
#[derive(Parser, Clone, Debug)]
pub struct ConnectionOpts {
    /// Database host
    #[arg(long, env = "INGEST_HOST")]
    pub host: String,

    /// Database port (dialect default when omitted)
    #[arg(long, env = "INGEST_PORT")]
    pub port: Option<u16>,

    /// Database username
    #[arg(long, env = "INGEST_USERNAME")]
    pub username: String,

    /// Database password
    #[arg(long, env = "INGEST_PASSWORD")]
    pub password: String,

    /// Database name
    #[arg(long, env = "INGEST_DATABASE")]
    pub database: String,

    /// Dialect-specific parameter (repeatable, format: key=value)
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

impl ConnectionOpts {
    /// Assemble the raw config block a dialect factory expects.
    pub fn to_raw_config(&self) -> anyhow::Result<dialect_core::RawConfig> {
        let mut raw = dialect_core::RawConfig::new();
        raw.insert("host".to_string(), serde_json::json!(self.host));
        raw.insert("username".to_string(), serde_json::json!(self.username));
        raw.insert("password".to_string(), serde_json::json!(self.password));
        raw.insert("database".to_string(), serde_json::json!(self.database));
        if let Some(port) = self.port {
            raw.insert("port".to_string(), serde_json::json!(port));
        }

        for param in &self.params {
            let (key, value) = param.split_once('=').ok_or_else(|| {
                anyhow::anyhow!("invalid --param '{param}': expected key=value")
            })?;
            raw.insert(key.to_string(), serde_json::json!(value));
        }
        Ok(raw)
    }
}
