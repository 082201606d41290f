//! Command-line interface for meta-ingest
//!
//! # Usage Examples
//!
//! ## Run a workflow
//! ```bash
//! meta-ingest run --config workflow.yaml
//! ```
//!
//! with a workflow file like:
//!
//! ```yaml
//! name: nightly-tables
//! source:
//!   path: ./entities.jsonl
//! sink:
//!   type: jsonl
//!   config:
//!     path: ./out/entities.jsonl
//! max_failure_ratio: 0.1
//! ```
//!
//! ## Inspect a dialect
//! ```bash
//! # Connection URL as handed to the SQL client
//! meta-ingest url --scheme snowflake --host h --username u --password p \
//!   --database db --param account=acct1 --param role=admin
//!
//! # Canonical classification of a raw catalog type name
//! meta-ingest classify --scheme postgresql "timestamp with time zone"
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use meta_ingest::{bootstrap, workflow, ConnectionOpts};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meta-ingest")]
#[command(about = "Drive metadata entities from extraction into a configured sink")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a workflow configuration
    Run {
        /// Path to the workflow YAML file
        #[arg(long, value_name = "PATH")]
        config: PathBuf,
    },

    /// Build and print the connection URL for a dialect
    Url {
        /// Dialect scheme (e.g. snowflake, mysql, postgresql)
        #[arg(long)]
        scheme: String,

        #[command(flatten)]
        conn: ConnectionOpts,
    },

    /// Classify a raw catalog type name for a dialect
    Classify {
        /// Dialect scheme (e.g. snowflake, mysql, postgresql)
        #[arg(long)]
        scheme: String,

        /// Raw type name as reported by the engine's catalog
        raw_type: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let config = workflow::WorkflowConfig::from_yaml_file(&config)?;
            let sinks = bootstrap::sink_registry();
            let report = workflow::run(&config, &sinks).await?;

            println!(
                "{}",
                serde_json::to_string_pretty(&report.status)
                    .context("failed to render run report")?
            );
        }
        Commands::Url { scheme, conn } => {
            let dialects = bootstrap::dialect_registry();
            let raw = conn.to_raw_config()?;
            let adapter = dialects.create(&scheme, &raw)?;
            println!("{}", adapter.connection_url());
        }
        Commands::Classify { scheme, raw_type } => {
            let registry = bootstrap::type_registry_for(&scheme)?;
            let canonical = registry.classify(&raw_type)?;
            println!("{canonical}");
        }
    }

    Ok(())
}
