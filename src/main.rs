//! Command-line interface for mess
//!
//! # Usage Examples
//!
//! ## Validate a schema
//! ```bash
//! mess check --schema users.json
//! ```
//!
//! ## Generate rows
//! ```bash
//! # 1000 JSON lines on stdout
//! mess sample --schema users.json --count 1000
//!
//! # Reproducible output written to a file
//! MESS_SEED=7 mess sample --schema users.yaml --count 50 --output users.jsonl
//! ```
//!
//! Logs go to stderr and honor `RUST_LOG` (e.g. `RUST_LOG=mess=debug`).

use clap::{Parser, Subcommand};
use mess::commands::{run_check, run_sample};
use mess::{CheckArgs, SampleArgs};

#[derive(Parser)]
#[command(name = "mess")]
#[command(about = "Generate synthetic table rows from a declarative schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a schema and print its fields and keys
    Check(CheckArgs),

    /// Generate rows as JSON lines
    Sample(SampleArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(&args, &mut std::io::stdout().lock()),
        Commands::Sample(args) => run_sample(&args).map(|_| ()),
    }
}
