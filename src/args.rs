//! CLI argument definitions.

use clap::Args;
use std::path::PathBuf;

/// Arguments for validating a schema.
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Path to schema file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, short = 's')]
    pub schema: PathBuf,
}

/// Arguments for sampling rows.
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    /// Path to schema file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Number of rows to generate
    #[arg(long, short = 'n', default_value = "10")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "MESS_SEED", default_value = "42")]
    pub seed: u64,

    /// Output file for JSON lines (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
