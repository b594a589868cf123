pub mod run;
pub mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lintgate")]
#[command(
    author,
    version,
    about = "Pre-commit lint gate: runs configured linters over staged files in parallel"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the gate (the default when no subcommand is given)
    Run(RunArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    /// Path to config file (default: lintgate.yaml + lintgate.local.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project directory to run in
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override the diff command listing changed files
    #[arg(long)]
    pub diff_command: Option<String>,

    /// Override exclude patterns (comma-separated substrings)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Show selected files and linters without running anything
    #[arg(long)]
    pub dry_run: bool,
}
