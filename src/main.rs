use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod discovery;
mod error;
mod exit;
mod linter;
mod output;
mod parser;
mod registry;
mod scheduler;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("lintgate=debug")
    } else {
        EnvFilter::new("lintgate=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Some(Commands::Run(args)) => cli::run::execute(args).await,
        Some(Commands::Schema) => cli::schema::execute(),
        None => cli::run::execute(cli.run).await,
    }
}
