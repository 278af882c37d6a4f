//! CLI entry point for the hex layout generator

use clap::Parser;
use hexcluster::io::cli::{BatchRunner, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> hexcluster::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut runner = BatchRunner::new(cli);
    runner.run()?;
    Ok(())
}
