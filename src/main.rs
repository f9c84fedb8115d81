//! graph-paginate CLI
//!
//! Command-line interface for fetching paginated Graph API results

use clap::{CommandFactory, Parser};
use graph_paginate::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        if e.is_usage() {
            Cli::command()
                .error(clap::error::ErrorKind::InvalidValue, e)
                .exit();
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
