use crate::cli::Cli;
use crate::error::exit_codes;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

mod app_config;
mod auth;
mod cli;
mod commands;
mod domain;
mod error;
mod graph;
mod import;
mod output;
mod profile;
mod run;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    debug!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match run::run(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
