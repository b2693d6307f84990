//! vtmctl - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use vtmctl::{run_command, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting vtmctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: resource={:?}, name={:?}, list_api={}, output={}, concurrency={}",
        cli.resource, cli.name, cli.list_api, cli.output, cli.concurrency
    );

    match run_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
