use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use coin_cartel_lib::bootstrap::{config::resolve_config, tracing::init_tracing_subscriber};
use coin_cartel_lib::cli::Cli;
use coin_cartel_lib::commands;

#[tokio::main]
async fn main() -> ExitCode {
    // Variables from a local .env file feed the config overrides below.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match resolve_config(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_tracing_subscriber(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), api = %config.api.base_url, "cartel-onboard starting");

    match commands::run(cli.command, &config).await {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
