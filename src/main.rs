//! Entry point: parse CLI and dispatch to command handlers.

use std::{process::ExitCode, time::Duration};

use bdl_stats::{
    bdl::{BdlClient, ClientConfig},
    cli::Cli,
    commands::run_command,
    logging::setup_logging,
};
use clap::Parser;
use tracing::error;

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    let app = Cli::parse();

    if let Err(e) = setup_logging(app.global.verbose) {
        eprintln!("{e}");
    }

    let failure_message = app.command.failure_message();
    let config = ClientConfig::default()
        .with_base_url(app.global.base_url)
        .with_timeout(app.global.timeout.map(Duration::from_secs));

    let result = match BdlClient::new(config) {
        Ok(client) => run_command(&client, app.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{failure_message}");
            ExitCode::FAILURE
        }
    }
}
