use std::process::ExitCode;

use clap::Parser;
use scripts::{
    cli::{is_informational, Cli},
    commands::{failure_message, run},
    config::DeployConfig,
    constants::DEFAULT_LOG_FILTER,
    errors::DeployError,
    types::DeployedContract,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match deploy(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Validate the configuration, then deploy
async fn deploy(cli: Cli) -> Result<DeployedContract, DeployError> {
    let config = DeployConfig::from_env(cli)?;
    run(&config).await
}
