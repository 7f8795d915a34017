use clap::Parser;
use tracing::{debug, info};

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use cli::Cli;
use config::AppConfig;
use error::CliError;
use logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("CLI error: {:?}", e);
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.logging.level)?;

    info!("carbon-proposal starting");
    debug!("CLI arguments: {:?}", cli);
    debug!("Configuration: {:?}", config);

    cli.run(&config).await?;
    info!("carbon-proposal completed successfully");
    Ok(())
}
