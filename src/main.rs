//! Strategy runner CLI entry point.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level, cli.json_logs);

    match cli.command {
        Commands::Buy => cli::commands::buy::run().await,
        Commands::Sell => cli::commands::sell::run().await,
        Commands::Push => cli::commands::push::run().await,
        Commands::Trigger(args) => cli::commands::trigger(&args.message).await,
    }
}
