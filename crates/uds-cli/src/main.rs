//! UDS CLI - browse the UDS package registry from the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod host;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uds_cli=info,uds_registry=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => commands::search::run(&args).await,
        Commands::Show(args) => commands::show::run(&args).await,
        Commands::Versions(args) => commands::versions::run(&args).await,
        Commands::Ref(args) => commands::reference::run(&args).await,
        Commands::Version => {
            println!("uds {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
