use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forks_and_folks::cli::Cli;
use forks_and_folks::config::Config;
use forks_and_folks::console::Console;
use forks_and_folks::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = cli.apply(Config::load(&cli.config)?);

    // Initialize logging on stderr so the menus on stdout stay readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Forks & Folks v{}", env!("CARGO_PKG_VERSION"));

    // Initialize database
    let db = forks_and_folks::db::init(&config.store.path).await?;

    let state = AppState::new(config, db);
    let mut console = Console::new(&state, io::stdin().lock(), io::stdout().lock());
    let outcome = console.run().await;

    forks_and_folks::db::close(Some(state.db)).await;
    outcome?;

    tracing::info!("Stopped");
    Ok(())
}
