//! Console Tic-Tac-Toe entry point.

use anyhow::Result;
use clap::Parser;
use console_tictactoe::{Cli, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Console Tic-Tac-Toe");

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout());
    let summary = session.run()?;

    info!(games = summary.games_played(), "Goodbye");
    Ok(())
}
