//! Rewind Tic-Tac-Toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind_tictactoe::GameState;
use rewind_tui::{Cli, Command, TuiConfig, replay_transcript};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config, moves } => run_play(config, moves).await,
        Command::Replay {
            moves,
            sort_descending,
        } => run_replay(&moves, sort_descending),
    }
}

/// Run the interactive game.
async fn run_play(config_path: PathBuf, moves: Vec<usize>) -> Result<()> {
    let config = TuiConfig::load(&config_path)?;
    let initial = GameState::replay(&moves);
    rewind_tui::tui::run_tui(config, initial).await
}

/// Print the transcript of a move sequence.
fn run_replay(moves: &[usize], sort_descending: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = moves.len(), sort_descending, "Replaying moves");
    print!("{}", replay_transcript(moves, sort_descending));
    Ok(())
}
