//! Rewind Tic-Tac-Toe terminal host.
//!
//! Wraps the pure game in [`rewind_tictactoe`] with everything needed to
//! play it in a terminal.
//!
//! # Architecture
//!
//! - **CLI**: `play` (interactive) and `replay` (headless transcript)
//! - **Config**: TOML settings for logging, polling and colors
//! - **TUI**: ratatui screen with mouse and keyboard input
//!
//! # Example
//!
//! ```
//! let text = rewind_tui::replay_transcript(&[0, 1, 3, 4, 6], false);
//! assert!(text.contains("Winner: X!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Theme, TuiConfig};

use rewind_tictactoe::{GameState, GameView, Operation, render_transcript};
use tracing::instrument;

/// Plays `moves` from a fresh game and renders the final position as text.
#[instrument]
pub fn replay_transcript(moves: &[usize], sort_descending: bool) -> String {
    let mut state = GameState::replay(moves);
    if sort_descending {
        state = state.reduce(Operation::ToggleSort);
    }
    render_transcript(&GameView::from(&state))
}
