//! Command-line interface for rewind_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - play in the terminal and travel back through moves
#[derive(Parser, Debug)]
#[command(name = "rewind_tui")]
#[command(about = "Tic-tac-toe with time-travel history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML config file (defaults are used if it is missing)
        #[arg(short, long, default_value = "rewind.toml")]
        config: PathBuf,

        /// Cell indices (0-8) to play before handing over, comma-separated
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,
    },

    /// Replay moves headlessly and print the final board, status and move list
    Replay {
        /// Cell indices (0-8) to play, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// List moves newest first
        #[arg(long)]
        sort_descending: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("rewind.toml"),
            moves: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["rewind_tui"]).expect("parse");
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_play_with_seed_moves() {
        let cli = Cli::try_parse_from(["rewind_tui", "play", "--moves", "0,4,8", "-c", "x.toml"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Play {
                config: PathBuf::from("x.toml"),
                moves: vec![0, 4, 8],
            })
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["rewind_tui", "replay"]).is_err());

        let cli = Cli::try_parse_from([
            "rewind_tui",
            "replay",
            "--moves",
            "0,1",
            "--sort-descending",
        ])
        .expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 1],
                sort_descending: true,
            })
        );
    }
}
