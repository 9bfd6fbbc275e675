//! First-class operations on a game and the reasons one can be ignored.
//!
//! Operations are plain values. A host turns a click or key press into an
//! [`Operation`] and hands it to [`GameState::reduce`](crate::GameState::reduce);
//! tests drive the game the same way.

use super::types::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Everything a player can do to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Operation {
    /// Place the next mark at a board index (0-8).
    #[display("move {_0}")]
    Move(usize),
    /// Rewind (or fast-forward) to a recorded step.
    #[display("jump {_0}")]
    Jump(usize),
    /// Start over from an empty board.
    #[display("reset")]
    Reset,
    /// Flip the display order of the move list.
    #[display("toggle sort")]
    ToggleSort,
}

/// Why an operation left the game unchanged.
///
/// Rejections are never shown to the player; the game simply does not
/// change. They exist for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    /// The board index is not in 0-8.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(not(source))] usize),

    /// The square is already taken.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] usize),

    /// The current board already has a winner.
    #[display("Game is already over, {_0} won")]
    GameOver(#[error(not(source))] Player),

    /// The requested step is not in the history.
    #[display("Step {step} is outside history of length {len}")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
