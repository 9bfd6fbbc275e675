//! Board snapshots recorded one per move.

use super::position::{Location, Position};
use super::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One entry in the game history: the board after a move, plus where that
/// move was played.
///
/// The opening snapshot has no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MoveRecord {
    /// Board after the move.
    squares: Board,
    /// Cell filled by the move; `None` for the opening board.
    position: Option<Position>,
}

impl MoveRecord {
    /// The empty-board snapshot every history starts with.
    pub fn opening() -> Self {
        Self {
            squares: Board::new(),
            position: None,
        }
    }

    /// Records `squares` as the result of playing at `position`.
    pub fn played(squares: Board, position: Position) -> Self {
        Self {
            squares,
            position: Some(position),
        }
    }

    /// One-based location of the cell filled by this move.
    pub fn location(&self) -> Option<Location> {
        self.position.map(Position::location)
    }
}
