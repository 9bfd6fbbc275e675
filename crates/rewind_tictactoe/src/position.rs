//! Board positions and their one-based grid locations.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column of this position.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// One-based grid location used in move labels.
    pub fn location(self) -> Location {
        Location {
            column: self.column() as u8 + 1,
            row: self.row() as u8 + 1,
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One-based `(column, row)` location of a filled cell.
///
/// Cell `i` maps to `(i mod 3 + 1, i div 3 + 1)`, so the top-right cell
/// renders as `(3,1)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({column},{row})")]
pub struct Location {
    /// Column, 1-3 from the left.
    pub column: u8,
    /// Row, 1-3 from the top.
    pub row: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_index_round_trip_bounds() {
        assert_eq!(Position::from_index(0), Some(Position::TopLeft));
        assert_eq!(Position::from_index(4), Some(Position::Center));
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::MiddleRight.to_index(), 5);
    }

    #[test]
    fn test_location_is_column_then_row() {
        assert_eq!(Position::TopLeft.location(), Location { column: 1, row: 1 });
        assert_eq!(Position::TopRight.location(), Location { column: 3, row: 1 });
        assert_eq!(Position::MiddleLeft.location(), Location { column: 1, row: 2 });
        assert_eq!(Position::BottomCenter.location().to_string(), "(2,3)");
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let board = Board::from_squares({
            let mut squares = [Square::Empty; 9];
            squares[0] = Square::Occupied(Player::X);
            squares[4] = Square::Occupied(Player::O);
            squares
        });

        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
    }
}
