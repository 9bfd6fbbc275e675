//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning lines in detection order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winner and the three cells that make it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The player owning all three cells.
    pub player: Player,
    /// Row-major indices of the winning cells.
    pub line: [usize; 3],
}

/// Finds the first completed line on the board.
///
/// Lines are checked in [`LINES`] order and the first match wins, so a
/// board with two completed lines still has a deterministic answer.
#[instrument]
pub fn detect_winner(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        let owns = |pos: Position| board.get(pos).player() == Some(player);
        (owns(b) && owns(c)).then(|| WinResult {
            player,
            line: [a.to_index(), b.to_index(), c.to_index()],
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        marks.iter().fold(Board::new(), |board, &(index, player)| {
            board.with_mark(Position::ALL[index], player)
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|pos| (pos.to_index(), player)));
                let win = detect_winner(&board).expect("completed line");
                assert_eq!(win.player, player);
                assert_eq!(win.line, line.map(Position::to_index));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete; rows are checked first.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(detect_winner(&board).map(|w| w.line), Some([0, 1, 2]));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let win = detect_winner(&board).expect("diagonal");
        assert_eq!(win.line, [2, 4, 6]);
        assert_eq!(win.player, Player::O);
    }
}
