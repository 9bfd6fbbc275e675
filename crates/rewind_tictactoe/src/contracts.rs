//! Preconditions for operations.
//!
//! Each check returns the [`Rejection`] that explains why an operation
//! would be ignored. The reducer runs them before building the next state.

use super::action::Rejection;
use super::position::Position;
use super::rules::detect_winner;
use super::state::GameState;
use tracing::instrument;

/// Precondition: the board index names a real square.
pub struct InBounds;

impl InBounds {
    /// Resolves `index` to a [`Position`].
    #[instrument]
    pub fn check(index: usize) -> Result<Position, Rejection> {
        Position::from_index(index).ok_or(Rejection::OutOfBounds(index))
    }
}

/// Precondition: the board at the current step has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with the winner if the current board is decided.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        match detect_winner(state.current().squares()) {
            Some(win) => Err(Rejection::GameOver(win.player)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if the current board already has a mark at `pos`.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), Rejection> {
        if state.current().squares().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos.to_index()))
        }
    }
}

/// Composite precondition: a move is legal if it is on the board, the game
/// is not over and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, returning its position.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<Position, Rejection> {
        let pos = InBounds::check(index)?;
        GameNotOver::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(pos)
    }
}

/// Precondition: a jump target is a recorded step.
pub struct StepRecorded;

impl StepRecorded {
    /// Fails if `step` is past the end of the history.
    #[instrument(skip(state))]
    pub fn check(step: usize, state: &GameState) -> Result<(), Rejection> {
        let len = state.history().len();
        if step < len {
            Ok(())
        } else {
            Err(Rejection::StepOutOfRange { step, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operation, Player};

    #[test]
    fn test_out_of_bounds_checked_first() {
        let state = GameState::new();
        assert_eq!(LegalMove::check(9, &state), Err(Rejection::OutOfBounds(9)));
    }

    #[test]
    fn test_occupied_square() {
        let state = GameState::new().reduce(Operation::Move(4));
        assert_eq!(
            LegalMove::check(4, &state),
            Err(Rejection::SquareOccupied(4))
        );
        assert_eq!(LegalMove::check(0, &state), Ok(Position::TopLeft));
    }

    #[test]
    fn test_game_over_reported_before_occupancy() {
        let state = GameState::replay(&[0, 1, 3, 4, 6]);
        assert_eq!(
            LegalMove::check(0, &state),
            Err(Rejection::GameOver(Player::X))
        );
    }

    #[test]
    fn test_step_recorded() {
        let state = GameState::replay(&[0, 1]);
        assert!(StepRecorded::check(2, &state).is_ok());
        assert_eq!(
            StepRecorded::check(3, &state),
            Err(Rejection::StepOutOfRange { step: 3, len: 3 })
        );
    }
}
