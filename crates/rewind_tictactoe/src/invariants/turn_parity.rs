//! Turn parity invariant: X moves on even steps, O on odd steps.

use super::super::GameState;
use super::Invariant;

/// Invariant: `x_is_next` always equals "step number is even".
///
/// Turn order is derived from the step number, so jumping anywhere in the
/// history hands the move to the right player.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.x_is_next() == (state.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "X is next exactly on even steps"
    }
}
