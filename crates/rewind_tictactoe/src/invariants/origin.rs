//! Structural invariants: the opening board and the step pointer.

use super::super::GameState;
use super::Invariant;

/// Invariant: the first history entry is an empty board with no position.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first().is_some_and(|origin| {
            origin.squares().filled_count() == 0 && origin.position().is_none()
        })
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

/// Invariant: the step number indexes a recorded snapshot.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Step number is within history"
    }
}
