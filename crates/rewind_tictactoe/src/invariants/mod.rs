//! First-class invariants for the game state.
//!
//! Invariants are logical properties that hold after every accepted
//! operation. They are testable on their own and checked by the reducer in
//! debug builds.

use super::state::GameState;
use tracing::{error, instrument};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to six invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);
impl_invariant_set!(I1, I2, I3, I4, I5, I6);

pub mod history_consistent;
pub mod origin;
pub mod terminal;
pub mod turn_parity;

pub use history_consistent::{FilledCountInvariant, SingleCellDeltaInvariant};
pub use origin::{EmptyOriginInvariant, StepInBoundsInvariant};
pub use terminal::NoMoveAfterWinInvariant;
pub use turn_parity::TurnParityInvariant;

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    EmptyOriginInvariant,
    StepInBoundsInvariant,
    TurnParityInvariant,
    FilledCountInvariant,
    NoMoveAfterWinInvariant,
    SingleCellDeltaInvariant,
);

/// Panics in debug builds if any game invariant is violated.
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(state)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "Game invariants violated");
        panic!("Game invariants violated: {descriptions}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, MoveRecord, Operation, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_time_travel() {
        let state = GameState::replay(&[0, 4, 8, 2])
            .reduce(Operation::Jump(1))
            .reduce(Operation::ToggleSort)
            .reduce(Operation::Move(6));
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut state = GameState::replay(&[4]);
        state.history[0] = MoveRecord::played(
            Board::new().with_mark(Position::TopLeft, Player::O),
            Position::TopLeft,
        );
        state.x_is_next = true;

        let violations = GameInvariants::check_all(&state).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.to_string()).collect();
        assert!(descriptions.contains(&EmptyOriginInvariant::description().to_string()));
        assert!(descriptions.contains(&TurnParityInvariant::description().to_string()));
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyOriginInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&GameState::replay(&[0, 1, 2])).is_ok());
    }
}
