//! History consistency invariants: each snapshot is one move past the last.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the board at step k has exactly k filled cells.
pub struct FilledCountInvariant;

impl Invariant<GameState> for FilledCountInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .all(|(step, record)| record.squares().filled_count() == step)
    }

    fn description() -> &'static str {
        "Board at step k has exactly k filled cells"
    }
}

/// Invariant: consecutive boards differ only at the recorded position, and
/// that cell holds the mark of the player whose turn it was.
///
/// Together with [`FilledCountInvariant`] this means marks are never
/// overwritten or removed.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let Some(pos) = *after.position() else {
                    return false;
                };
                let mover = Player::from_turn(step % 2 == 0);

                before.squares().get(pos) == Square::Empty
                    && after.squares().get(pos) == Square::Occupied(mover)
                    && after.squares().with_mark(pos, mover)
                        == before.squares().with_mark(pos, mover)
            })
    }

    fn description() -> &'static str {
        "Each move fills exactly its recorded cell with the mover's mark"
    }
}
