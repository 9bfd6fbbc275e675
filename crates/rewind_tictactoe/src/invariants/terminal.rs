//! Terminal invariant: a decided board ends its branch.

use super::super::GameState;
use super::super::rules::detect_winner;
use super::Invariant;

/// Invariant: no history entry follows a board that already has a winner.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        history
            .iter()
            .position(|record| detect_winner(record.squares()).is_some())
            .is_none_or(|won_at| won_at == history.len() - 1)
    }

    fn description() -> &'static str {
        "No moves recorded after a win"
    }
}
