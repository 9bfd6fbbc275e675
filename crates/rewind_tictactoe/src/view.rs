//! Read-only view derived from a [`GameState`] for rendering.
//!
//! Hosts rebuild the view after every operation instead of reading the
//! state directly. Nothing here is stored; everything is recomputed.

use super::rules::{WinResult, detect_winner, is_full};
use super::state::GameState;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What the status line says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The active board has a completed line.
    #[display("Winner: {_0}!")]
    Winner(Player),
    /// The active board is full with no winner.
    #[display("Game ends in a draw :/")]
    Draw,
    /// The game continues.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status of the active board.
    pub fn of(state: &GameState) -> Self {
        let board = state.current().squares();
        if let Some(win) = detect_winner(board) {
            Status::Winner(win.player)
        } else if is_full(board) {
            Status::Draw
        } else {
            Status::NextPlayer(state.next_player())
        }
    }

    /// True once the game has a result.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// Button text, e.g. `Go to move #3 @(1,2)`.
    label: String,
    /// True for the active step.
    is_current: bool,
}

impl MoveEntry {
    fn new(state: &GameState, step: usize) -> Self {
        let label = match state.history()[step].location() {
            Some(location) if step > 0 => format!("Go to move #{step} @{location}"),
            _ => "Go to game start".to_string(),
        };
        Self {
            step,
            label,
            is_current: step == state.step_number(),
        }
    }
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Status line.
    status: Status,
    /// Board at the active step.
    board: Board,
    /// Cells to highlight when the active board is won.
    winning_line: Option<[usize; 3]>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Whether `moves` runs newest first.
    sort_descending: bool,
}

impl GameView {
    /// Returns true if the cell at `index` is part of the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }
}

impl From<&GameState> for GameView {
    #[instrument(skip(state), fields(step = state.step_number()))]
    fn from(state: &GameState) -> Self {
        let board = *state.current().squares();
        let winning_line = detect_winner(&board).map(|win: WinResult| win.line);

        // Display order is a traversal direction; the history itself is
        // never reordered.
        let steps = 0..state.history().len();
        let moves: Vec<MoveEntry> = if state.sort_descending() {
            steps.rev().map(|step| MoveEntry::new(state, step)).collect()
        } else {
            steps.map(|step| MoveEntry::new(state, step)).collect()
        };

        let status = Status::of(state);
        debug!(%status, moves = moves.len(), "View recomputed");

        Self {
            status,
            board,
            winning_line,
            moves,
            sort_descending: state.sort_descending(),
        }
    }
}
