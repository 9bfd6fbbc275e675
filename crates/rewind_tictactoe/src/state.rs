//! Game state and the reducer that evolves it.

use super::action::{Operation, Rejection};
use super::contracts::{LegalMove, StepRecorded};
use super::history::MoveRecord;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation, assert_invariants};
use super::rules::{WinResult, detect_winner};
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one game session.
///
/// A `GameState` is never modified in place. Every operation goes through
/// [`GameState::reduce`], which returns the next state and leaves the
/// previous one intact.
///
/// Deserialized states are checked against [`GameInvariants`] and rejected
/// if any of them fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) step_number: usize,
    pub(crate) x_is_next: bool,
    pub(crate) sort_descending: bool,
}

impl GameState {
    /// Creates a fresh game: one empty board, X to move, ascending move list.
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::opening()],
            step_number: 0,
            x_is_next: true,
            sort_descending: false,
        }
    }

    /// Plays `indices` as consecutive moves from a fresh game.
    ///
    /// Illegal entries are ignored exactly as they would be during play.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        indices
            .iter()
            .fold(Self::new(), |state, &index| state.reduce(Operation::Move(index)))
    }

    /// All recorded snapshots, opening board first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the active snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// True when the move list is shown newest first.
    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    /// The active snapshot.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.step_number]
    }

    /// The player who places the next mark.
    pub fn next_player(&self) -> Player {
        Player::from_turn(self.x_is_next)
    }

    /// The completed line on the active board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        detect_winner(self.current().squares())
    }

    /// Index of the newest recorded snapshot.
    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Applies an operation, returning the next state.
    ///
    /// Rejected operations are logged and yield an unchanged copy.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn reduce(&self, operation: Operation) -> Self {
        match self.try_apply(operation) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%operation, %rejection, "Operation ignored");
                self.clone()
            }
        }
    }

    /// Applies an operation, or explains why it would be ignored.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn try_apply(&self, operation: Operation) -> Result<Self, Rejection> {
        let next = match operation {
            Operation::Move(index) => self.play(index)?,
            Operation::Jump(step) => self.jump(step)?,
            Operation::Reset => Self::new(),
            Operation::ToggleSort => Self {
                sort_descending: !self.sort_descending,
                ..self.clone()
            },
        };

        assert_invariants(&next);
        Ok(next)
    }

    /// Jumps one step back, staying at the opening board.
    pub fn step_back(&self) -> Self {
        self.reduce(Operation::Jump(self.step_number.saturating_sub(1)))
    }

    /// Jumps one step forward, staying at the newest snapshot.
    pub fn step_forward(&self) -> Self {
        self.reduce(Operation::Jump((self.step_number + 1).min(self.last_step())))
    }

    fn play(&self, index: usize) -> Result<Self, Rejection> {
        let pos = LegalMove::check(index, self)?;
        let squares = self.current().squares().with_mark(pos, self.next_player());

        let mut history = self.history[..=self.step_number].to_vec();
        let step_number = history.len();
        history.push(MoveRecord::played(squares, pos));
        debug!(%pos, step_number, "Move recorded");

        Ok(Self {
            history,
            step_number,
            x_is_next: !self.x_is_next,
            sort_descending: self.sort_descending,
        })
    }

    fn jump(&self, step: usize) -> Result<Self, Rejection> {
        StepRecorded::check(step, self)?;
        Ok(Self {
            step_number: step,
            x_is_next: step % 2 == 0,
            ..self.clone()
        })
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<MoveRecord>,
    step_number: usize,
    x_is_next: bool,
    sort_descending: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step_number: raw.step_number,
            x_is_next: raw.x_is_next,
            sort_descending: raw.sort_descending,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            debug!(%descriptions, "Rejected deserialized state");
            InvariantViolation::new(descriptions)
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
