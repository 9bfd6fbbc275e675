//! Rewind tic-tac-toe - pure game logic with time-travel history.
//!
//! # Architecture
//!
//! - **State**: an immutable [`GameState`] evolved by a pure reducer
//! - **Rules**: win and draw detection over a 9-cell [`Board`]
//! - **Invariants**: properties checked after every accepted operation
//! - **View**: the derived [`GameView`] a host draws after each operation
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameView, Operation, Status, Player};
//!
//! let state = [0, 1, 3, 4, 6]
//!     .into_iter()
//!     .fold(GameState::new(), |state, i| state.reduce(Operation::Move(i)));
//!
//! let view = GameView::from(&state);
//! assert_eq!(*view.status(), Status::Winner(Player::X));
//! assert_eq!(*view.winning_line(), Some([0, 3, 6]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod transcript;
mod types;
mod view;

pub use action::{Operation, Rejection};
pub use contracts::{GameNotOver, InBounds, LegalMove, SquareIsEmpty, StepRecorded};
pub use history::MoveRecord;
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::{Location, Position};
pub use rules::{WinResult, detect_winner, is_draw, is_full};
pub use state::GameState;
pub use transcript::render_transcript;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, Status};
