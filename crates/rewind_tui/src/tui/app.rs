//! Application state and logic.

use rewind_tictactoe::{GameState, GameView, Operation, Position};
use tracing::{debug, info, instrument};

/// What a key press or click asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Run a game operation.
    Apply(Operation),
    /// Jump one step back in history.
    StepBack,
    /// Jump one step forward in history.
    StepForward,
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Leave the app.
    Quit,
}

/// Main application state.
///
/// Holds the game and the view derived from it. The view is rebuilt after
/// every operation, and drawing only ever reads the view.
#[derive(Debug)]
pub struct App {
    state: GameState,
    view: GameView,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application around an existing game.
    pub fn new(state: GameState) -> Self {
        let view = GameView::from(&state);
        Self {
            state,
            view,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the view of the current game.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs an operation and recomputes the view.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, operation: Operation) {
        self.replace_state(self.state.reduce(operation));
    }

    /// Handles an intent from the input layer.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Apply(operation) => self.dispatch(operation),
            Intent::StepBack => self.replace_state(self.state.step_back()),
            Intent::StepForward => self.replace_state(self.state.step_forward()),
            Intent::Cursor(position) => self.cursor = position,
            Intent::PlayCursor => self.dispatch(Operation::Move(self.cursor.to_index())),
            Intent::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn replace_state(&mut self, next: GameState) {
        if next == self.state {
            return;
        }
        self.state = next;
        self.view = GameView::from(&self.state);
        debug!(
            step = self.state.step_number(),
            status = %self.view.status(),
            "State changed"
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}
