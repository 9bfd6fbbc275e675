//! Keyboard handling: cursor movement and key bindings.

use super::app::{App, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_tictactoe::{Board, Operation, Position};

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Finds the next empty cell after `cursor` in row-major order, wrapping
/// around. Stays put on a full board.
pub fn next_open_cell(cursor: Position, board: &Board) -> Position {
    let open = Position::valid_moves(board);
    open.iter()
        .copied()
        .find(|pos| pos.to_index() > cursor.to_index())
        .or_else(|| open.first().copied())
        .unwrap_or(cursor)
}

/// Maps a key press to an intent.
pub fn key_intent(key: KeyEvent, app: &App) -> Option<Intent> {
    let intent = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Intent::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Intent::Cursor(move_cursor(app.cursor(), key.code))
        }
        KeyCode::Tab => Intent::Cursor(next_open_cell(app.cursor(), app.view().board())),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Intent::Apply(Operation::Move(index))
        }
        KeyCode::Char('[') | KeyCode::PageUp => Intent::StepBack,
        KeyCode::Char(']') | KeyCode::PageDown => Intent::StepForward,
        KeyCode::Home => Intent::Apply(Operation::Jump(0)),
        KeyCode::End => Intent::Apply(Operation::Jump(app.state().last_step())),
        KeyCode::Char('r') => Intent::Apply(Operation::Reset),
        KeyCode::Char('s') => Intent::Apply(Operation::ToggleSort),
        _ => return None,
    };
    Some(intent)
}
