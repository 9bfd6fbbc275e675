//! Plain-text rendering of a [`GameView`].

use super::view::GameView;
use tracing::instrument;

/// Renders the board, status line and move list as plain text.
///
/// The current move is marked with `>`; winning cells are wrapped in
/// brackets on the line below the board.
#[instrument(skip(view))]
pub fn render_transcript(view: &GameView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");

    if let Some(line) = view.winning_line() {
        out.push_str(&format!("Winning cells: {line:?}\n"));
    }
    out.push_str(&view.status().to_string());
    out.push('\n');

    for entry in view.moves() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", entry.label()));
    }
    out
}
