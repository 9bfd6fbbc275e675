//! Screen geometry shared by drawing and mouse hit-testing.

use super::app::Intent;
use ratatui::layout::{Constraint, Direction, Layout, Position as Point, Rect};
use rewind_tictactoe::{GameView, Operation};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;
const BUTTON_HEIGHT: u16 = 3;

/// Where every widget lands for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// The nine cells in row-major order.
    pub cells: [Rect; 9],
    /// "Reset Game" button.
    pub reset: Rect,
    /// "Sort Moves" button.
    pub sort: Rect,
    /// Bordered move list.
    pub moves: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the game screen.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(BOARD_HEIGHT + BUTTON_HEIGHT),
                Constraint::Length(3), // Status
                Constraint::Length(1), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BOARD_WIDTH + 2),
                Constraint::Min(20),
            ])
            .split(rows[1]);

        let board_pane = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BOARD_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Min(0),
            ])
            .split(body[0]);

        let info_pane = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(BUTTON_HEIGHT), Constraint::Min(3)])
            .split(body[1]);

        let grid = board_pane[0];
        let cells = std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as u16, (i % 3) as u16);
            Rect::new(
                grid.x + 1 + col * CELL_WIDTH,
                grid.y + row * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        Self {
            title: rows[0],
            cells,
            reset: Rect {
                x: board_pane[1].x + 1,
                width: BOARD_WIDTH,
                ..board_pane[1]
            }
            .intersection(board_pane[1]),
            sort: info_pane[0],
            moves: info_pane[1],
            status: rows[2],
            help: rows[3],
        }
    }

    /// Rows available for move entries inside the list border.
    pub fn move_rows(&self) -> Rect {
        self.moves.inner(ratatui::layout::Margin::new(1, 1))
    }

    /// First move entry shown, chosen so the current entry stays visible.
    pub fn scroll_offset(&self, view: &GameView) -> usize {
        let visible = usize::from(self.move_rows().height).max(1);
        let current = view
            .moves()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
        (current + 1).saturating_sub(visible)
    }

    /// Maps a left click at `(column, row)` to an intent.
    pub fn click(&self, column: u16, row: u16, view: &GameView) -> Option<Intent> {
        let point = Point::new(column, row);

        if let Some(index) = self.cells.iter().position(|cell| cell.contains(point)) {
            return Some(Intent::Apply(Operation::Move(index)));
        }
        if self.reset.contains(point) {
            return Some(Intent::Apply(Operation::Reset));
        }
        if self.sort.contains(point) {
            return Some(Intent::Apply(Operation::ToggleSort));
        }

        let list = self.move_rows();
        if list.contains(point) {
            let index = self.scroll_offset(view) + usize::from(row - list.y);
            let entry = view.moves().get(index)?;
            return Some(Intent::Apply(Operation::Jump(*entry.step())));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::GameState;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 60, 24))
    }

    #[test]
    fn test_cells_tile_the_grid() {
        let layout = layout();
        assert_eq!(layout.cells[0], Rect::new(1, 1, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(layout.cells[4].x, 1 + CELL_WIDTH);
        assert_eq!(layout.cells[4].y, 1 + CELL_HEIGHT);
        assert_eq!(layout.cells[8].y, 1 + 2 * CELL_HEIGHT);
    }

    #[test]
    fn test_click_cell() {
        let layout = layout();
        let view = GameView::from(&GameState::new());
        let cell = layout.cells[5];
        assert_eq!(
            layout.click(cell.x + 2, cell.y + 1, &view),
            Some(Intent::Apply(Operation::Move(5)))
        );
    }

    #[test]
    fn test_click_buttons() {
        let layout = layout();
        let view = GameView::from(&GameState::new());
        assert_eq!(
            layout.click(layout.reset.x + 3, layout.reset.y + 1, &view),
            Some(Intent::Apply(Operation::Reset))
        );
        assert_eq!(
            layout.click(layout.sort.x + 3, layout.sort.y + 1, &view),
            Some(Intent::Apply(Operation::ToggleSort))
        );
        assert_eq!(layout.click(layout.title.x, layout.title.y, &view), None);
    }

    #[test]
    fn test_click_move_entry_follows_display_order() {
        let layout = layout();
        let list = layout.move_rows();
        let state = GameState::replay(&[0, 4, 8]);

        let ascending = GameView::from(&state);
        assert_eq!(
            layout.click(list.x + 1, list.y + 1, &ascending),
            Some(Intent::Apply(Operation::Jump(1)))
        );

        let descending = GameView::from(&state.reduce(Operation::ToggleSort));
        assert_eq!(
            layout.click(list.x + 1, list.y + 1, &descending),
            Some(Intent::Apply(Operation::Jump(2)))
        );

        // Below the last entry.
        assert_eq!(layout.click(list.x + 1, list.y + 6, &ascending), None);
    }

    #[test]
    fn test_short_terminal_scrolls_to_current_entry() {
        // 18 rows leave 8 visible entries for a 10-entry history.
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 18));
        let list = layout.move_rows();
        assert_eq!(list.height, 8);

        let state = GameState::replay(&[4, 0, 8, 2, 1, 7, 3, 5, 6]);
        let view = GameView::from(&state);
        assert_eq!(layout.scroll_offset(&view), 2);
        assert_eq!(
            layout.click(list.x + 1, list.y, &view),
            Some(Intent::Apply(Operation::Jump(2)))
        );
        assert_eq!(
            layout.click(list.x + 1, list.y + 7, &view),
            Some(Intent::Apply(Operation::Jump(9)))
        );

        // Rewinding to the start scrolls back to the top.
        let rewound = GameView::from(&state.reduce(Operation::Jump(0)));
        assert_eq!(layout.scroll_offset(&rewound), 0);

        // Newest first puts the current entry on top already.
        let descending = GameView::from(&state.reduce(Operation::ToggleSort));
        assert_eq!(layout.scroll_offset(&descending), 0);
    }
}
