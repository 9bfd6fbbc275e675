//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{GameView, Player, Position, Square};

use super::app::App;
use super::layout::ScreenLayout;
use crate::config::Theme;

const HELP: &str = "click or arrows+Enter: play | Tab: next open | 1-9: cell | [ ]: step | \
                    Home/End | r: reset | s: sort | q: quit";

/// Renders the whole screen and returns the layout used.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());
    let view = app.view();

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    for pos in Position::ALL {
        draw_cell(frame, layout.cells[pos.to_index()], view, pos, app.cursor(), theme);
    }

    draw_button(frame, layout.reset, "Reset Game");
    draw_button(frame, layout.sort, "Sort Moves");
    draw_moves(frame, layout.moves, view, layout.scroll_offset(view));

    let status_color = if view.status().is_terminal() {
        Color::Green
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    pos: Position,
    cursor: Position,
    theme: &Theme,
) {
    let mark = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let (symbol, style) = match view.board().get(pos) {
        Square::Empty => (" ", Style::default()),
        Square::Occupied(Player::X) => ("X", mark(theme.x)),
        Square::Occupied(Player::O) => ("O", mark(theme.o)),
    };
    let background = if view.is_highlighted(pos.to_index()) {
        Style::default().bg(theme.highlight)
    } else {
        Style::default()
    };
    let border = if pos == cursor {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .style(background)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(cell, area);
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, offset: usize) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let title = if *view.sort_descending() {
        "Moves (newest first)"
    } else {
        "Moves (oldest first)"
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL));
    let mut state = ListState::default().with_offset(offset);
    frame.render_stateful_widget(list, area, &mut state);
}
