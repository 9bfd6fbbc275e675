//! Terminal UI for rewind tic-tac-toe.

mod app;
mod input;
mod layout;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use rewind_tictactoe::GameState;
use std::io;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

use crate::config::{Theme, TuiConfig};

pub use app::{App, Intent};
pub use input::{key_intent, move_cursor, next_open_cell};
pub use layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
pub use ui::draw;

/// Run the interactive game until the user quits.
pub async fn run_tui(config: TuiConfig, initial: GameState) -> Result<()> {
    init_file_tracing(&config)?;
    let theme = config.theme()?;

    info!(
        step = initial.step_number(),
        "Starting Rewind Tic-Tac-Toe TUI"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let poll = Duration::from_millis(*config.poll_interval_ms());
    let res = run_app(&mut terminal, App::new(initial), &theme, poll).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, wait for one event, apply it, repeat.
#[instrument(skip_all)]
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    theme: &Theme,
    poll: Duration,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut layout = None;
        terminal.draw(|f| layout = Some(draw(f, &app, theme)))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(poll)? {
            let intent = match event::read()? {
                // Skip key release events (crossterm fires both press and release).
                Event::Key(key) if key.kind != KeyEventKind::Release => key_intent(key, &app),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    layout.and_then(|l| l.click(mouse.column, mouse.row, app.view()))
                }
                _ => None,
            };

            if let Some(intent) = intent {
                debug!(?intent, "Handling intent");
                app.handle(intent);
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}

/// Logs go to a file so they never interfere with the TUI.
fn init_file_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
