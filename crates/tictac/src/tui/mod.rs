//! Terminal UI for tictac.

mod app;
mod input;
mod ui;

pub use app::{App, ComputerReply};
pub use input::{digit_tile, move_cursor};
pub use ui::{draw, piece_color, turn_color};

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tictac_core::SkinCatalog;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
///
/// Logging must already point somewhere other than the terminal.
#[instrument(skip_all)]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting tictac TUI");
    let mut app = App::new(&config, SkinCatalog::builtin())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

async fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel();

    loop {
        terminal.draw(|frame| draw(frame, app))?;

        app.tick(Instant::now());
        while let Ok(reply) = reply_rx.try_recv() {
            app.on_computer_reply(reply);
        }
        if app.needs_computer_move() {
            app.request_computer_move(reply_tx.clone());
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // crossterm reports releases too on some platforms
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key.code, Instant::now());
        }

        if app.should_quit() {
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
