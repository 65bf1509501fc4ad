//! Terminal User Interface (TUI) module
//!
//! Provides an interactive single-page editor for the entry list

use std::io;
use std::time::Instant;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use app::App;
use constants::TICK_RATE;
use ui::ui;

use crate::config::AppConfig;
use crate::model::EntryListModel;
use crate::storage::DocumentFile;

/// Run the TUI application
pub fn run_tui(
    config: AppConfig,
    model: EntryListModel,
    document: DocumentFile,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, model, document);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

/// Main application loop
///
/// Polls with a short timeout so expired notices disappear without input.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stderr>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)?
        {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}

#[cfg(test)]
mod tests;
