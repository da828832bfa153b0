//! Terminal user interface for pomo.
//!
//! Full-screen timer built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::core::{Chime, Silent, TerminalBell};
use crate::error::PomoError;

/// Run the timer UI.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or draw.
pub fn run(config: &Config) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))?;

    let chime: Box<dyn Chime> = if config.timer.sound {
        Box::new(TerminalBell)
    } else {
        Box::new(Silent)
    };

    // Create app state and run main loop
    let mut app = App::new(config, chime);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle user intents
        if let Some(action) = event::handle_events()? {
            match action {
                event::Action::Quit => break,
                other => app.apply(other),
            }
        }

        // Advance the countdown while running
        app.poll_tick();
    }

    Ok(())
}
