//! Event handling for the timer UI.
//!
//! Maps key presses to user intents and supplies the one-second tick
//! cadence while the timer is running.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::PomoError;

/// User intent emitted by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start the timer, or pause/resume it.
    TogglePlay,
    /// Stop the session and return to idle.
    Stop,
    /// Increase the focus duration.
    IncreaseFocus,
    /// Decrease the focus duration.
    DecreaseFocus,
    /// Increase the break duration.
    IncreaseBreak,
    /// Decrease the break duration.
    DecreaseBreak,
    /// Show the key bindings.
    Help,
}

/// Handle terminal events.
///
/// Returns an intent to apply, or None if no intent was produced.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, PomoError> {
    // Poll for events with a small timeout so ticks stay responsive
    if event::poll(Duration::from_millis(100))
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            let action = match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

                KeyCode::Char(' ' | 'p') | KeyCode::Enter => Some(Action::TogglePlay),
                KeyCode::Char('s') => Some(Action::Stop),

                KeyCode::Right | KeyCode::Char(']') => Some(Action::IncreaseFocus),
                KeyCode::Left | KeyCode::Char('[') => Some(Action::DecreaseFocus),
                KeyCode::Up | KeyCode::Char('}') => Some(Action::IncreaseBreak),
                KeyCode::Down | KeyCode::Char('{') => Some(Action::DecreaseBreak),

                KeyCode::Char('?') => Some(Action::Help),

                _ => None,
            };
            return Ok(action);
        }
    }

    Ok(None)
}

/// Fires at a fixed cadence while the timer is running.
///
/// Advances by whole intervals so the cadence does not drift when a
/// poll arrives late.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    /// Create a ticker with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// Check whether an interval has elapsed since the last fire.
    pub fn poll(&mut self) -> bool {
        if self.last.elapsed() >= self.interval {
            self.last += self.interval;
            true
        } else {
            false
        }
    }

    /// Restart the cadence after a suspension, so a resumed timer
    /// waits a full interval before its first tick.
    pub fn rearm(&mut self) {
        self.last = Instant::now();
    }
}
