//! Application state for the timer UI.

use std::time::Duration;

use crate::config::Config;
use crate::core::duration::format_duration;
use crate::core::{Chime, Phase, Pomodoro, Tick};
use crate::tui::event::{Action, Ticker};

const HELP: &str =
    "space:start/pause | s:stop | Left/Right:focus | Up/Down:break | q:quit";

/// Application state.
pub struct App {
    /// The timer state machine.
    pub timer: Pomodoro,
    /// Status message to display.
    pub status: Option<String>,
    chime: Box<dyn Chime>,
    ticker: Ticker,
}

impl App {
    /// Create a new app instance seeded from configuration.
    #[must_use]
    pub fn new(config: &Config, chime: Box<dyn Chime>) -> Self {
        Self {
            timer: Pomodoro::new(
                i64::from(config.timer.focus_minutes),
                i64::from(config.timer.break_minutes),
            ),
            status: Some("Press space to start, ? for help".to_string()),
            chime,
            ticker: Ticker::new(Duration::from_secs(1)),
        }
    }

    /// Apply a user intent.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::TogglePlay => self.toggle(),
            Action::Stop => self.stop(),
            Action::IncreaseFocus => {
                self.timer.increase_focus();
                self.report_focus();
            }
            Action::DecreaseFocus => {
                self.timer.decrease_focus();
                self.report_focus();
            }
            Action::IncreaseBreak => {
                self.timer.increase_break();
                self.report_break();
            }
            Action::DecreaseBreak => {
                self.timer.decrease_break();
                self.report_break();
            }
            Action::Help => self.status = Some(HELP.to_string()),
            Action::Quit => {}
        }
    }

    /// Advance the countdown if a tick interval has elapsed.
    ///
    /// While paused or idle the ticker is re-armed instead, so resuming
    /// waits a full second before the first tick.
    pub fn poll_tick(&mut self) {
        if !self.timer.is_running() {
            self.ticker.rearm();
            return;
        }

        if self.ticker.poll() {
            self.on_tick();
        }
    }

    fn toggle(&mut self) {
        self.timer.toggle();

        self.status = if self.timer.is_running() {
            self.timer
                .session()
                .map(|s| format!("{}. Press space to pause", s.phase()))
        } else {
            Some("Paused. Press space to resume".to_string())
        };
    }

    fn stop(&mut self) {
        if self.timer.is_idle() {
            self.status = Some("No session to stop".to_string());
            return;
        }

        self.timer.stop();
        self.status = Some("Session stopped".to_string());
    }

    fn on_tick(&mut self) {
        if let Tick::Rolled(phase) = self.timer.tick() {
            self.chime.ring();
            self.status = Some(match phase {
                Phase::OnBreak => "Time for a break!".to_string(),
                Phase::Focusing => "Break over, back to focus!".to_string(),
            });
        }
    }

    fn report_focus(&mut self) {
        self.status = Some(format!(
            "Focus duration: {}",
            format_duration(chrono::Duration::minutes(self.timer.focus_minutes()))
        ));
    }

    fn report_break(&mut self) {
        self.status = Some(format!(
            "Break duration: {}",
            format_duration(chrono::Duration::minutes(self.timer.break_minutes()))
        ));
    }
}
