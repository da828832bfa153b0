//! The pomodoro state machine.
//!
//! Drives transitions between idle, focusing, and break states from
//! user actions and a one-second tick.

use serde::{Deserialize, Serialize};

use crate::core::session::{Phase, Session};

/// Minimum focus duration in minutes.
pub const FOCUS_MIN_MINUTES: i64 = 5;
/// Maximum focus duration in minutes.
pub const FOCUS_MAX_MINUTES: i64 = 60;
/// Focus duration adjustment step in minutes.
pub const FOCUS_STEP_MINUTES: i64 = 5;

/// Minimum break duration in minutes.
pub const BREAK_MIN_MINUTES: i64 = 1;
/// Maximum break duration in minutes.
pub const BREAK_MAX_MINUTES: i64 = 15;
/// Break duration adjustment step in minutes.
pub const BREAK_STEP_MINUTES: i64 = 1;

/// Outcome of a one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tick {
    /// Paused or no session; nothing changed.
    Idle,
    /// The countdown advanced by one second.
    Counted,
    /// The countdown had expired and rolled into the next phase.
    Rolled(Phase),
}

/// The pomodoro timer state machine.
///
/// Holds the duration settings, the running flag, and the current
/// session (`None` when idle). An active session keeps the durations
/// it was started with; setting changes apply from the next session.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    focus_minutes: i64,
    break_minutes: i64,
    running: bool,
    session: Option<Session>,
}

impl Pomodoro {
    /// Create an idle timer with the given durations, clamped to bounds.
    #[must_use]
    pub fn new(focus_minutes: i64, break_minutes: i64) -> Self {
        Self {
            focus_minutes: focus_minutes.clamp(FOCUS_MIN_MINUTES, FOCUS_MAX_MINUTES),
            break_minutes: break_minutes.clamp(BREAK_MIN_MINUTES, BREAK_MAX_MINUTES),
            running: false,
            session: None,
        }
    }

    /// Current focus duration setting in minutes.
    #[must_use]
    pub const fn focus_minutes(&self) -> i64 {
        self.focus_minutes
    }

    /// Current break duration setting in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> i64 {
        self.break_minutes
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The current session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Check if there is no session at all.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// Toggle between playing and paused.
    ///
    /// Starting from idle begins a focusing session with the current
    /// focus duration.
    pub fn toggle(&mut self) {
        self.running = !self.running;
        if self.running && self.session.is_none() {
            self.session = Some(Session::new(Phase::Focusing, self.focus_minutes));
        }
    }

    /// Stop the current session and return to idle.
    ///
    /// Works from both running and paused states; a no-op when idle.
    pub fn stop(&mut self) {
        self.running = false;
        self.session = None;
    }

    /// Increase the focus duration by one step, up to the maximum.
    pub fn increase_focus(&mut self) {
        self.focus_minutes = (self.focus_minutes + FOCUS_STEP_MINUTES).min(FOCUS_MAX_MINUTES);
    }

    /// Decrease the focus duration by one step, down to the minimum.
    pub fn decrease_focus(&mut self) {
        self.focus_minutes = (self.focus_minutes - FOCUS_STEP_MINUTES).max(FOCUS_MIN_MINUTES);
    }

    /// Increase the break duration by one step, up to the maximum.
    pub fn increase_break(&mut self) {
        self.break_minutes = (self.break_minutes + BREAK_STEP_MINUTES).min(BREAK_MAX_MINUTES);
    }

    /// Decrease the break duration by one step, down to the minimum.
    pub fn decrease_break(&mut self) {
        self.break_minutes = (self.break_minutes - BREAK_STEP_MINUTES).max(BREAK_MIN_MINUTES);
    }

    /// Advance the machine by one second.
    ///
    /// Only has an effect while running. An expired countdown rolls
    /// into the next phase with a fresh session built from the current
    /// duration settings; otherwise the countdown loses one second.
    /// The expired state is visible for one tick before rolling over.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        let Some(session) = self.session.as_mut() else {
            return Tick::Idle;
        };

        if session.is_expired() {
            let phase = session.phase().next();
            let minutes = match phase {
                Phase::Focusing => self.focus_minutes,
                Phase::OnBreak => self.break_minutes,
            };
            self.session = Some(Session::new(phase, minutes));
            Tick::Rolled(phase)
        } else {
            session.count_down();
            Tick::Counted
        }
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(25, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_durations() {
        let timer = Pomodoro::new(90, 0);
        assert_eq!(timer.focus_minutes(), FOCUS_MAX_MINUTES);
        assert_eq!(timer.break_minutes(), BREAK_MIN_MINUTES);
    }

    #[test]
    fn test_starts_idle() {
        let timer = Pomodoro::default();
        assert!(timer.is_idle());
        assert!(!timer.is_running());
        assert!(timer.session().is_none());
    }

    #[test]
    fn test_toggle_from_idle_starts_focusing() {
        let mut timer = Pomodoro::default();
        timer.toggle();

        assert!(timer.is_running());
        let session = timer.session().unwrap();
        assert_eq!(session.phase(), Phase::Focusing);
        assert_eq!(session.total().num_minutes(), 25);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut timer = Pomodoro::default();
        timer.toggle();
        timer.tick();

        timer.toggle();
        assert!(!timer.is_running());
        assert!(timer.session().is_some());

        timer.toggle();
        assert!(timer.is_running());
        // Resuming keeps the existing session rather than starting over.
        let session = timer.session().unwrap();
        assert_eq!(session.remaining().num_seconds(), 25 * 60 - 1);
    }

    #[test]
    fn test_stop_clears_session() {
        let mut timer = Pomodoro::default();
        timer.toggle();
        timer.stop();

        assert!(timer.is_idle());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_stop_while_paused_clears_session() {
        let mut timer = Pomodoro::default();
        timer.toggle();
        timer.toggle();
        timer.stop();

        assert!(timer.is_idle());
    }

    #[test]
    fn test_tick_is_idle_when_paused() {
        let mut timer = Pomodoro::default();
        assert_eq!(timer.tick(), Tick::Idle);

        timer.toggle();
        timer.toggle();
        assert_eq!(timer.tick(), Tick::Idle);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut timer = Pomodoro::default();
        timer.toggle();

        assert_eq!(timer.tick(), Tick::Counted);
        assert_eq!(
            timer.session().unwrap().remaining().num_seconds(),
            25 * 60 - 1
        );
    }

    #[test]
    fn test_focus_rolls_into_break() {
        let mut timer = Pomodoro::new(5, 1);
        timer.toggle();

        // 300 ticks exhaust the countdown; the expired state holds for
        // one more tick before rolling over.
        for _ in 0..300 {
            assert_eq!(timer.tick(), Tick::Counted);
        }
        assert!(timer.session().unwrap().is_expired());

        assert_eq!(timer.tick(), Tick::Rolled(Phase::OnBreak));
        let session = timer.session().unwrap();
        assert_eq!(session.phase(), Phase::OnBreak);
        assert_eq!(session.total().num_minutes(), 1);
        assert!(timer.is_running());
    }

    #[test]
    fn test_break_rolls_back_into_focus() {
        let mut timer = Pomodoro::new(5, 1);
        timer.toggle();

        for _ in 0..301 {
            timer.tick();
        }
        assert_eq!(timer.session().unwrap().phase(), Phase::OnBreak);

        for _ in 0..60 {
            assert_eq!(timer.tick(), Tick::Counted);
        }
        assert_eq!(timer.tick(), Tick::Rolled(Phase::Focusing));
        assert_eq!(timer.session().unwrap().total().num_minutes(), 5);
    }

    #[test]
    fn test_focus_adjustment_bounds() {
        let mut timer = Pomodoro::default();

        for _ in 0..20 {
            timer.increase_focus();
        }
        assert_eq!(timer.focus_minutes(), FOCUS_MAX_MINUTES);

        for _ in 0..20 {
            timer.decrease_focus();
        }
        assert_eq!(timer.focus_minutes(), FOCUS_MIN_MINUTES);
    }

    #[test]
    fn test_break_adjustment_bounds() {
        let mut timer = Pomodoro::default();

        for _ in 0..20 {
            timer.increase_break();
        }
        assert_eq!(timer.break_minutes(), BREAK_MAX_MINUTES);

        for _ in 0..20 {
            timer.decrease_break();
        }
        assert_eq!(timer.break_minutes(), BREAK_MIN_MINUTES);
    }

    #[test]
    fn test_adjustment_keeps_active_session_snapshot() {
        let mut timer = Pomodoro::default();
        timer.toggle();
        timer.increase_focus();

        assert_eq!(timer.focus_minutes(), 30);
        assert_eq!(timer.session().unwrap().total().num_minutes(), 25);
    }

    #[test]
    fn test_rollover_uses_current_settings() {
        let mut timer = Pomodoro::new(5, 1);
        timer.toggle();
        timer.increase_break();

        for _ in 0..300 {
            timer.tick();
        }
        assert_eq!(timer.tick(), Tick::Rolled(Phase::OnBreak));
        assert_eq!(timer.session().unwrap().total().num_minutes(), 2);
    }

    #[test]
    fn test_next_session_starts_with_new_focus_duration() {
        let mut timer = Pomodoro::default();
        timer.toggle();
        timer.stop();

        timer.increase_focus();
        timer.toggle();
        assert_eq!(timer.session().unwrap().total().num_minutes(), 30);
    }
}
