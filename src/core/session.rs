//! Session types for the pomodoro countdown.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Phase of a pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Working through a focus block.
    Focusing,
    /// Resting between focus blocks.
    OnBreak,
}

impl Phase {
    /// Get the phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focusing => Self::OnBreak,
            Self::OnBreak => Self::Focusing,
        }
    }

    /// Get display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Focusing => "Focusing",
            Self::OnBreak => "On Break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One phase's countdown.
///
/// Remaining time only moves through [`count_down`](Self::count_down),
/// one second at a time, so it never drops below zero or exceeds the
/// total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Which phase this countdown belongs to.
    phase: Phase,
    /// Total duration in seconds.
    total_seconds: i64,
    /// Remaining seconds.
    remaining_seconds: i64,
}

impl Session {
    /// Create a full countdown for a phase.
    #[must_use]
    pub const fn new(phase: Phase, minutes: i64) -> Self {
        let seconds = minutes * 60;
        Self {
            phase,
            total_seconds: seconds,
            remaining_seconds: seconds,
        }
    }

    /// The phase this session counts down.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Total duration.
    #[must_use]
    pub const fn total(&self) -> Duration {
        Duration::seconds(self.total_seconds)
    }

    /// Remaining time.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        Duration::seconds(self.remaining_seconds)
    }

    /// Elapsed time.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        Duration::seconds(self.total_seconds - self.remaining_seconds)
    }

    /// Advance the countdown by one second.
    pub fn count_down(&mut self) {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
    }

    /// Check whether the countdown has reached zero.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Get progress as a fraction (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        let elapsed = (self.total_seconds - self.remaining_seconds) as f64;
        elapsed / self.total_seconds as f64
    }
}
