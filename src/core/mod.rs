//! Core session state machine for pomo.
//!
//! Owns the current session, duration settings, and the running flag,
//! and computes the state after each tick and user action.

pub mod chime;
pub mod duration;
pub mod session;
pub mod timer;

pub use chime::{Chime, Silent, TerminalBell};
pub use duration::{format_duration, format_duration_mmss};
pub use session::{Phase, Session};
pub use timer::{Pomodoro, Tick};
