//! pomo - A Pomodoro timer for your terminal
//!
//! This crate provides an interactive countdown timer that alternates
//! between focus and break sessions, with configurable durations.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{Phase, Pomodoro, Session, Tick};
pub use error::PomoError;
