//! Command implementations for pomo.

mod completions;
mod config;

pub use completions::completions;
pub use config::config;
