//! Configuration command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::core::timer::{
    BREAK_MAX_MINUTES, BREAK_MIN_MINUTES, FOCUS_MAX_MINUTES, FOCUS_MIN_MINUTES,
};
use crate::error::PomoError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or
/// if a value is out of bounds.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load()?;
            format_config(&config, format)
        }

        ConfigCommands::Set {
            focus,
            break_minutes,
            sound,
        } => set_values(focus, break_minutes, sound, format),

        ConfigCommands::Path => {
            let paths = Paths::new()?;
            Ok(paths.config_file.display().to_string())
        }
    }
}

/// Apply the given values and save.
fn set_values(
    focus: Option<u32>,
    break_minutes: Option<u32>,
    sound: Option<bool>,
    format: OutputFormat,
) -> Result<String, PomoError> {
    if focus.is_none() && break_minutes.is_none() && sound.is_none() {
        return Err(PomoError::Config(
            "Nothing to set. Pass --focus, --break, or --sound.".to_string(),
        ));
    }

    let mut config = Config::load()?;

    if let Some(minutes) = focus {
        validate_minutes("Focus", minutes, FOCUS_MIN_MINUTES, FOCUS_MAX_MINUTES)?;
        config.timer.focus_minutes = minutes;
    }

    if let Some(minutes) = break_minutes {
        validate_minutes("Break", minutes, BREAK_MIN_MINUTES, BREAK_MAX_MINUTES)?;
        config.timer.break_minutes = minutes;
    }

    if let Some(enabled) = sound {
        config.timer.sound = enabled;
    }

    config.save()?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => Ok(format!(
            "{} Configuration updated\n{}",
            "✓".green(),
            format_config(&config, OutputFormat::Pretty)?
        )),
    }
}

fn validate_minutes(name: &str, minutes: u32, min: i64, max: i64) -> Result<(), PomoError> {
    let value = i64::from(minutes);
    if value < min || value > max {
        return Err(PomoError::Config(format!(
            "{name} duration must be between {min} and {max} minutes (got {minutes})"
        )));
    }
    Ok(())
}
