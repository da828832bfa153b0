use chrono::Duration;
use colored::Colorize;

use crate::config::{ColorSetting, Config};
use crate::core::duration::format_duration;

/// Format configuration as pretty output
#[must_use]
pub fn format_config_pretty(config: &Config) -> String {
    let mut output = format!("{}\n", "Configuration".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {}\n",
        "Focus duration".dimmed(),
        format_duration(Duration::minutes(i64::from(config.timer.focus_minutes)))
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Break duration".dimmed(),
        format_duration(Duration::minutes(i64::from(config.timer.break_minutes)))
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Sound".dimmed(),
        if config.timer.sound { "on" } else { "off" }
    ));

    let color = match config.general.color {
        ColorSetting::Auto => "auto",
        ColorSetting::Always => "always",
        ColorSetting::Never => "never",
    };
    output.push_str(&format!("  {}: {color}\n", "Color".dimmed()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_config_pretty() {
        let config = Config::default();
        let output = format_config_pretty(&config);

        assert!(output.contains("Focus duration"));
        assert!(output.contains("25 minutes"));
        assert!(output.contains("5 minutes"));
        assert!(output.contains("on"));
    }
}
