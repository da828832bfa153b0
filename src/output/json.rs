//! JSON output formatting for pomo.

use serde::Serialize;

use crate::error::PomoError;

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_config_to_json() {
        let config = Config::default();
        let json = to_json(&config).unwrap();

        assert!(json.contains("\"focus_minutes\": 25"));
        assert!(json.contains("\"break_minutes\": 5"));
    }
}
