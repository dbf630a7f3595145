//! Session configuration.

use crate::error::{Result, SumError};

/// Log levels accepted by the command line.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Presentation options for the console session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the two banner lines before the first prompt.
    /// Default: true
    pub show_banner: bool,

    /// Print an empty line after every cycle that does not quit.
    /// Default: true
    pub blank_line_after_cycle: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            blank_line_after_cycle: true,
        }
    }
}

impl SessionConfig {
    /// No banner and no separators: only the interpreter's own messages.
    pub fn quiet() -> Self {
        Self {
            show_banner: false,
            blank_line_after_cycle: false,
        }
    }
}

/// Normalize and check a log level name.
pub fn validate_log_level(level: &str) -> Result<String> {
    let level = level.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(SumError::InvalidConfig(format!(
            "unknown log level '{level}' (expected one of {})",
            LOG_LEVELS.join(", ")
        )))
    }
}
