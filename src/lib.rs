//! SaveMate - savings goal planner
//!
//! A terminal application that walks the user through picking a savings
//! goal, setting its target and tracking deposits against it.

// Public re-exports
pub mod app;
pub mod config;
pub mod goal;
pub mod logging;
pub mod simple;
pub mod util;

pub use goal::ValidationError;

// Common error types
#[derive(Debug, thiserror::Error)]
pub enum SaveMateError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
    /// Theme preference could not be stored
    #[error("Persistence error: {0}")]
    Persistence(String),
    /// User input rejected by the goal wizard
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<toml::de::Error> for SaveMateError {
    fn from(err: toml::de::Error) -> Self {
        SaveMateError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for SaveMateError {
    fn from(err: toml::ser::Error) -> Self {
        SaveMateError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for SaveMate operations
pub type Result<T> = std::result::Result<T, SaveMateError>;

/// Error presentation helpers
pub mod error {
    use super::SaveMateError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &SaveMateError) -> String {
        match error {
            SaveMateError::Validation(err) => format!("{}: {}", err.title(), err),
            SaveMateError::Config(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            SaveMateError::Persistence(_) => {
                "Failed to save your preference. Check disk space and permissions.".to_string()
            }
            SaveMateError::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check file permissions of the config directory.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "savemate";
pub const CONFIG_FILE: &str = "savemate.toml";
pub const LOG_FILE: &str = "savemate.log";
