//! Tracing setup
//!
//! Logs go to a file so they never draw over the full-screen UI.

use crate::{APP_NAME, LOG_FILE};
use std::{
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "savemate=info";

/// `$DATA_DIR/savemate/savemate.log`, if the platform has a data directory
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_NAME).join(LOG_FILE))
}

/// Filter from `RUST_LOG`, falling back to info for this crate
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber appending to `path`.
///
/// Never fails: without a usable log file the subscriber is installed
/// without a writer. Returns the warnings that could not be logged.
pub fn init(path: Option<&Path>) -> Vec<String> {
    let mut warnings = Vec::new();

    let file = match path {
        Some(path) => match open_log_file(path) {
            Ok(file) => Some((path, file)),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {}, logging disabled",
                    path.display(),
                    e
                ));
                None
            }
        },
        None => {
            warnings.push("Unable to determine data directory, logging disabled".to_string());
            None
        }
    };

    match file {
        Some((path, file)) => {
            let installed = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(env_filter())
                .try_init();
            match installed {
                Ok(()) => tracing::info!(path = %path.display(), "logging initialized"),
                Err(e) => warnings.push(format!("Failed to initialize logging: {}", e)),
            }
        }
        // No file: no logs rather than writing over the UI
        None => {
            if let Err(e) = tracing_subscriber::registry().with(env_filter()).try_init() {
                warnings.push(format!("Failed to initialize logging: {}", e));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_path() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("savemate/savemate.log"));
        }
    }

    #[test]
    fn test_unopenable_log_file_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let plain = temp_dir.path().join("plain");
        fs::write(&plain, "not a directory").unwrap();

        let warnings = init(Some(&plain.join("savemate.log")));
        assert!(!warnings.is_empty());
        assert!(warnings[0].starts_with("Failed to open log file"));
    }
}
