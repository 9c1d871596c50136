//! Theme preference persistence
//!
//! The theme is the only state that outlives a session. It is read once at
//! startup into a [`ThemeContext`] that the UI root receives explicitly.

use super::AppConfig;
use crate::{Result, SaveMateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value storage holding the theme preference
pub trait ThemeStore {
    /// Read the stored theme, `None` when nothing was stored yet
    fn get_theme(&self) -> Result<Option<Theme>>;
    /// Store the theme
    fn set_theme(&mut self, theme: Theme) -> Result<()>;
}

/// Theme store backed by the `theme` key of the configuration file
#[derive(Debug, Clone)]
pub struct TomlThemeStore {
    path: PathBuf,
}

impl TomlThemeStore {
    /// Store writing to the standard configuration file
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: AppConfig::config_file_path()?,
        })
    }

    /// Store writing to a specific file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for TomlThemeStore {
    fn get_theme(&self) -> Result<Option<Theme>> {
        Ok(AppConfig::load_from(&self.path)?.theme)
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        // Keep the other settings in the file untouched
        let config = AppConfig::load_from(&self.path)?.with_theme(theme);
        config.save_to(&self.path).map_err(|e| {
            SaveMateError::Persistence(format!(
                "Failed to store theme in {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// In-memory theme store
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get_theme(&self) -> Result<Option<Theme>> {
        Ok(self.theme)
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}

/// Active theme plus the store it is persisted to
#[derive(Debug)]
pub struct ThemeContext<S: ThemeStore> {
    theme: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeContext<S> {
    /// Read the persisted theme; absent or unreadable values fall back to light
    pub fn init(store: S) -> Self {
        let theme = match store.get_theme() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "could not read stored theme, using default");
                Theme::default()
            }
        };
        debug!(%theme, "theme context initialized");
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Persist the theme, then apply it. On failure the active theme is kept.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set_theme(theme)?;
        self.theme = theme;
        info!(%theme, "theme changed");
        Ok(())
    }

    /// Switch between light and dark
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
