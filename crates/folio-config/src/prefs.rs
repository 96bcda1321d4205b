//! Persisted visitor preferences.
//!
//! A single JSON object on disk, keyed like browser local storage. Only the
//! theme flag is stored today. A missing file, missing key, or unreadable
//! value all read as the default theme.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_core::enums::Theme;

use crate::error::PrefsError;

/// Storage key of the theme flag.
pub const THEME_KEY: &str = "theme";

/// File-backed key-value store for visitor preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored theme, defaulting to [`Theme::Light`].
    pub fn theme(&self) -> Theme {
        self.get(THEME_KEY)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(error) => {
                    tracing::warn!(%error, path = %self.path.display(), "ignoring stored theme");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] if the file cannot be written.
    pub fn set_theme(&self, theme: Theme) -> Result<(), PrefsError> {
        self.set(THEME_KEY, theme.as_str())
    }

    /// Flip the stored theme and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] if the file cannot be written.
    pub fn toggle_theme(&self) -> Result<Theme, PrefsError> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.read_map().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let body = serde_json::to_string_pretty(&map)?;
        std::fs::write(&self.path, body).map_err(|source| self.io_error(source))
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(%error, path = %self.path.display(), "preference file is corrupt; starting fresh");
            BTreeMap::new()
        })
    }

    fn io_error(&self, source: std::io::Error) -> PrefsError {
        PrefsError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
