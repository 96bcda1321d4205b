//! Site generation and page behavior configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_title() -> String {
    String::from("Portfolio")
}

fn default_output_dir() -> String {
    String::from("dist")
}

const fn default_search_debounce_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Document `<title>`.
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory `folio build` writes `index.html` into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Optional JSON file replacing the built-in project list.
    #[serde(default)]
    pub projects_file: String,

    /// Delay before a search keystroke re-runs the filter.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Preference file override. Empty uses the platform data directory.
    #[serde(default)]
    pub prefs_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output_dir: default_output_dir(),
            projects_file: String::new(),
            search_debounce_ms: default_search_debounce_ms(),
            prefs_path: String::new(),
        }
    }
}

impl SiteConfig {
    pub fn projects_file(&self) -> Option<PathBuf> {
        (!self.projects_file.is_empty()).then(|| PathBuf::from(&self.projects_file))
    }

    /// Resolve the preference file path.
    ///
    /// Falls back to `<data_dir>/folio/prefs.json`, or `.folio/prefs.json`
    /// when the platform has no data directory.
    pub fn prefs_path(&self) -> PathBuf {
        if !self.prefs_path.is_empty() {
            return PathBuf::from(&self.prefs_path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".folio").join("prefs.json"),
            |dir| dir.join("folio").join("prefs.json"),
        )
    }
}
