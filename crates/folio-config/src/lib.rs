//! # folio-config
//!
//! Layered configuration loading for Folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 2. Project-level `.folio/config.toml`
//! 3. User-level `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_CHAT__API_TOKEN` -> `chat.api_token`, `FOLIO_OWNER__EMAIL` -> `owner.email`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//!
//! let config = FolioConfig::load_with_dotenv().expect("config");
//!
//! if config.chat.is_configured() {
//!     println!("chat fallback: {}", config.chat.endpoint);
//! }
//! ```

mod chat;
mod error;
mod owner;
mod prefs;
mod site;
mod typing;

pub use chat::ChatConfig;
pub use error::{ConfigError, PrefsError};
pub use owner::{OwnerConfig, SkillsConfig};
pub use prefs::{PreferenceStore, THEME_KEY};
pub use site::SiteConfig;
pub use typing::TypingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub owner: OwnerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

impl FolioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".folio/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("FOLIO_").split("__"));

        figment
    }

    /// Reject values that would stall the animations or the chat request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing.texts.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "typing.texts".into(),
                reason: "at least one string is required".into(),
            });
        }
        if self.typing.type_speed_ms == 0 || self.typing.delete_speed_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "typing.type_speed_ms/delete_speed_ms".into(),
                reason: "tick intervals must be positive".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.chat.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "chat.temperature".into(),
                reason: format!("{} is outside 0.0..=2.0", self.chat.temperature),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }

    /// Load `.env` from the current directory or the nearest ancestor.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FolioConfig::default();
        assert!(!config.chat.is_configured());
        assert!(config.validate().is_ok());
        assert_eq!(config.site.search_debounce_ms, 300);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = FolioConfig::figment();
        let config: FolioConfig = figment.extract().expect("should extract defaults");
        assert!(!config.typing.texts.is_empty());
        assert_eq!(config.chat.max_length, 150);
    }

    #[test]
    fn empty_texts_are_rejected() {
        let mut config = FolioConfig::default();
        config.typing.texts.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let mut config = FolioConfig::default();
        config.chat.temperature = 3.5;
        assert!(config.validate().is_err());
    }
}
