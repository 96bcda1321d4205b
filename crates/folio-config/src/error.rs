//! Configuration and preference-store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Errors from reading or writing the persisted preference file.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Filesystem error on the preference file or its parent directory.
    #[error("preference file I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The preference map could not be serialized.
    #[error("preference serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
