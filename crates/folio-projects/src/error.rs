//! Project store error types.

use folio_core::errors::CoreError;

/// Errors from loading project records.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The projects file could not be read.
    #[error("failed to read projects file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The projects file is not a JSON array of projects.
    #[error("failed to parse projects file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record parsed but is missing display-critical fields.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// Two records share an id.
    #[error("duplicate project id: {0}")]
    DuplicateId(String),
}
