//! Site assembly error types.

use folio_chat::ChatError;
use folio_config::PrefsError;
use folio_projects::StoreError;
use folio_typing::TypingError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Prefs(#[from] PrefsError),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error(transparent)]
    Typing(#[from] TypingError),

    /// Writing the rendered site failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
