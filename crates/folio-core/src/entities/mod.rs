//! Entity structs for Folio domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! built-in site data can be exported and validated against its schema.

mod chat;
mod project;

pub use chat::ChatMessage;
pub use project::Project;
