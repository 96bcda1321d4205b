//! CLI response types returned by `folio` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `folio projects`, `folio chat`, `folio theme` and `folio build`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Project;
use crate::enums::{ChatRole, Theme};

/// Flattened project row for list output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub technologies: String,
    pub created: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.trim().to_string(),
            category: project.category.as_str().to_string(),
            technologies: project.tech_badges().collect::<Vec<_>>().join(", "),
            created: project.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Response from `folio projects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub category: String,
    pub search_term: String,
    pub count_text: String,
    pub search_info: Option<String>,
    pub empty_message: Option<String>,
    pub projects: Vec<ProjectRow>,
}

/// Where a chat reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Keyword rule matched.
    Canned,
    /// Hosted model produced a continuation.
    Generated,
    /// Hosted call failed; fixed apology returned.
    Apology,
}

/// Response from `folio chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatReplyResponse {
    pub question: String,
    pub role: ChatRole,
    pub source: ReplySource,
    pub reply: String,
}

/// Response from `folio theme`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub changed: bool,
}

/// Response from `folio contact`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactResponse {
    pub accepted: bool,
    pub message: String,
}

/// Response from `folio build`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BuildResponse {
    pub path: String,
    pub projects: usize,
    pub bytes: usize,
    pub theme: Theme,
}
