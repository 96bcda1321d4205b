use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::errors::CoreError;

/// A portfolio work entry.
///
/// Immutable once defined: the store hands out clones for display and
/// filtering, never mutable access.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image path or URL; empty renders the gradient placeholder.
    #[serde(default)]
    pub image: String,
    /// Live demo URL; empty or `#` hides the link.
    #[serde(default)]
    pub demo_link: String,
    /// Source repository URL; empty or `#` hides the link.
    #[serde(default)]
    pub code_link: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Lowercased haystack for substring search: title, description, then
    /// each technology tag, separated by single spaces.
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.description.len() + self.technologies.len() * 12,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.description);
        text.push(' ');
        text.push_str(&self.technologies.join(" "));
        text.to_lowercase()
    }

    /// Whether `link` should be rendered at all.
    #[must_use]
    pub fn has_link(link: &str) -> bool {
        !link.is_empty() && link != "#"
    }

    /// Technology tags with blank entries dropped.
    pub fn tech_badges(&self) -> impl Iterator<Item = &str> {
        self.technologies
            .iter()
            .map(String::as_str)
            .filter(|tech| !tech.trim().is_empty())
    }

    /// Check the fields every rendered card depends on.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the id or title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "project '{}' has an empty id",
                self.title
            )));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "project {} has an empty title",
                self.id
            )));
        }
        Ok(())
    }
}
