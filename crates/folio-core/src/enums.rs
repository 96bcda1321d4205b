//! Category, filter, role and theme enums for Folio.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the stable string form used in markup and storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Kind of work a project represents. Stored on the project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Web,
    Mobile,
    Desktop,
    Api,
    Other,
}

impl Category {
    /// Every category, in the order the filter buttons are laid out.
    pub const ALL: [Self; 5] = [
        Self::Web,
        Self::Mobile,
        Self::Desktop,
        Self::Api,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Api => "api",
            Self::Other => "other",
        }
    }

    /// Human-readable label shown on project cards.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Web => "Web App",
            Self::Mobile => "Mobile App",
            Self::Desktop => "Desktop App",
            Self::Api => "API/Backend",
            Self::Other => "Other",
        }
    }

    /// Label used on the filter button for this category.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Web => "Web Apps",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
            Self::Api => "API",
            Self::Other => "Other",
        }
    }

    /// Font Awesome icon class for this category.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Web => "fas fa-globe",
            Self::Mobile => "fas fa-mobile-alt",
            Self::Desktop => "fas fa-desktop",
            Self::Api => "fas fa-server",
            Self::Other => "fas fa-cogs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// CategoryFilter
// ---------------------------------------------------------------------------

/// Category selector of the project filter.
///
/// Parsing never fails: `"all"` and unrecognized values both select
/// [`CategoryFilter::All`]. Serializes as the plain selector string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Lenient parse used for user-supplied selector values.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse::<Category>().map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    #[must_use]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

// ---------------------------------------------------------------------------
// ChatRole
// ---------------------------------------------------------------------------

/// Author of a chat transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

impl ChatRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }

    /// CSS class of the transcript bubble for this role.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Assistant => "ai-message",
            Self::Error => "error-message",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Color theme preference. Absent preference means [`Theme::Light`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown on the toggle button: the theme you would switch to.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(CoreError::UnknownVariant {
                kind: "theme",
                value: other.to_string(),
            }),
        }
    }
}
