//! Hero typing animation configuration.

use serde::{Deserialize, Serialize};

fn default_texts() -> Vec<String> {
    [
        "Full Stack Developer",
        "Web Developer",
        "UI/UX Designer",
        "Problem Solver",
        "Creative Thinker",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

const fn default_type_speed_ms() -> u64 {
    100
}

const fn default_delete_speed_ms() -> u64 {
    50
}

const fn default_pause_ms() -> u64 {
    2000
}

const fn default_pause_after_delete_ms() -> u64 {
    500
}

const fn default_true() -> bool {
    true
}

fn default_cursor() -> String {
    String::from("|")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypingConfig {
    /// Strings cycled through by the hero animation.
    #[serde(default = "default_texts")]
    pub texts: Vec<String>,

    #[serde(default = "default_type_speed_ms")]
    pub type_speed_ms: u64,

    #[serde(default = "default_delete_speed_ms")]
    pub delete_speed_ms: u64,

    /// Hold time after a string is fully typed.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    /// Hold time after a string is fully deleted.
    #[serde(default = "default_pause_after_delete_ms")]
    pub pause_after_delete_ms: u64,

    #[serde(default = "default_true", rename = "loop")]
    pub looping: bool,

    #[serde(default = "default_true")]
    pub scramble: bool,

    /// Cursor glyph appended to the display. Empty hides the cursor.
    #[serde(default = "default_cursor")]
    pub cursor: String,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            texts: default_texts(),
            type_speed_ms: default_type_speed_ms(),
            delete_speed_ms: default_delete_speed_ms(),
            pause_ms: default_pause_ms(),
            pause_after_delete_ms: default_pause_after_delete_ms(),
            looping: true,
            scramble: true,
            cursor: default_cursor(),
        }
    }
}
