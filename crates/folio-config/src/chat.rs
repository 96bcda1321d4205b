//! Hosted text-generation fallback configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://api-inference.huggingface.co/models/microsoft/DialoGPT-medium")
}

const fn default_max_length() -> u32 {
    150
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_do_sample() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Inference endpoint receiving the POST.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token. Empty disables the fallback (every miss gets the apology).
    #[serde(default)]
    pub api_token: String,

    #[serde(default = "default_max_length")]
    pub max_length: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_do_sample")]
    pub do_sample: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_token: String::new(),
            max_length: default_max_length(),
            temperature: default_temperature(),
            do_sample: default_do_sample(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatConfig {
    /// Check if the fallback has an endpoint and a token.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.api_token.is_empty()
    }
}
