//! External text-model enrichment configuration.

use serde::{Deserialize, Serialize};

/// Default provider identifier.
fn default_provider() -> String {
    String::from("groq")
}

/// Default OpenAI-compatible API base URL (Groq).
fn default_base_url() -> String {
    String::from("https://api.groq.com/openai/v1")
}

/// Default chat model.
fn default_model() -> String {
    String::from("llama-3.1-8b-instant")
}

/// Default per-request timeout.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnrichmentConfig {
    /// Master switch. When false, every component uses its local strategy.
    #[serde(default)]
    pub enabled: bool,

    /// Provider identifier shown in diagnostics (e.g., "groq").
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Bearer token for the chat-completions endpoint.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of an OpenAI-compatible API, without the trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for emotion, summary and affirmation prompts.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound for a single enrichment call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_provider(),
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EnrichmentConfig {
    /// Enrichment is usable only when switched on and a key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }

    /// First 10 characters of the key followed by `...`, or `Not set`.
    #[must_use]
    pub fn api_key_preview(&self) -> String {
        if self.api_key.is_empty() {
            return String::from("Not set");
        }
        let prefix: String = self.api_key.chars().take(10).collect();
        format!("{prefix}...")
    }
}
