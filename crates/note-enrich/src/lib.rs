//! # note-enrich
//!
//! Optional text-model enrichment for NeuralNote reflections.
//!
//! The [`Enricher`] trait is the capability seam: each reflection component
//! asks it once, and any [`EnrichmentError`] means "use the local strategy".
//! [`ChatClient`] implements it against an OpenAI-compatible chat-completions
//! endpoint (Groq by default).
//!
//! Enrichment never changes whether a reflection succeeds, only how its
//! fields were produced.

mod chat;
mod error;
mod http;
pub mod prompts;

pub use chat::ChatClient;
pub use error::EnrichmentError;

use async_trait::async_trait;
use note_config::EnrichmentConfig;
use note_core::responses::{ProviderInfo, ProviderModels};

/// An external text model that can enrich reflection fields.
///
/// Implementations must bound every call in time. They return raw model
/// text; validation and cleanup belong to the caller.
#[async_trait]
pub trait Enricher: Send + Sync {
    /// A single free-form emotion word for `text`.
    async fn classify_emotion(&self, text: &str) -> Result<String, EnrichmentError>;

    /// An objective summary of `text`.
    async fn summarize(&self, text: &str) -> Result<String, EnrichmentError>;

    /// A one-sentence affirmation for someone described by `emotion_description`.
    async fn generate_affirmation(&self, emotion_description: &str)
    -> Result<String, EnrichmentError>;
}

/// Describe the active provider without exposing the key.
#[must_use]
pub fn provider_info(config: &EnrichmentConfig) -> ProviderInfo {
    if config.is_configured() {
        ProviderInfo {
            provider: display_name(&config.provider),
            has_api_key: true,
            api_key_preview: config.api_key_preview(),
            models: ProviderModels {
                summarization: config.model.clone(),
                affirmation: config.model.clone(),
            },
        }
    } else {
        ProviderInfo {
            provider: String::from("Local (Mock)"),
            has_api_key: !config.api_key.is_empty(),
            api_key_preview: config.api_key_preview(),
            models: ProviderModels {
                summarization: String::from("Local fallback"),
                affirmation: String::from("Local fallback"),
            },
        }
    }
}

fn display_name(provider: &str) -> String {
    match provider {
        "groq" => String::from("Groq"),
        "openai" => String::from("OpenAI"),
        other => other.to_string(),
    }
}
