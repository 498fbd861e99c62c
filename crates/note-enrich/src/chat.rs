//! OpenAI-compatible chat-completions client (Groq by default).

use std::time::Duration;

use async_trait::async_trait;
use note_config::EnrichmentConfig;
use serde::{Deserialize, Serialize};

use crate::http::check_response;
use crate::prompts::{self, Prompt};
use crate::{Enricher, EnrichmentError};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, or [`EnrichmentError::EmptyResponse`].
    fn into_text(self) -> Result<String, EnrichmentError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(EnrichmentError::EmptyResponse)
    }
}

/// Enrichment provider backed by a chat-completions endpoint.
///
/// Every call is bounded by the configured timeout and attempted once.
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichmentError::Disabled`] when enrichment is switched off
    /// or has no key, and [`EnrichmentError::Http`] if the HTTP client cannot
    /// be built.
    pub fn from_config(config: &EnrichmentConfig) -> Result<Self, EnrichmentError> {
        if !config.is_configured() {
            return Err(EnrichmentError::Disabled);
        }

        let http = reqwest::Client::builder()
            .user_agent("neuralnote/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(EnrichmentError::Http)?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Send one prompt and return the raw completion text.
    async fn complete(&self, prompt: Prompt) -> Result<String, EnrichmentError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: prompt.max_tokens,
            temperature: prompt.temperature,
        };

        tracing::debug!(model = %self.model, max_tokens = prompt.max_tokens, "chat completion request");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let data: ChatResponse = resp.json().await?;
        data.into_text()
    }
}

#[async_trait]
impl Enricher for ChatClient {
    async fn classify_emotion(&self, text: &str) -> Result<String, EnrichmentError> {
        self.complete(prompts::emotion(text)).await
    }

    async fn summarize(&self, text: &str) -> Result<String, EnrichmentError> {
        self.complete(prompts::summary(text)).await
    }

    async fn generate_affirmation(
        &self,
        emotion_description: &str,
    ) -> Result<String, EnrichmentError> {
        self.complete(prompts::affirmation(emotion_description)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "llama-3.1-8b-instant",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": "grateful" },
                "finish_reason": "stop"
            }
        ],
        "usage": { "prompt_tokens": 40, "completion_tokens": 2, "total_tokens": 42 }
    }"#;

    fn configured() -> EnrichmentConfig {
        EnrichmentConfig {
            enabled: true,
            api_key: "gsk_test".into(),
            base_url: "https://api.example.com/openai/v1/".into(),
            ..Default::default()
        }
    }

    #[test]
    fn parse_chat_response() {
        let data: ChatResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.into_text().unwrap(), "grateful");
    }

    #[test]
    fn empty_choices_is_empty_response() {
        let data: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(data.into_text(), Err(EnrichmentError::EmptyResponse)));
    }

    #[test]
    fn null_or_blank_content_is_empty_response() {
        let data: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(matches!(data.into_text(), Err(EnrichmentError::EmptyResponse)));

        let data: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "  \n"}}]}"#).unwrap();
        assert!(matches!(data.into_text(), Err(EnrichmentError::EmptyResponse)));
    }

    #[test]
    fn request_serializes_openai_shape() {
        let body = ChatRequest {
            model: "m",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            max_tokens: 5,
            temperature: 0.5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 5);
    }

    #[test]
    fn from_config_requires_configuration() {
        let result = ChatClient::from_config(&EnrichmentConfig::default());
        assert!(matches!(result, Err(EnrichmentError::Disabled)));
    }

    #[test]
    fn from_config_normalizes_endpoint() {
        let client = ChatClient::from_config(&configured()).unwrap();
        assert_eq!(
            client.endpoint,
            "https://api.example.com/openai/v1/chat/completions"
        );
        assert_eq!(client.model, "llama-3.1-8b-instant");
    }

    #[tokio::test]
    async fn unreachable_endpoint_returns_error() {
        let config = EnrichmentConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 1,
            ..configured()
        };
        let client = ChatClient::from_config(&config).unwrap();
        let result = client.summarize("Today was long.").await;
        assert!(result.is_err());
    }
}
