pub mod claude;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub provider: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub model: String,
}

/// Sampling temperature for grounded answers: pinned to zero so the same
/// document yields low-variance responses.
pub const GROUNDED_TEMPERATURE: f32 = 0.0;

/// Unified LLM provider enum dispatching to OpenAI-compatible or Claude backends.
#[derive(Debug, Clone)]
pub enum Provider {
    OpenAi(openai::OpenAiConfig),
    Claude(claude::ClaudeConfig),
    Ollama(openai::OpenAiConfig),
}

impl Provider {
    pub fn openai(api_key: String) -> Self {
        Provider::OpenAi(openai::OpenAiConfig {
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        })
    }

    pub fn claude(api_key: String) -> Self {
        Provider::Claude(claude::ClaudeConfig {
            api_key,
            base_url: "https://api.anthropic.com".to_string(),
        })
    }

    pub fn ollama(host: String) -> Self {
        Provider::Ollama(openai::OpenAiConfig {
            api_key: String::new(),
            base_url: format!("{}/v1", host),
        })
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        match self {
            Provider::OpenAi(config) | Provider::Ollama(config) => {
                openai::chat(config, request).await
            }
            Provider::Claude(config) => claude::chat(config, request).await,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Serialize for LlmError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Capability boundary over the text-generation backend: one prompt in, one
/// trimmed answer out.
///
/// No retry policy; a regenerated answer for the same prompt may differ, so
/// callers must not assume idempotence across retries.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Production [`GenerationClient`]: a provider plus the model it should run.
#[derive(Debug, Clone)]
pub struct ModelClient {
    pub provider: Provider,
    pub model: String,
}

#[async_trait]
impl GenerationClient for ModelClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            model: self.model.clone(),
            temperature: GROUNDED_TEMPERATURE,
        };
        tracing::debug!(model = %self.model, "dispatching generation request");
        let response = self.provider.chat(&request).await?;
        Ok(response.content.trim().to_string())
    }
}
