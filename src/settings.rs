use crate::llm::claude::ClaudeConfig;
use crate::llm::openai::OpenAiConfig;
use crate::llm::{ModelClient, ModelInfo, Provider};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_CLAUDE_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),
}

/// Provider configuration held in memory for the process lifetime.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppSettings {
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub claude_api_key: Option<String>,
    pub claude_base_url: Option<String>,
    pub ollama_host: Option<String>,
    pub default_model: Option<String>,
}

impl AppSettings {
    /// Read provider settings from the environment.
    pub fn from_env() -> Self {
        fn var(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|v| !v.is_empty())
        }
        Self {
            openai_api_key: var("OPENAI_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL"),
            claude_api_key: var("ANTHROPIC_API_KEY"),
            claude_base_url: var("ANTHROPIC_BASE_URL"),
            ollama_host: var("OLLAMA_HOST"),
            default_model: var("PDF_CHAT_MODEL"),
        }
    }

    /// Resolve a model string like "openai/gpt-4o", "claude/...", "ollama/..."
    /// into a client ready to generate. A bare model name defaults to OpenAI.
    pub fn resolve_provider(&self, model: &str) -> Result<ModelClient, SettingsError> {
        if let Some(model_id) = model.strip_prefix("ollama/") {
            let host = self
                .ollama_host
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string());
            Ok(ModelClient {
                provider: Provider::ollama(host),
                model: model_id.to_string(),
            })
        } else if let Some(model_id) = model.strip_prefix("claude/") {
            let api_key = self
                .claude_api_key
                .clone()
                .ok_or(SettingsError::MissingApiKey("Claude"))?;
            let base_url = self
                .claude_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_CLAUDE_BASE_URL.to_string());
            Ok(ModelClient {
                provider: Provider::Claude(ClaudeConfig { api_key, base_url }),
                model: model_id.to_string(),
            })
        } else {
            let model_id = model.strip_prefix("openai/").unwrap_or(model);
            let api_key = self
                .openai_api_key
                .clone()
                .ok_or(SettingsError::MissingApiKey("OpenAI"))?;
            let base_url = self
                .openai_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
            Ok(ModelClient {
                provider: Provider::OpenAi(OpenAiConfig { api_key, base_url }),
                model: model_id.to_string(),
            })
        }
    }

    /// Models usable with the currently configured keys.
    pub fn available_models(&self) -> Vec<ModelInfo> {
        let mut models = Vec::new();

        if self.openai_api_key.is_some() {
            models.extend([
                ModelInfo {
                    id: "openai/gpt-4o".into(),
                    name: "GPT-4o".into(),
                    provider: "OpenAI".into(),
                },
                ModelInfo {
                    id: "openai/gpt-4o-mini".into(),
                    name: "GPT-4o Mini".into(),
                    provider: "OpenAI".into(),
                },
            ]);
        }

        if self.claude_api_key.is_some() {
            models.extend([
                ModelInfo {
                    id: "claude/claude-sonnet-4-20250514".into(),
                    name: "Claude Sonnet 4".into(),
                    provider: "Anthropic".into(),
                },
                ModelInfo {
                    id: "claude/claude-haiku-3-5-20241022".into(),
                    name: "Claude Haiku 3.5".into(),
                    provider: "Anthropic".into(),
                },
            ]);
        }

        // Ollama runs locally and needs no key
        models.extend([
            ModelInfo {
                id: "ollama/llama3".into(),
                name: "Llama 3".into(),
                provider: "Ollama".into(),
            },
            ModelInfo {
                id: "ollama/qwen2.5".into(),
                name: "Qwen 2.5".into(),
                provider: "Ollama".into(),
            },
        ]);

        models
    }

    /// Settings as display strings, with API keys masked.
    pub fn display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        if let Some(v) = &self.openai_api_key {
            map.insert("openai_api_key".to_string(), mask_key(v));
        }
        if let Some(v) = &self.openai_base_url {
            map.insert("openai_base_url".to_string(), v.clone());
        }
        if let Some(v) = &self.claude_api_key {
            map.insert("claude_api_key".to_string(), mask_key(v));
        }
        if let Some(v) = &self.claude_base_url {
            map.insert("claude_base_url".to_string(), v.clone());
        }
        if let Some(v) = &self.ollama_host {
            map.insert("ollama_host".to_string(), v.clone());
        }
        if let Some(v) = &self.default_model {
            map.insert("default_model".to_string(), v.clone());
        }
        map
    }
}

fn mask_key(value: &str) -> String {
    if value.len() > 8 {
        format!("{}...{}", &value[..4], &value[value.len() - 4..])
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ollama_needs_no_key() {
        let settings = AppSettings::default();
        let client = settings.resolve_provider("ollama/llama3").unwrap();
        assert_eq!(client.model, "llama3");
        assert!(matches!(client.provider, Provider::Ollama(_)));
    }

    #[test]
    fn test_resolve_claude_requires_key() {
        let settings = AppSettings::default();
        let err = settings.resolve_provider("claude/claude-sonnet-4-20250514");
        assert!(matches!(err, Err(SettingsError::MissingApiKey("Claude"))));
    }

    #[test]
    fn test_bare_model_defaults_to_openai() {
        let settings = AppSettings {
            openai_api_key: Some("sk-test".into()),
            ..Default::default()
        };
        let client = settings.resolve_provider("gpt-4o").unwrap();
        assert_eq!(client.model, "gpt-4o");
        assert!(matches!(client.provider, Provider::OpenAi(_)));
    }

    #[test]
    fn test_prefix_is_stripped() {
        let settings = AppSettings {
            openai_api_key: Some("sk-test".into()),
            ..Default::default()
        };
        let client = settings.resolve_provider("openai/gpt-4o-mini").unwrap();
        assert_eq!(client.model, "gpt-4o-mini");
    }

    #[test]
    fn test_api_keys_are_masked_for_display() {
        let settings = AppSettings {
            openai_api_key: Some("sk-abcdefghijklmnop".into()),
            ollama_host: Some("http://localhost:11434".into()),
            ..Default::default()
        };
        let map = settings.display_map();
        assert_eq!(map["openai_api_key"], "sk-a...mnop");
        assert_eq!(map["ollama_host"], "http://localhost:11434");
    }
}
