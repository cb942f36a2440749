use crate::error::{NarrativeError, NarrativeResult};
use serde::{Deserialize, Serialize};

/// Provider-specific configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CompletionProvider {
    /// OpenAI-compatible chat-completions endpoint (Groq, OpenAI, LiteLLM, ...)
    #[serde(rename = "openai-compatible")]
    OpenAiCompatible {
        api_url: String,
        api_key: String,
        model: String,
    },
    /// Ollama local LLMs (fully private)
    Ollama {
        api_url: String,
        model: String,
    },
}

/// Narrative service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NarrativeConfig {
    pub provider: CompletionProvider,
    pub request_timeout_secs: u64,
}

impl NarrativeConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `NarrativeError::Config` when the selected provider is missing
    /// a required credential. This is the fatal startup-time failure class;
    /// per-request collaborator failures degrade to fallback text instead.
    pub fn from_env() -> NarrativeResult<Self> {
        let request_timeout_secs = std::env::var("COMPLETION_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let provider_type = std::env::var("COMPLETION_PROVIDER")
            .unwrap_or_else(|_| "openai-compatible".to_string());

        let provider = match provider_type.to_lowercase().as_str() {
            "openai-compatible" | "groq" | "openai" => {
                let api_key = std::env::var("COMPLETION_API_KEY")
                    .or_else(|_| std::env::var("GROQ_API_KEY"))
                    .map_err(|_| {
                        NarrativeError::Config(
                            "COMPLETION_API_KEY or GROQ_API_KEY must be set".to_string(),
                        )
                    })?;
                CompletionProvider::OpenAiCompatible {
                    api_url: std::env::var("COMPLETION_API_URL")
                        .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
                    api_key,
                    model: std::env::var("COMPLETION_MODEL")
                        .unwrap_or_else(|_| "llama3-70b-8192".to_string()),
                }
            }
            "ollama" => CompletionProvider::Ollama {
                api_url: std::env::var("OLLAMA_API_URL")
                    .unwrap_or_else(|_| "http://localhost:11434".to_string()),
                model: std::env::var("OLLAMA_MODEL")
                    .unwrap_or_else(|_| "llama3".to_string()),
            },
            _ => {
                return Err(NarrativeError::Config(format!(
                    "Unknown completion provider: {}",
                    provider_type
                )))
            }
        };

        Ok(Self {
            provider,
            request_timeout_secs,
        })
    }
}
