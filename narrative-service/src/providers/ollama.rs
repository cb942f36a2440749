/// Ollama provider - fully private, self-hosted text completion
///
/// Targets a local Ollama instance so no interview content leaves the
/// deployment. Uses the native `/api/chat` endpoint.
use crate::config::{CompletionProvider, NarrativeConfig};
use crate::error::{NarrativeError, NarrativeResult};
use crate::providers::LanguageModelProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct OllamaProvider {
    client: reqwest::Client,
    api_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

impl OllamaProvider {
    pub fn new(config: &NarrativeConfig) -> NarrativeResult<Self> {
        let CompletionProvider::Ollama { api_url, model } = &config.provider else {
            return Err(NarrativeError::Config(
                "provider configuration is not ollama".to_string(),
            ));
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            model: model.clone(),
        })
    }
}

#[async_trait]
impl LanguageModelProvider for OllamaProvider {
    async fn complete(
        &self,
        system_instruction: &str,
        user_content: &str,
    ) -> NarrativeResult<String> {
        let request = OllamaChatRequest {
            model: &self.model,
            messages: vec![
                OllamaMessage {
                    role: "system",
                    content: system_instruction,
                },
                OllamaMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.api_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NarrativeError::Completion(format!(
                "ollama endpoint returned {}",
                response.status()
            )));
        }

        let payload: OllamaChatResponse = response.json().await?;
        if payload.message.content.trim().is_empty() {
            return Err(NarrativeError::Completion(
                "ollama endpoint returned empty content".to_string(),
            ));
        }

        Ok(payload.message.content)
    }
}
