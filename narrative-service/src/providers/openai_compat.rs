/// OpenAI-compatible chat-completions provider (Groq, OpenAI, LiteLLM, ...)
///
/// Speaks the `/chat/completions` wire format shared by most hosted
/// completion endpoints. The default deployment targets Groq.
use crate::config::{CompletionProvider, NarrativeConfig};
use crate::error::{NarrativeError, NarrativeResult};
use crate::providers::LanguageModelProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct OpenAiCompatProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiCompatProvider {
    pub fn new(config: &NarrativeConfig) -> NarrativeResult<Self> {
        let CompletionProvider::OpenAiCompatible {
            api_url,
            api_key,
            model,
        } = &config.provider
        else {
            return Err(NarrativeError::Config(
                "provider configuration is not openai-compatible".to_string(),
            ));
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.clone(),
            model: model.clone(),
        })
    }
}

#[async_trait]
impl LanguageModelProvider for OpenAiCompatProvider {
    async fn complete(
        &self,
        system_instruction: &str,
        user_content: &str,
    ) -> NarrativeResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
        };

        debug!(model = %self.model, "Requesting completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NarrativeError::Completion(format!(
                "completion endpoint returned {}",
                response.status()
            )));
        }

        let payload: ChatResponse = response.json().await?;
        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(NarrativeError::Completion(
                "completion endpoint returned empty content".to_string(),
            ));
        }

        Ok(content)
    }
}
