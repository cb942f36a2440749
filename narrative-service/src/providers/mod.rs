pub mod ollama;
pub mod openai_compat;

use crate::config::{CompletionProvider, NarrativeConfig};
use crate::error::NarrativeResult;
use async_trait::async_trait;

/// Trait for text-completion providers
///
/// A single capability: given a per-call system instruction and user
/// content, return generated text. The four narrative operations differ
/// only in the instruction they pass in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModelProvider: Send + Sync {
    /// Generate text for the given instruction and input
    async fn complete(&self, system_instruction: &str, user_content: &str)
        -> NarrativeResult<String>;
}

/// Create a provider instance based on configuration
pub fn create_provider(config: &NarrativeConfig) -> NarrativeResult<Box<dyn LanguageModelProvider>> {
    match &config.provider {
        CompletionProvider::OpenAiCompatible { .. } => Ok(Box::new(
            openai_compat::OpenAiCompatProvider::new(config)?,
        )),
        CompletionProvider::Ollama { .. } => {
            Ok(Box::new(ollama::OllamaProvider::new(config)?))
        }
    }
}
