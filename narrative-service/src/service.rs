use crate::cleanup::{clean_fragment, clean_question};
use crate::config::NarrativeConfig;
use crate::error::NarrativeResult;
use crate::prompts;
use crate::providers::{create_provider, LanguageModelProvider};
use tracing::{debug, warn};

/// Narrative summarization service for screening interviews
///
/// Every operation returns usable text: collaborator failures are replaced
/// by deterministic fallback templates and logged, never propagated.
pub struct NarrativeService {
    provider: Box<dyn LanguageModelProvider>,
}

impl NarrativeService {
    /// Create a new narrative service from configuration
    ///
    /// # Errors
    ///
    /// Fails only on misconfiguration (unknown provider, missing
    /// credential). This is the fatal startup-time class; nothing else in
    /// this service returns an error.
    pub fn new(config: NarrativeConfig) -> NarrativeResult<Self> {
        let provider = create_provider(&config)?;
        Ok(Self { provider })
    }

    /// Create a service around an existing provider (used by tests)
    pub fn with_provider(provider: Box<dyn LanguageModelProvider>) -> Self {
        Self { provider }
    }

    /// Greeting plus a question about the first catalog field
    pub async fn opening_question(&self, first_field: &str) -> String {
        let request = prompts::opening_request(first_field);
        match self
            .provider
            .complete(prompts::INTERVIEWER_SYSTEM, &request)
            .await
        {
            Ok(text) => clean_question(&text),
            Err(error) => {
                warn!(field = first_field, error = %error, "Opening question fell back to template");
                prompts::FALLBACK_OPENING.to_string()
            }
        }
    }

    /// Condense a raw patient answer into a clinical-note fragment
    ///
    /// Falls back to the cleaned raw answer itself, so no patient input is
    /// lost when the collaborator is unavailable.
    pub async fn condense(&self, field: &str, raw_answer: &str) -> String {
        let system = prompts::condense_system(field);
        match self.provider.complete(&system, raw_answer).await {
            Ok(text) => clean_fragment(&text, field),
            Err(error) => {
                warn!(field = field, error = %error, "Condensation fell back to raw answer");
                clean_fragment(raw_answer, field)
            }
        }
    }

    /// One-sentence transition acknowledging the prior answer plus a single
    /// specific question about the next field
    pub async fn transition_question(
        &self,
        completed_field: &str,
        condensed: &str,
        next_field: &str,
    ) -> String {
        let request = prompts::transition_request(completed_field, condensed, next_field);
        match self
            .provider
            .complete(prompts::TRANSITION_SYSTEM, &request)
            .await
        {
            Ok(text) => clean_question(&text),
            Err(error) => {
                warn!(field = next_field, error = %error, "Transition question fell back to template");
                prompts::fallback_question(next_field)
            }
        }
    }

    /// Synthesize all condensed field values into a single cohesive paragraph
    pub async fn final_narrative(&self, fields: &[(String, String)]) -> String {
        let request = prompts::report_request(fields);
        debug!(field_count = fields.len(), "Generating final narrative");
        match self.provider.complete(prompts::REPORT_SYSTEM, &request).await {
            Ok(text) => clean_question(&text),
            Err(error) => {
                warn!(error = %error, "Final narrative fell back to placeholder");
                prompts::FALLBACK_REPORT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NarrativeError;
    use crate::providers::MockLanguageModelProvider;

    fn scripted(response: &str) -> NarrativeService {
        let mut provider = MockLanguageModelProvider::new();
        let response = response.to_string();
        provider
            .expect_complete()
            .returning(move |_, _| Ok(response.clone()));
        NarrativeService::with_provider(Box::new(provider))
    }

    fn failing() -> NarrativeService {
        let mut provider = MockLanguageModelProvider::new();
        provider.expect_complete().returning(|_, _| {
            Err(NarrativeError::Completion("simulated outage".to_string()))
        });
        NarrativeService::with_provider(Box::new(provider))
    }

    #[tokio::test]
    async fn test_condense_strips_markup_and_label() {
        let service = scripted("**Symptoms:** fever and chills\nfor three days");
        let condensed = service.condense("symptoms", "I have had fever and chills").await;
        assert_eq!(condensed, "fever and chills for three days");
    }

    #[tokio::test]
    async fn test_opening_question_falls_back_on_failure() {
        let service = failing();
        let question = service.opening_question("chief_complaint").await;
        assert_eq!(question, prompts::FALLBACK_OPENING);
    }

    #[tokio::test]
    async fn test_condense_falls_back_to_raw_answer() {
        let service = failing();
        let condensed = service.condense("allergies", "penicillin rash").await;
        assert_eq!(condensed, "penicillin rash");
    }

    #[tokio::test]
    async fn test_transition_falls_back_to_template() {
        let service = failing();
        let question = service
            .transition_question("symptoms", "fever", "medical_history")
            .await;
        assert_eq!(question, "Could you tell me about your medical history?");
    }

    #[tokio::test]
    async fn test_final_narrative_joins_to_single_paragraph() {
        let service = scripted("Patient presents with fever.\n\nHistory is unremarkable.");
        let narrative = service
            .final_narrative(&[("chief_complaint".to_string(), "fever".to_string())])
            .await;
        assert_eq!(narrative, "Patient presents with fever. History is unremarkable.");
    }

    #[tokio::test]
    async fn test_final_narrative_falls_back_to_placeholder() {
        let service = failing();
        let narrative = service.final_narrative(&[]).await;
        assert_eq!(narrative, prompts::FALLBACK_REPORT);
    }
}
