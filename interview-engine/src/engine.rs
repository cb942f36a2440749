use crate::catalog::FieldCatalog;
use crate::state::InterviewState;
use crate::store::SessionStore;
use chrono::Utc;
use error_common::IntakeError;
use narrative_service::NarrativeService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Terminal acknowledgment returned once every catalog field is filled
pub const COMPLETION_MESSAGE: &str =
    "Thank you for providing all the information. The medical screening is now complete.";

/// Outcome of a `respond` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondOutcome {
    pub question: String,
    pub is_complete: bool,
}

/// Conversational interview state machine
///
/// Owns the transition logic between `start`, the per-answer `respond`
/// cycle, and completion. All narrative text comes from the summarization
/// service, which degrades to deterministic templates on collaborator
/// failure, so `start` and `respond` always return usable question text.
pub struct InterviewEngine {
    pub(crate) catalog: FieldCatalog,
    pub(crate) store: Arc<dyn SessionStore>,
    pub(crate) narrative: Arc<NarrativeService>,
}

impl InterviewEngine {
    pub fn new(
        catalog: FieldCatalog,
        store: Arc<dyn SessionStore>,
        narrative: Arc<NarrativeService>,
    ) -> Self {
        Self {
            catalog,
            store,
            narrative,
        }
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Begin (or re-open) an interview and return the opening question
    ///
    /// Repeated calls do not reset accumulated answers; they point the
    /// session back at the first catalog field and re-ask about it.
    pub async fn start(&self, session_id: &str) -> String {
        let handle = self.store.get_or_create(session_id).await;
        let mut state = handle.lock().await;

        let first_field = self.catalog.first().to_string();
        state.current_field = Some(first_field.clone());

        let question = self.narrative.opening_question(&first_field).await;
        state.pending_question = Some(question.clone());
        state.updated_at = Utc::now();

        info!(session_id = session_id, field = %first_field, "Interview started");
        question
    }

    /// Record a patient answer and advance to the next unfilled field
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or whitespace-only answer;
    /// state is untouched on that path. Collaborator failures never
    /// surface here.
    pub async fn respond(
        &self,
        session_id: &str,
        raw_answer: &str,
    ) -> Result<RespondOutcome, IntakeError> {
        if raw_answer.trim().is_empty() {
            return Err(IntakeError::ValidationError(
                "answer must not be empty".to_string(),
            ));
        }

        let handle = self.store.get_or_create(session_id).await;
        let mut state = handle.lock().await;

        // Defensive default for sessions answered before `start`
        let current_field = match state.current_field.clone() {
            Some(field) => field,
            None => {
                let first = self.catalog.first().to_string();
                state.current_field = Some(first.clone());
                first
            }
        };

        let condensed = self.narrative.condense(&current_field, raw_answer).await;
        state.record_answer(&current_field, condensed.clone(), raw_answer);

        debug!(
            session_id = session_id,
            field = %current_field,
            completed = state.completed_fields.len(),
            "Answer recorded"
        );

        let Some(next_field) = self
            .catalog
            .next_unfilled(&state.completed_fields)
            .map(str::to_string)
        else {
            // Terminal: `current_field` intentionally keeps pointing at the
            // last-asked field; callers check the completion flag.
            info!(session_id = session_id, "Interview complete");
            return Ok(RespondOutcome {
                question: COMPLETION_MESSAGE.to_string(),
                is_complete: true,
            });
        };

        state.current_field = Some(next_field.clone());
        let question = self
            .narrative
            .transition_question(&current_field, &condensed, &next_field)
            .await;
        state.pending_question = Some(question.clone());
        state.updated_at = Utc::now();

        Ok(RespondOutcome {
            question,
            is_complete: false,
        })
    }

    /// Snapshot of a session's interview state
    pub async fn state(&self, session_id: &str) -> Option<InterviewState> {
        let handle = self.store.get(session_id).await?;
        let state = handle.lock().await;
        Some(state.clone())
    }

    /// Clear an existing session back to its initial empty state
    ///
    /// # Errors
    ///
    /// Returns not-found for a session that was never referenced.
    pub async fn reset(&self, session_id: &str) -> Result<(), IntakeError> {
        let handle = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| IntakeError::NotFound(format!("session {}", session_id)))?;
        let mut state = handle.lock().await;
        *state = InterviewState::new(session_id);
        info!(session_id = session_id, "Interview reset");
        Ok(())
    }

    /// Whether every catalog field has been completed
    pub fn is_interview_complete(&self, state: &InterviewState) -> bool {
        self.catalog.next_unfilled(&state.completed_fields).is_none()
    }
}
