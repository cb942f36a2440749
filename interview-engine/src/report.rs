use crate::engine::InterviewEngine;
use chrono::{DateTime, Utc};
use error_common::IntakeError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// Report payload produced from a completed interview
///
/// Handed to the persistence collaborator by the caller; the engine itself
/// does not store reports or update session status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeReport {
    pub session_id: String,
    /// Single-paragraph narrative synthesis of all condensed field values
    pub narrative_summary: String,
    /// Direct copy of the per-field condensed fragments
    pub structured_fields: HashMap<String, String>,
    pub generated_at: DateTime<Utc>,
}

impl InterviewEngine {
    /// Assemble the report payload for a session
    ///
    /// Completeness is advisory: a partially answered interview still
    /// produces a report (logged as a warning), covering the fields
    /// answered so far.
    ///
    /// # Errors
    ///
    /// Returns not-found for a session that was never referenced.
    pub async fn assemble_report(&self, session_id: &str) -> Result<IntakeReport, IntakeError> {
        let handle = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| IntakeError::NotFound(format!("session {}", session_id)))?;
        let state = handle.lock().await;

        if let Some(missing) = self.catalog.next_unfilled(&state.completed_fields) {
            warn!(
                session_id = session_id,
                missing_field = missing,
                "Assembling report for incomplete interview"
            );
        }

        // Catalog order puts the chief complaint first in the prompt context
        let ordered_fields: Vec<(String, String)> = self
            .catalog
            .fields()
            .iter()
            .filter_map(|field| {
                state
                    .field_values
                    .get(field)
                    .map(|value| (field.clone(), value.clone()))
            })
            .collect();

        let narrative_summary = self.narrative.final_narrative(&ordered_fields).await;

        info!(
            session_id = session_id,
            field_count = ordered_fields.len(),
            "Report assembled"
        );

        Ok(IntakeReport {
            session_id: session_id.to_string(),
            narrative_summary,
            structured_fields: state.field_values.clone(),
            generated_at: Utc::now(),
        })
    }
}
