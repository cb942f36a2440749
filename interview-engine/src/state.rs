use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-session mutable record of progress through the field catalog
///
/// `current_field` is not cleared when the interview completes; it keeps
/// pointing at the last-asked field. Callers detect the terminal state
/// through the completion flag returned by `respond`, never by checking
/// `current_field` for `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewState {
    pub session_id: String,
    /// Condensed clinical-note fragment per answered field
    pub field_values: HashMap<String, String>,
    /// Field currently being asked about
    pub current_field: Option<String>,
    /// Fields already answered, in completion order
    pub completed_fields: Vec<String>,
    /// Most recent unprocessed patient answer, kept for diagnostics
    pub last_raw_answer: Option<String>,
    /// Question text currently awaiting an answer
    pub pending_question: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InterviewState {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            field_values: HashMap::new(),
            current_field: None,
            completed_fields: Vec::new(),
            last_raw_answer: None,
            pending_question: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a condensed answer for `field` and mark it completed
    ///
    /// Completion is recorded at most once per field, so a re-asked field
    /// (e.g. after a repeated `start`) updates its value without
    /// duplicating the completion entry.
    pub fn record_answer(&mut self, field: &str, condensed: String, raw_answer: &str) {
        self.field_values.insert(field.to_string(), condensed);
        if !self.completed_fields.iter().any(|done| done == field) {
            self.completed_fields.push(field.to_string());
        }
        self.last_raw_answer = Some(raw_answer.to_string());
        self.updated_at = Utc::now();
    }
}
