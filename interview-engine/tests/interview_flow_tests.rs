//! End-to-end tests for the interview state machine, driven through
//! deterministic completion providers so no network collaborator is needed.

use async_trait::async_trait;
use interview_engine::{
    FieldCatalog, InMemorySessionStore, InterviewEngine, COMPLETION_MESSAGE,
};
use narrative_service::{
    LanguageModelProvider, NarrativeError, NarrativeResult, NarrativeService,
};
use std::sync::Arc;

/// Echoes the user content back, so generated questions carry the field
/// names from the instruction context.
struct EchoProvider;

#[async_trait]
impl LanguageModelProvider for EchoProvider {
    async fn complete(
        &self,
        _system_instruction: &str,
        user_content: &str,
    ) -> NarrativeResult<String> {
        Ok(user_content.to_string())
    }
}

/// Always returns the same text.
struct ScriptedProvider(&'static str);

#[async_trait]
impl LanguageModelProvider for ScriptedProvider {
    async fn complete(
        &self,
        _system_instruction: &str,
        _user_content: &str,
    ) -> NarrativeResult<String> {
        Ok(self.0.to_string())
    }
}

/// Simulates a collaborator outage on every call.
struct FailingProvider;

#[async_trait]
impl LanguageModelProvider for FailingProvider {
    async fn complete(
        &self,
        _system_instruction: &str,
        _user_content: &str,
    ) -> NarrativeResult<String> {
        Err(NarrativeError::Completion("collaborator down".to_string()))
    }
}

fn three_field_engine(provider: Box<dyn LanguageModelProvider>) -> InterviewEngine {
    let catalog =
        FieldCatalog::new(["chief_complaint", "symptoms", "duration"]).expect("valid catalog");
    InterviewEngine::new(
        catalog,
        Arc::new(InMemorySessionStore::new()),
        Arc::new(NarrativeService::with_provider(provider)),
    )
}

#[tokio::test]
async fn test_full_interview_progression() {
    let engine = three_field_engine(Box::new(EchoProvider));

    let opening = engine.start("s1").await;
    assert!(opening.contains("chief complaint"));

    let first = engine.respond("s1", "ans-A").await.expect("valid answer");
    assert!(!first.is_complete);
    assert!(first.question.contains("symptoms"));

    let state = engine.state("s1").await.expect("session exists");
    assert_eq!(state.completed_fields, vec!["chief_complaint".to_string()]);
    assert_eq!(state.current_field.as_deref(), Some("symptoms"));

    let second = engine.respond("s1", "ans-B").await.expect("valid answer");
    assert!(!second.is_complete);
    assert!(second.question.contains("duration"));

    let third = engine.respond("s1", "ans-C").await.expect("valid answer");
    assert!(third.is_complete);
    assert_eq!(third.question, COMPLETION_MESSAGE);

    let state = engine.state("s1").await.expect("session exists");
    assert_eq!(
        state.completed_fields,
        vec![
            "chief_complaint".to_string(),
            "symptoms".to_string(),
            "duration".to_string()
        ]
    );
    // Terminal quirk: the last-asked field stays set after completion
    assert_eq!(state.current_field.as_deref(), Some("duration"));
}

#[tokio::test]
async fn test_completion_flag_matches_catalog_length() {
    let engine = three_field_engine(Box::new(EchoProvider));
    engine.start("s1").await;

    for expected_complete in [false, false, true] {
        let outcome = engine.respond("s1", "answer").await.expect("valid answer");
        assert_eq!(outcome.is_complete, expected_complete);
    }
}

#[tokio::test]
async fn test_report_assembly_after_completion() {
    let engine = three_field_engine(Box::new(ScriptedProvider(
        "Patient reports a persistent cough.\nSymptoms began last week.",
    )));

    engine.start("s1").await;
    for answer in ["ans-A", "ans-B", "ans-C"] {
        engine.respond("s1", answer).await.expect("valid answer");
    }

    let report = engine.assemble_report("s1").await.expect("session exists");
    assert_eq!(report.session_id, "s1");
    assert_eq!(report.structured_fields.len(), 3);
    for field in ["chief_complaint", "symptoms", "duration"] {
        let value = report.structured_fields.get(field).expect("field present");
        assert!(!value.is_empty());
    }
    // Single paragraph: multi-line collaborator output is joined
    assert!(!report.narrative_summary.is_empty());
    assert!(!report.narrative_summary.contains('\n'));
}

#[tokio::test]
async fn test_partial_report_is_produced() {
    let engine = three_field_engine(Box::new(EchoProvider));
    engine.start("s1").await;
    engine.respond("s1", "only one answer").await.expect("valid answer");

    let report = engine.assemble_report("s1").await.expect("session exists");
    assert_eq!(report.structured_fields.len(), 1);
    assert!(report.structured_fields.contains_key("chief_complaint"));
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let engine = three_field_engine(Box::new(EchoProvider));

    assert!(engine.state("does-not-exist").await.is_none());
    assert!(engine.assemble_report("does-not-exist").await.is_err());
    assert!(engine.reset("does-not-exist").await.is_err());
}

#[tokio::test]
async fn test_empty_answer_rejected_without_mutation() {
    let engine = three_field_engine(Box::new(EchoProvider));
    engine.start("s1").await;

    assert!(engine.respond("s1", "").await.is_err());
    assert!(engine.respond("s1", "   \n").await.is_err());

    let state = engine.state("s1").await.expect("session exists");
    assert!(state.completed_fields.is_empty());

    // An empty answer never creates a session either
    assert!(engine.respond("s2", "").await.is_err());
    assert!(engine.state("s2").await.is_none());
}

#[tokio::test]
async fn test_fallback_questions_when_collaborator_fails() {
    let engine = three_field_engine(Box::new(FailingProvider));

    let opening = engine.start("s1").await;
    assert!(!opening.is_empty());

    let outcome = engine.respond("s1", "ans-A").await.expect("valid answer");
    assert_eq!(outcome.question, "Could you tell me about your symptoms?");

    // The raw answer survives as the condensed value
    let state = engine.state("s1").await.expect("session exists");
    assert_eq!(
        state.field_values.get("chief_complaint"),
        Some(&"ans-A".to_string())
    );
}

#[tokio::test]
async fn test_respond_without_start_defaults_to_first_field() {
    let engine = three_field_engine(Box::new(EchoProvider));

    let outcome = engine.respond("s1", "walked in early").await.expect("valid answer");
    assert!(!outcome.is_complete);

    let state = engine.state("s1").await.expect("session exists");
    assert_eq!(state.completed_fields, vec!["chief_complaint".to_string()]);
}

#[tokio::test]
async fn test_repeated_start_does_not_reset_answers() {
    let engine = three_field_engine(Box::new(EchoProvider));

    engine.start("s1").await;
    engine.respond("s1", "first answer").await.expect("valid answer");

    engine.start("s1").await;
    let state = engine.state("s1").await.expect("session exists");
    assert_eq!(state.completed_fields, vec!["chief_complaint".to_string()]);
    assert_eq!(state.current_field.as_deref(), Some("chief_complaint"));

    // Re-answering the re-asked field updates its value without a
    // duplicate completion entry
    engine.respond("s1", "revised answer").await.expect("valid answer");
    let state = engine.state("s1").await.expect("session exists");
    assert_eq!(state.completed_fields, vec!["chief_complaint".to_string()]);
    assert_eq!(
        state.field_values.get("chief_complaint"),
        Some(&"revised answer".to_string())
    );
}

#[tokio::test]
async fn test_reset_clears_session() {
    let engine = three_field_engine(Box::new(EchoProvider));

    engine.start("s1").await;
    engine.respond("s1", "some answer").await.expect("valid answer");
    engine.reset("s1").await.expect("session exists");

    let state = engine.state("s1").await.expect("session exists");
    assert!(state.completed_fields.is_empty());
    assert!(state.field_values.is_empty());
    assert!(state.current_field.is_none());
}

#[tokio::test]
async fn test_sessions_progress_independently() {
    let engine = Arc::new(three_field_engine(Box::new(EchoProvider)));

    engine.start("s1").await;
    engine.start("s2").await;

    let (one, two) = tokio::join!(
        engine.respond("s1", "answer for s1"),
        engine.respond("s2", "answer for s2"),
    );
    assert!(one.is_ok());
    assert!(two.is_ok());

    let s1 = engine.state("s1").await.expect("session exists");
    let s2 = engine.state("s2").await.expect("session exists");
    assert_eq!(s1.completed_fields.len(), 1);
    assert_eq!(s2.completed_fields.len(), 1);
    assert_eq!(
        s1.field_values.get("chief_complaint"),
        Some(&"answer for s1".to_string())
    );
    assert_eq!(
        s2.field_values.get("chief_complaint"),
        Some(&"answer for s2".to_string())
    );
}
