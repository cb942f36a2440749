//! Screening interview handlers
//!
//! The patient-facing interview flow: start a session, submit answers one
//! at a time, inspect progress, and assemble the final report. Question
//! text always comes back usable — collaborator failures degrade to
//! deterministic templates inside the narrative service.

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::IntakeServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_required};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use interview_engine::{IntakeReport, InterviewState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Patient answer submission
#[derive(Debug, Deserialize, ToSchema)]
pub struct RespondRequest {
    /// Free-text answer to the pending question
    #[schema(example = "I've had a sharp headache for three days")]
    pub answer: String,
}

impl RequestValidation for RespondRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.answer, "Answer is required");
        validate_field!(
            self.answer,
            self.answer.len() <= 10_000,
            "Answer must be at most 10000 characters"
        );
        Ok(())
    }
}

/// Opening question for a started interview
#[derive(Debug, Serialize, ToSchema)]
pub struct StartInterviewResponse {
    pub session_id: String,
    /// Question text to present (and synthesize) to the patient
    pub question: String,
}

/// Next question after an answer was recorded
#[derive(Debug, Serialize, ToSchema)]
pub struct RespondResponse {
    pub question: String,
    /// True once every catalog field has been answered
    pub is_complete: bool,
}

/// Snapshot of interview progress
#[derive(Debug, Serialize, ToSchema)]
pub struct InterviewStateResponse {
    pub session_id: String,
    pub current_field: Option<String>,
    pub completed_fields: Vec<String>,
    pub field_values: HashMap<String, String>,
    pub pending_question: Option<String>,
    pub last_raw_answer: Option<String>,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Assembled report payload
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    pub session_id: String,
    pub narrative_summary: String,
    pub structured_fields: HashMap<String, String>,
    pub generated_at: DateTime<Utc>,
}

impl From<IntakeReport> for ReportResponse {
    fn from(report: IntakeReport) -> Self {
        Self {
            session_id: report.session_id,
            narrative_summary: report.narrative_summary,
            structured_fields: report.structured_fields,
            generated_at: report.generated_at,
        }
    }
}

fn state_response(state: InterviewState, is_complete: bool) -> InterviewStateResponse {
    InterviewStateResponse {
        session_id: state.session_id,
        current_field: state.current_field,
        completed_fields: state.completed_fields,
        field_values: state.field_values,
        pending_question: state.pending_question,
        last_raw_answer: state.last_raw_answer,
        is_complete,
        created_at: state.created_at,
        updated_at: state.updated_at,
    }
}

/// Start (or re-open) a screening interview
#[utoipa::path(
    post,
    path = "/api/interviews/{session_id}/start",
    tag = "interviews",
    params(
        ("session_id" = String, Path, description = "Caller-assigned session identifier")
    ),
    responses(
        (status = 200, description = "Interview started", body = StartInterviewResponse)
    )
)]
pub async fn start_interview(
    State(server): State<IntakeServer>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<StartInterviewResponse>>, ApiError> {
    let question = server.engine.start(&session_id).await;

    Ok(Json(api_success(StartInterviewResponse {
        session_id,
        question,
    })))
}

/// Submit a patient answer and receive the next question
#[utoipa::path(
    post,
    path = "/api/interviews/{session_id}/respond",
    tag = "interviews",
    params(
        ("session_id" = String, Path, description = "Caller-assigned session identifier")
    ),
    request_body = RespondRequest,
    responses(
        (status = 200, description = "Answer recorded", body = RespondResponse),
        (status = 400, description = "Empty answer")
    )
)]
pub async fn respond(
    State(server): State<IntakeServer>,
    Path(session_id): Path<String>,
    Json(request): Json<RespondRequest>,
) -> Result<Json<ApiResponse<RespondResponse>>, ApiError> {
    request.validate()?;

    let outcome = server.engine.respond(&session_id, &request.answer).await?;

    Ok(Json(api_success(RespondResponse {
        question: outcome.question,
        is_complete: outcome.is_complete,
    })))
}

/// Fetch the current interview state
#[utoipa::path(
    get,
    path = "/api/interviews/{session_id}",
    tag = "interviews",
    params(
        ("session_id" = String, Path, description = "Caller-assigned session identifier")
    ),
    responses(
        (status = 200, description = "Interview state", body = InterviewStateResponse),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn get_interview_state(
    State(server): State<IntakeServer>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<InterviewStateResponse>>, ApiError> {
    let state = server
        .engine
        .state(&session_id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("session {}", session_id)))?;

    let is_complete = server.engine.is_interview_complete(&state);
    Ok(Json(api_success(state_response(state, is_complete))))
}

/// Clear an interview back to its initial state
#[utoipa::path(
    post,
    path = "/api/interviews/{session_id}/reset",
    tag = "interviews",
    params(
        ("session_id" = String, Path, description = "Caller-assigned session identifier")
    ),
    responses(
        (status = 200, description = "Interview reset"),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn reset_interview(
    State(server): State<IntakeServer>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    server.engine.reset(&session_id).await?;
    Ok(Json(api_success(())))
}

/// Assemble the structured-plus-narrative report for a session
#[utoipa::path(
    post,
    path = "/api/interviews/{session_id}/report",
    tag = "interviews",
    params(
        ("session_id" = String, Path, description = "Caller-assigned session identifier")
    ),
    responses(
        (status = 200, description = "Report payload", body = ReportResponse),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn assemble_report(
    State(server): State<IntakeServer>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<ReportResponse>>, ApiError> {
    let report = server.engine.assemble_report(&session_id).await?;
    Ok(Json(api_success(ReportResponse::from(report))))
}
