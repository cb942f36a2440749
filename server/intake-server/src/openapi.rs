//! OpenAPI documentation for the CareIntake API

use crate::handlers::{health, interviews};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CareIntake Engine API",
        description = "Telehealth screening interview API: start sessions, record patient answers, and assemble medical reports."
    ),
    paths(
        health::health_check,
        health::version_info,
        interviews::start_interview,
        interviews::respond,
        interviews::get_interview_state,
        interviews::reset_interview,
        interviews::assemble_report,
    ),
    components(schemas(
        health::HealthResponse,
        health::VersionResponse,
        interviews::RespondRequest,
        interviews::StartInterviewResponse,
        interviews::RespondResponse,
        interviews::InterviewStateResponse,
        interviews::ReportResponse,
    )),
    tags(
        (name = "health", description = "Service health and metadata"),
        (name = "interviews", description = "Patient screening interview flow")
    )
)]
pub struct ApiDoc;
