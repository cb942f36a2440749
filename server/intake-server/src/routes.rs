pub mod paths;

use crate::{
    handlers::{health, interviews},
    openapi,
    server::IntakeServer,
};
use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create health check routes
pub fn health_routes() -> Router<IntakeServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
}

/// Create interview routes
pub fn interview_routes() -> Router<IntakeServer> {
    Router::new()
        .route(paths::interviews::START, post(interviews::start_interview))
        .route(paths::interviews::RESPOND, post(interviews::respond))
        .route(paths::interviews::STATE, get(interviews::get_interview_state))
        .route(paths::interviews::RESET, post(interviews::reset_interview))
        .route(paths::interviews::REPORT, post(interviews::assemble_report))
}

/// Compose all routes plus the OpenAPI documentation UI
pub fn create_routes() -> Router<IntakeServer> {
    Router::new()
        .merge(health_routes())
        .merge(interview_routes())
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
}
