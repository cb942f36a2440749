use thiserror::Error;

/// Simplified error enum for common use cases
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Unknown session, report, or other missing resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// External service errors
    #[error("External service error: {0}")]
    ExternalError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntakeError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => crate::codes::validation::INVALID_INPUT,
            Self::NotFound(_) => crate::codes::session::SESSION_NOT_FOUND,
            Self::ExternalError(_) => crate::codes::collaborator::COMPLETION_FAILED,
            Self::ConfigError(_) => crate::codes::system::CONFIG_INVALID,
            Self::InternalError(_) | Self::Other(_) => crate::codes::system::INTERNAL,
        }
    }
}

/// Result type alias for CareIntake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Async logging function for errors
pub async fn log_error(context: &str, error: &IntakeError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "CareIntake error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = IntakeError::ValidationError("answer must not be empty".to_string());
        assert_eq!(err.code(), "VALIDATION_1001");

        let err = IntakeError::NotFound("session abc".to_string());
        assert_eq!(err.code(), "SESSION_2001");
    }

    #[test]
    fn test_display_includes_category() {
        let err = IntakeError::ExternalError("completion endpoint timed out".to_string());
        assert!(err.to_string().starts_with("External service error:"));
    }
}
