use thiserror::Error;

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type NarrativeResult<T> = Result<T, NarrativeError>;

impl From<NarrativeError> for error_common::IntakeError {
    fn from(err: NarrativeError) -> Self {
        match err {
            NarrativeError::Config(msg) => error_common::IntakeError::ConfigError(msg),
            other => error_common::IntakeError::ExternalError(other.to_string()),
        }
    }
}
