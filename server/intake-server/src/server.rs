use anyhow::Result;
use interview_engine::{FieldCatalog, InMemorySessionStore, InterviewEngine};
use narrative_service::{NarrativeConfig, NarrativeService};
use std::sync::Arc;

/// Main CareIntake server state
#[derive(Clone)]
pub struct IntakeServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Interview state machine
    pub engine: Arc<InterviewEngine>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            name: std::env::var("SERVER_NAME")
                .unwrap_or_else(|_| "CareIntake Engine".to_string()),
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5050),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "CareIntake Engine".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5050,
        }
    }
}

impl IntakeServer {
    /// Create a new CareIntake server instance
    ///
    /// # Errors
    ///
    /// Fails when the narrative collaborator is misconfigured (e.g. a
    /// missing API credential) — the fatal startup-time failure class.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let narrative_config = NarrativeConfig::from_env()?;
        let narrative = NarrativeService::new(narrative_config)?;

        let engine = InterviewEngine::new(
            FieldCatalog::standard(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(narrative),
        );

        Ok(Self {
            config,
            engine: Arc::new(engine),
        })
    }

    /// Create a server instance around an existing engine
    /// This is useful for testing
    pub fn with_engine(config: ServerConfig, engine: Arc<InterviewEngine>) -> Self {
        Self { config, engine }
    }

    /// Get server configuration
    pub fn get_config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for IntakeServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeServer")
            .field("config", &self.config)
            .finish()
    }
}
