//! Route path constants
//!
//! Central registry of every route the server exposes, grouped by concern.

pub mod health {
    pub const HEALTH: &str = "/health";
    pub const VERSION: &str = "/version";
}

pub mod interviews {
    pub const START: &str = "/api/interviews/:session_id/start";
    pub const RESPOND: &str = "/api/interviews/:session_id/respond";
    pub const STATE: &str = "/api/interviews/:session_id";
    pub const RESET: &str = "/api/interviews/:session_id/reset";
    pub const REPORT: &str = "/api/interviews/:session_id/report";
}
