// Error codes implementation
// This module contains standardized error codes for the CareIntake Engine

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
}

pub mod session {
    pub const SESSION_NOT_FOUND: &str = "SESSION_2001";
    pub const SESSION_ALREADY_COMPLETE: &str = "SESSION_2002";
}

pub mod collaborator {
    pub const COMPLETION_FAILED: &str = "COLLAB_3001";
    pub const COMPLETION_TIMEOUT: &str = "COLLAB_3002";
}

pub mod system {
    pub const CONFIG_INVALID: &str = "SYSTEM_4001";
    pub const INTERNAL: &str = "SYSTEM_4002";
}
