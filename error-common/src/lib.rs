//! Common error handling utilities for CareIntake Engine
//!
//! This module provides standardized error types and error codes used across
//! all CareIntake Engine modules. It ensures consistent error handling and
//! proper error context preservation.
//!
//! # Error Categories
//!
//! - **ValidationError**: Input validation and data format errors
//! - **NotFound**: Unknown session or report lookups
//! - **ExternalError**: Failures of external collaborators (text completion,
//!   persistence, email)
//! - **ConfigError**: Startup-time configuration problems
//! - **InternalError**: Infrastructure and system-level errors

pub mod codes;
pub mod types;

pub use codes::*;
pub use types::*;
