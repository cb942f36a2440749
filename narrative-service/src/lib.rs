//! Narrative Summarization Service for CareIntake Engine
//!
//! Wraps an external text-completion collaborator to produce the
//! conversational surface of a screening interview: opening questions,
//! clinical-note condensations of raw patient answers, transition questions
//! between intake topics, and the final narrative summary of a completed
//! interview.
//!
//! # Degradation Contract
//!
//! Every operation returns usable text. Collaborator failures (timeout,
//! non-success status, malformed payload) are contained here and replaced
//! with deterministic fallback text; each occurrence is logged at `warn`.
//! The only fatal failure class is construction-time misconfiguration
//! (e.g. a missing API credential).
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use narrative_service::{NarrativeConfig, NarrativeService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NarrativeConfig::from_env()?;
//! let narrative = NarrativeService::new(config)?;
//!
//! let question = narrative.opening_question("chief_complaint").await;
//! println!("Opening question: {}", question);
//! # Ok(())
//! # }
//! ```

pub mod cleanup;
pub mod config;
pub mod error;
pub mod prompts;
pub mod providers;
pub mod service;

pub use config::*;
pub use error::*;
pub use providers::*;
pub use service::*;
