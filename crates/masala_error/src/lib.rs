//! Error types for the masala recipe generation service.
//!
//! Every failure in the pipeline collapses to [`GenerationError`] before it
//! reaches the HTTP boundary; the kind enum exists for operator logs, not
//! for callers.

mod config;
mod generation;

pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind};
