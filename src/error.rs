//! Error types for Cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `StepFaulted` is the only error that ever leaves a running sequence,
//!   and only when `continue_on_error` is off
//! - Precondition violations (`RunInFlight`, `UnexpectedCallback`) go to the
//!   caller, never to the diagnostic sink
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for Cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// A step raised an error and the fault policy let it propagate.
    #[error("step '{step}' at index {index} faulted: {message}")]
    StepFaulted {
        step: String,
        index: usize,
        message: String,
    },

    /// `start` was called while a step is still in flight.
    #[error("run already in flight at step index {index}")]
    RunInFlight { index: usize },

    /// A completion or fault callback arrived with no step in flight.
    #[error("unexpected {callback} callback: no step in flight (phase: {phase})")]
    UnexpectedCallback { callback: String, phase: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;
