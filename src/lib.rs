//! Cairn - embeddable sequential step executor with fault diagnostics.
//!
//! Cairn runs an ordered list of opaque steps one at a time inside a larger
//! workflow-automation host. The host's scheduler does the actual running;
//! Cairn decides what runs next, and when a step fails it captures a
//! diagnostic snapshot — the failed step's configured parameters, classified
//! as literals or variable references, plus the same for every step already
//! executed — before suppressing the failure or handing it back.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`extract`] - Parameter classification and extraction
//! - [`fault`] - Fault snapshots, recording, and diagnostic sinks
//! - [`host`] - The scheduling surface a host must provide
//! - [`sequencer`] - The sequencing state machine
//! - [`step`] - Step definitions and parameter bindings
//!
//! # Example
//!
//! ```
//! use cairn::extract::{extract, ExtractionPolicy, ConfiguredValue};
//! use cairn::step::{ConfiguredStep, ParamBinding};
//! use std::collections::HashMap;
//!
//! let step = ConfiguredStep::new("Write Line")
//!     .with_param("Text", ParamBinding::expression("\"hello\""));
//!
//! let params = extract(&step, &HashMap::new(), &ExtractionPolicy::default());
//! assert_eq!(params[0].1, ConfiguredValue::Literal("hello".to_string()));
//! ```
//!
//! For driving a full run against a host scheduler, see the integration
//! tests.

pub mod error;
pub mod extract;
pub mod fault;
pub mod host;
pub mod sequencer;
pub mod step;

pub use error::{CairnError, Result};
pub use extract::{ConfiguredValue, ExtractionPolicy};
pub use fault::{DiagnosticSink, FaultRecorder, FaultSnapshot};
pub use host::{SchedulerHost, VariableSnapshot};
pub use sequencer::{Phase, Sequencer};
pub use step::{ConfiguredStep, ParamBinding, Step};
