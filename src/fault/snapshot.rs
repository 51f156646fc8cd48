//! Fault snapshot data model.
//!
//! All types serialize with serde so hosts can forward snapshots as
//! structured events; the wire format itself is a host choice.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::extract::ConfiguredValue;

/// Identity and extracted parameters of one step, as seen at fault time.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Position in the step list.
    pub index: usize,

    /// Display/type identity.
    pub step_type: String,

    /// Extracted `(name, classified value)` pairs.
    pub params: Vec<(String, ConfiguredValue)>,
}

/// The triggering error, reduced to what diagnostics need.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// The error's message.
    pub message: String,

    /// Index of the step it originated at.
    pub step_index: usize,
}

/// Diagnostic record of one fault.
///
/// Created once per fault and handed to the diagnostic sink; never retried,
/// never persisted by the core.
#[derive(Debug, Clone, Serialize)]
pub struct FaultSnapshot {
    /// Run name, when the host configured one.
    pub run_name: Option<String>,

    /// The step that faulted.
    pub failed_step: StepReport,

    /// Steps already executed, in list order.
    pub preceding_steps: Vec<StepReport>,

    /// The triggering error.
    pub error: ErrorInfo,

    /// Capture time (UTC).
    pub captured_at: DateTime<Utc>,
}
