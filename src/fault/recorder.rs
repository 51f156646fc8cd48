//! Fault recording.

use chrono::Utc;
use tracing::debug;

use crate::extract::{extract, ExtractionPolicy};
use crate::host::VariableSnapshot;
use crate::step::Step;

use super::sink::{DiagnosticSink, TracingSink};
use super::snapshot::{ErrorInfo, FaultSnapshot, StepReport};

/// Builds fault snapshots and hands them to the diagnostic sink.
pub struct FaultRecorder {
    policy: ExtractionPolicy,
    sink: Box<dyn DiagnosticSink>,
}

impl Default for FaultRecorder {
    fn default() -> Self {
        Self {
            policy: ExtractionPolicy::default(),
            sink: Box::new(TracingSink),
        }
    }
}

impl FaultRecorder {
    /// Recorder with the default policy and the bundled tracing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extraction policy.
    pub fn with_policy(mut self, policy: ExtractionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Build the snapshot for a fault at `failed_index` and emit it.
    ///
    /// Emission happens exactly once per fault. A sink failure is logged
    /// and discarded; it never affects the run being automated.
    pub fn record(
        &mut self,
        run_name: Option<&str>,
        steps: &[Box<dyn Step>],
        failed_index: usize,
        message: &str,
        variables: &VariableSnapshot,
    ) -> FaultSnapshot {
        let report = |index: usize| StepReport {
            index,
            step_type: steps[index].type_name().to_string(),
            params: extract(steps[index].as_ref(), variables, &self.policy),
        };

        let snapshot = FaultSnapshot {
            run_name: run_name.map(str::to_string),
            failed_step: report(failed_index),
            preceding_steps: (0..failed_index).map(report).collect(),
            error: ErrorInfo {
                message: message.to_string(),
                step_index: failed_index,
            },
            captured_at: Utc::now(),
        };

        if let Err(e) = self.sink.emit(&snapshot) {
            debug!("diagnostic sink failed: {e}");
        }

        snapshot
    }
}
