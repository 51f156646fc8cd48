//! Diagnostic sinks.

use crate::error::Result;

use super::snapshot::FaultSnapshot;

/// Receives fault snapshots as they are captured.
///
/// A sink is invoked exactly once per fault and never retried. Sink
/// failures are logged and discarded by the recorder; they never escalate
/// into the run being automated.
pub trait DiagnosticSink {
    /// Emit one snapshot.
    fn emit(&mut self, snapshot: &FaultSnapshot) -> Result<()>;
}

/// Default sink: one structured `tracing` event per fault, with the full
/// snapshot attached as a JSON payload.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, snapshot: &FaultSnapshot) -> Result<()> {
        let payload = serde_json::to_string(snapshot).map_err(anyhow::Error::from)?;

        tracing::error!(
            run = snapshot.run_name.as_deref().unwrap_or("<unnamed>"),
            step_index = snapshot.error.step_index,
            step_type = %snapshot.failed_step.step_type,
            error = %snapshot.error.message,
            %payload,
            "step faulted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::snapshot::{ErrorInfo, StepReport};
    use chrono::Utc;

    fn sample_snapshot() -> FaultSnapshot {
        FaultSnapshot {
            run_name: None,
            failed_step: StepReport {
                index: 0,
                step_type: "Delay".into(),
                params: vec![],
            },
            preceding_steps: vec![],
            error: ErrorInfo {
                message: "timer wheel gone".into(),
                step_index: 0,
            },
            captured_at: Utc::now(),
        }
    }

    #[test]
    fn tracing_sink_emits_without_error() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::ERROR)
            .with_writer(std::io::sink)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut sink = TracingSink;
            assert!(sink.emit(&sample_snapshot()).is_ok());
        });
    }
}
