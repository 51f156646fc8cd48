//! Sequencing state machine.
//!
//! Walks an ordered step list one step at a time. The host scheduler runs
//! each step and reports back through [`Sequencer::on_step_completed`] /
//! [`Sequencer::on_step_faulted`]; on a fault the sequencer records a
//! diagnostic snapshot and either suppresses the error and continues, or
//! hands it back to the caller to propagate.
//!
//! At most one step is ever in flight. Control returns to the host
//! immediately after each schedule request; there is no blocking wait and
//! no internal locking. A sequencer instance belongs to one run at a time —
//! concurrent runs of the same step list need separate instances.

use tracing::{debug, warn};

use crate::error::{CairnError, Result};
use crate::fault::FaultRecorder;
use crate::host::SchedulerHost;
use crate::step::Step;

/// Phase of a sequencer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No run started yet.
    Idle,

    /// The step at this index is in flight.
    Running(usize),

    /// All steps finished, or the list was empty.
    Done,

    /// A fault was not absorbed; no further steps run.
    Propagating,
}

impl Phase {
    /// Check if the run is over (no step in flight, nothing more scheduled).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done | Phase::Propagating)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Running(index) => write!(f, "running({})", index),
            Phase::Done => write!(f, "done"),
            Phase::Propagating => write!(f, "propagating"),
        }
    }
}

/// Executes a step list one step at a time with a fault policy.
pub struct Sequencer {
    name: Option<String>,
    steps: Vec<Box<dyn Step>>,
    continue_on_error: bool,
    recorder: FaultRecorder,
    phase: Phase,
}

impl Sequencer {
    /// Sequencer over `steps` with the default fault policy
    /// (`continue_on_error` on) and the default recorder.
    pub fn new(steps: Vec<Box<dyn Step>>) -> Self {
        Self {
            name: None,
            steps,
            continue_on_error: true,
            recorder: FaultRecorder::new(),
            phase: Phase::Idle,
        }
    }

    /// Name used to label diagnostics for this run.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether a step fault is suppressed and the run continues.
    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Replace the fault recorder (custom sink or extraction policy).
    pub fn with_recorder(mut self, recorder: FaultRecorder) -> Self {
        self.recorder = recorder;
        self
    }

    /// Current phase of the run.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Begin a run.
    ///
    /// An empty step list completes immediately with no work performed.
    /// Starting again from a terminal phase resets the run state and
    /// begins a fresh execution; starting while a step is in flight is an
    /// error.
    pub fn start(&mut self, host: &mut dyn SchedulerHost) -> Result<()> {
        if let Phase::Running(index) = self.phase {
            return Err(CairnError::RunInFlight { index });
        }

        if self.steps.is_empty() {
            debug!(
                run = self.name.as_deref().unwrap_or("<unnamed>"),
                "no steps to run"
            );
            self.phase = Phase::Done;
            return Ok(());
        }

        self.phase = Phase::Running(0);
        host.schedule(0, self.steps[0].as_ref());
        Ok(())
    }

    /// The in-flight step finished without error.
    pub fn on_step_completed(&mut self, host: &mut dyn SchedulerHost) -> Result<()> {
        let index = self.in_flight("completion")?;
        self.advance(index + 1, host);
        Ok(())
    }

    /// The in-flight step raised an error.
    ///
    /// Records and emits a fault snapshot covering the failed step and all
    /// steps already executed. With `continue_on_error` the fault is marked
    /// handled on the host and the run moves on; otherwise the run halts
    /// and the error goes back to the caller, carrying the step's message
    /// and index.
    pub fn on_step_faulted(
        &mut self,
        host: &mut dyn SchedulerHost,
        error: anyhow::Error,
    ) -> Result<()> {
        let index = self.in_flight("fault")?;
        let message = error.to_string();

        // One snapshot of the visible variables, taken at the fault.
        let variables = host.variables_in_scope();
        self.recorder
            .record(self.name.as_deref(), &self.steps, index, &message, &variables);

        if self.continue_on_error {
            warn!(
                "Step '{}' faulted, continuing: {}",
                self.steps[index].type_name(),
                message
            );
            host.mark_fault_handled();
            self.advance(index + 1, host);
            return Ok(());
        }

        self.phase = Phase::Propagating;
        Err(CairnError::StepFaulted {
            step: self.steps[index].type_name().to_string(),
            index,
            message,
        })
    }

    fn in_flight(&self, callback: &str) -> Result<usize> {
        match self.phase {
            Phase::Running(index) => Ok(index),
            phase => Err(CairnError::UnexpectedCallback {
                callback: callback.to_string(),
                phase: phase.to_string(),
            }),
        }
    }

    fn advance(&mut self, next: usize, host: &mut dyn SchedulerHost) {
        if next == self.steps.len() {
            self.phase = Phase::Done;
        } else {
            self.phase = Phase::Running(next);
            host.schedule(next, self.steps[next].as_ref());
        }
    }
}
