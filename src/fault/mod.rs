//! Fault capture and reporting.
//!
//! When a step faults, the recorder builds a [`FaultSnapshot`] — the failed
//! step's identity and parameters plus the same for every step already
//! executed — and emits it through a [`DiagnosticSink`] exactly once. The
//! snapshot is consumed by the reporting path and discarded; the core never
//! persists it.

pub mod recorder;
pub mod sink;
pub mod snapshot;

pub use recorder::FaultRecorder;
pub use sink::{DiagnosticSink, TracingSink};
pub use snapshot::{ErrorInfo, FaultSnapshot, StepReport};
