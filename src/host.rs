//! Host scheduler interface.
//!
//! The core never runs a step itself. It asks the host to schedule one and
//! suspends until the host invokes the matching completion or fault entry
//! point on the [`Sequencer`](crate::sequencer::Sequencer). This is a
//! message-passing boundary: no coroutine or async machinery is involved,
//! and control returns to the host immediately after each request.

use std::collections::HashMap;

use serde_json::Value;

use crate::step::Step;

/// Point-in-time mapping of the named variables visible to a run.
///
/// Captured once at failure time; not guaranteed complete — it only covers
/// variables visible in the enclosing scope at that moment.
pub type VariableSnapshot = HashMap<String, Value>;

/// The scheduling surface a host must provide.
///
/// A host implementation promises to eventually invoke exactly one of
/// `on_step_completed` / `on_step_faulted` per `schedule` request, and to
/// never invoke either without an outstanding request. Tearing down an
/// in-flight step without a callback leaves the sequencer suspended; hosts
/// that cancel a run should discard the sequencer instance instead.
pub trait SchedulerHost {
    /// Run one step. `index` is the step's position in the list being
    /// executed.
    fn schedule(&mut self, index: usize, step: &dyn Step);

    /// Variables visible in the top-level scope enclosing the run, at the
    /// moment of the call.
    fn variables_in_scope(&self) -> VariableSnapshot;

    /// The error just delivered to `on_step_faulted` must not propagate
    /// further up the host's own scope chain.
    fn mark_fault_handled(&mut self);
}
