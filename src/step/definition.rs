//! The step capability interface.

use super::binding::ParamBinding;

/// One unit of work in a sequence.
///
/// Step kinds supply their identity and configured parameters through this
/// interface; the diagnostic path never inspects a step any other way.
/// Steps are leaf data with no logic of their own — execution belongs to
/// the host scheduler.
pub trait Step {
    /// Display/type identity, e.g. "Write Line".
    fn type_name(&self) -> &str;

    /// Configured parameters, in declared order.
    fn parameters(&self) -> &[(String, ParamBinding)];
}
