//! Generic externally-configured step.
//!
//! Most hosts author steps outside the core and hand them over as plain
//! data; `ConfiguredStep` is the ready-made [`Step`] implementation for
//! that case. Step kinds with richer internal structure can implement
//! [`Step`] directly instead.

use super::binding::ParamBinding;
use super::definition::Step;

/// A step definition authored outside the core: a type identity plus an
/// ordered list of named parameter bindings.
#[derive(Debug, Clone)]
pub struct ConfiguredStep {
    /// Display/type identity.
    pub type_name: String,

    /// Parameters in declared order.
    pub params: Vec<(String, ParamBinding)>,
}

impl ConfiguredStep {
    /// Create a step with no parameters.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            params: Vec::new(),
        }
    }

    /// Add a named parameter binding. Declared order is preserved.
    pub fn with_param(mut self, name: impl Into<String>, binding: ParamBinding) -> Self {
        self.params.push((name.into(), binding));
        self
    }
}

impl Step for ConfiguredStep {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn parameters(&self) -> &[(String, ParamBinding)] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_param_preserves_declared_order() {
        let step = ConfiguredStep::new("Send Mail")
            .with_param("To", ParamBinding::expression("recipient"))
            .with_param("Subject", ParamBinding::literal("weekly report"))
            .with_param("Body", ParamBinding::Unset);

        let names: Vec<&str> = step.parameters().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["To", "Subject", "Body"]);
    }

    #[test]
    fn step_trait_exposes_identity_and_parameters() {
        let step = ConfiguredStep::new("Write Line").with_param("Text", ParamBinding::literal("hi"));

        let as_step: &dyn Step = &step;
        assert_eq!(as_step.type_name(), "Write Line");
        assert_eq!(as_step.parameters().len(), 1);
    }
}
