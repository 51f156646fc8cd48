//! Classification of configured parameter values.
//!
//! The expression-text rules follow the host convention for step arguments:
//! string literals arrive wrapped in double quotes (`"text"`), variable
//! references arrive bare (`variableName`).

use serde::Serialize;
use serde_json::Value;

use crate::host::VariableSnapshot;
use crate::step::{ParamBinding, Step};

use super::policy::ExtractionPolicy;

/// Property name treated as the step's own identity entry.
const DISPLAY_NAME: &str = "DisplayName";

/// Classification of a single configured parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ConfiguredValue {
    /// A concrete value, rendered to its textual form.
    Literal(String),

    /// A reference to a named variable, resolved against the snapshot
    /// taken at capture time. `value` is `None` when the name is not in
    /// the snapshot — a not-found resolution, not an error.
    VariableReference { name: String, value: Option<Value> },

    /// Present but not decodable. Never emitted.
    Unresolvable,

    /// Property holds no value. Never emitted.
    Absent,
}

impl ConfiguredValue {
    /// Whether this classification appears in extraction output.
    pub fn is_reportable(&self) -> bool {
        matches!(
            self,
            ConfiguredValue::Literal(_) | ConfiguredValue::VariableReference { .. }
        )
    }
}

/// Classify one parameter binding against a variable snapshot.
///
/// Expression text wrapped in double quotes (first and last character) is a
/// string literal with the quotes stripped. Any other expression text names
/// a variable.
pub fn classify(binding: &ParamBinding, variables: &VariableSnapshot) -> ConfiguredValue {
    match binding {
        ParamBinding::Unset => ConfiguredValue::Absent,
        ParamBinding::Opaque => ConfiguredValue::Unresolvable,
        ParamBinding::Literal(value) => ConfiguredValue::Literal(render_literal(value)),
        ParamBinding::Expression(text) => match quoted_literal(text) {
            Some(unquoted) => ConfiguredValue::Literal(unquoted.to_string()),
            None => ConfiguredValue::VariableReference {
                name: text.clone(),
                value: variables.get(text).cloned(),
            },
        },
    }
}

/// Extract the reportable parameters of a step, in declared order.
///
/// Denylisted properties and parameters classifying as `Absent` or
/// `Unresolvable` are omitted. A `DisplayName` entry is hoisted to the
/// front of the list as the step's distinguished identity entry.
pub fn extract(
    step: &dyn Step,
    variables: &VariableSnapshot,
    policy: &ExtractionPolicy,
) -> Vec<(String, ConfiguredValue)> {
    let mut out = Vec::new();

    for (name, binding) in step.parameters() {
        if policy.is_denied(name) {
            continue;
        }

        let value = classify(binding, variables);
        if !value.is_reportable() {
            continue;
        }

        if name == DISPLAY_NAME {
            out.insert(0, (name.clone(), value));
        } else {
            out.push((name.clone(), value));
        }
    }

    out
}

/// Textual form of a literal: strings render bare, everything else via its
/// canonical JSON text.
fn render_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The unquoted body of a double-quoted expression, if it is one.
fn quoted_literal(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}
