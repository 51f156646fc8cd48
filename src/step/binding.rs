//! Parameter bindings.
//!
//! A binding records how a single step parameter was configured at authoring
//! time. The binding shape is fixed when the step is constructed;
//! classification against a variable snapshot happens later, at fault time.

use serde_json::Value;

/// How a single step parameter was configured.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamBinding {
    /// Property declared but holding no value.
    Unset,

    /// A concrete value fixed at authoring time.
    Literal(Value),

    /// Raw expression text: either a double-quoted string literal or the
    /// name of a variable in the enclosing scope.
    Expression(String),

    /// Present, but in a form the extractor cannot decode.
    Opaque,
}

impl ParamBinding {
    /// Binding for a concrete literal value.
    pub fn literal(value: impl Into<Value>) -> Self {
        ParamBinding::Literal(value.into())
    }

    /// Binding for raw expression text.
    pub fn expression(text: impl Into<String>) -> Self {
        ParamBinding::Expression(text.into())
    }
}
