//! Parameter extraction.
//!
//! Given a step and a variable snapshot, produce the ordered list of
//! `(parameter name, classified value)` pairs that goes into a fault
//! snapshot:
//!
//! - [`ExtractionPolicy`] - which property names are excluded
//! - [`ConfiguredValue`] - classification of one parameter value
//! - [`extract`] - run the classification over a whole step
//!
//! Extraction never fails: a parameter the classifier cannot make sense of
//! degrades to [`ConfiguredValue::Unresolvable`] and is omitted, it never
//! aborts the step's extraction.

pub mod classify;
pub mod policy;

pub use classify::{classify, extract, ConfiguredValue};
pub use policy::ExtractionPolicy;
