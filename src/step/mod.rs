//! Step definitions and parameter bindings.
//!
//! A step is one unit of work in a sequence: a display/type identity plus
//! an ordered set of named, externally-configured parameters.
//!
//! - [`Step`] - capability interface each step kind implements
//! - [`ConfiguredStep`] - generic externally-authored step
//! - [`ParamBinding`] - how a single parameter was configured

pub mod binding;
pub mod configured;
pub mod definition;

pub use binding::ParamBinding;
pub use configured::ConfiguredStep;
pub use definition::Step;
