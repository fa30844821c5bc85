//! Application-level configuration.
//!
//! - [`OrchestrationParams`]: provider availability and presentation timing

pub mod orchestration_params;

pub use orchestration_params::OrchestrationParams;
