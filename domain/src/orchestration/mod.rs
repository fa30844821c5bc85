//! Orchestration domain
//!
//! The lifecycle of a single query, from submission to the final frame.

pub mod state;

pub use state::{OrchestrationEvent, OrchestrationState};
