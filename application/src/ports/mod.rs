//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod answer_provider;
pub mod credential_store;
pub mod frame_sink;
pub mod search_tool;
