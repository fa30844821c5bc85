//! Domain layer for searchmind
//!
//! This crate contains the value objects, entities and pure policies of the
//! answer orchestration client. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Query / Credential**: validated user input; credentials are opaque and
//!   redacted in debug output
//! - **AnswerResult**: the one result shape every provider is normalized into
//! - **ProviderKind + select**: the closed set of providers and the pure policy
//!   choosing between them
//! - **PresentationFrame**: one snapshot of the simulated typing stream
//! - **OrchestrationState**: the per-query lifecycle

pub mod answer;
pub mod config;
pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod provider;
pub mod search;
pub mod session;
pub mod stream;
pub mod tool;

// Re-export commonly used types
pub use answer::{AnswerResult, citation_markers, resolve_citations};
pub use config::OutputFormat;
pub use crate::core::{
    credential::{Credential, ProviderKey},
    error::DomainError,
    query::Query,
};
pub use orchestration::{OrchestrationEvent, OrchestrationState};
pub use prompt::PromptTemplate;
pub use provider::{ProviderKind, select};
pub use search::{SearchHit, SearchOutcome};
pub use session::{ContentBlock, Conversation, LlmResponse, Turn};
pub use stream::{APOLOGY_MESSAGE, PresentationFrame};
pub use tool::{ToolCall, ToolDefinition, ToolParameter, WEB_SEARCH, WebSearchArgs, web_search_definition};
