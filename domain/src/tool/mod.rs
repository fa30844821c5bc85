//! Tool domain module
//!
//! Declarations and invocations for the tools an LLM may call. There is exactly
//! one tool in this system, [`web_search`](web_search::WEB_SEARCH), but the
//! declaration types stay generic so adapters can serialize them into any
//! provider's function-calling schema.
//!
//! ```text
//! ToolDefinition ──(declared in round 1)──▶ LLM
//! LLM ──(functionCall)──▶ ToolCall ──▶ WebSearchArgs ──▶ search executor
//! ```

pub mod entities;
pub mod web_search;

pub use entities::{ToolCall, ToolDefinition, ToolParameter};
pub use web_search::{WEB_SEARCH, WebSearchArgs, web_search_definition};
