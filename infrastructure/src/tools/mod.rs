//! Tool declaration plumbing
//!
//! Serializes domain [`ToolDefinition`](searchmind_domain::ToolDefinition)s
//! into provider function-calling schemas.

pub mod schema;

pub use schema::function_declaration;
