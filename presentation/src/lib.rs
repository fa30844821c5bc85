//! Presentation layer for searchmind
//!
//! This crate contains CLI definitions, frame sinks that render answers
//! to the terminal, progress indicators, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatCommand, SearchRepl};
pub use cli::commands::{Cli, OutputFormat, ProviderArg};
pub use cli::example_queries::{EXAMPLE_QUERIES, format_examples};
pub use output::console::{ConsoleFrameSink, RenderMode, format_sources};
pub use output::json::JsonFrameSink;
pub use output::set_color_enabled;
pub use progress::ThinkingSpinner;
