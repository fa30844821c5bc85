//! Infrastructure layer for searchmind
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod providers;
pub mod search;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig};
pub use credentials::{
    EnvCredentialStore, FileCredentialStore, LayeredCredentialStore, MemoryCredentialStore,
};
pub use providers::{
    build_provider_set,
    gemini::{DirectAnswerProvider, GeminiClient, GenerationConfig, ToolCallingProvider},
    perplexity::{PerplexitySettings, SearchNativeProvider},
};
pub use search::DuckDuckGoSearch;
pub use tools::function_declaration;
