//! Prompt domain
//!
//! Fixed instructions sent to each provider.

mod template;

pub use template::PromptTemplate;
