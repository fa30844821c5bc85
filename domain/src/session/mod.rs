//! LLM session domain.
//!
//! - [`response::LlmResponse`]: a model reply: text and/or tool requests
//! - [`conversation::Conversation`]: the turns sent to the model, grown by
//!   one tool round-trip at most

pub mod conversation;
pub mod response;

pub use conversation::{Conversation, Turn};
pub use response::{ContentBlock, LlmResponse};
