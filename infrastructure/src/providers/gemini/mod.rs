//! Gemini-backed providers
//!
//! Both the direct-answer and the tool-calling provider talk to the same
//! `generateContent` endpoint through a shared [`GeminiClient`].

mod client;
mod direct;
mod tool_calling;
mod types;

pub use client::GeminiClient;
pub use direct::DirectAnswerProvider;
pub use tool_calling::ToolCallingProvider;
pub use types::GenerationConfig;
