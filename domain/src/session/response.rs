//! LLM response types for function-calling support.
//!
//! A model reply is a list of content blocks mixing text and tool requests.
//! The tool-calling adapter inspects the blocks to decide whether a second
//! round is needed:
//!
//! ```text
//! round 1 ─▶ LlmResponse ─┬─ has_tool_calls() ─▶ run tool ─▶ round 2
//!                         └─ text_content()   ─▶ answer
//! ```

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// A single block of content within an LLM response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A text content block from the model.
    Text { text: String },

    /// A structured request to invoke a tool.
    ToolUse { call: ToolCall },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn tool_use(call: ToolCall) -> Self {
        ContentBlock::ToolUse { call }
    }

    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Returns the call if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<&ToolCall> {
        match self {
            ContentBlock::ToolUse { call } => Some(call),
            _ => None,
        }
    }
}

/// A structured response from an LLM, supporting both text and tool use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Content blocks in the response (text and/or tool use).
    pub content: Vec<ContentBlock>,
    /// Model identifier (if returned by the API).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Whether any text block carries non-whitespace text.
    pub fn has_text(&self) -> bool {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .any(|t| !t.trim().is_empty())
    }

    /// Whether the reply has a text field at all, even an empty one.
    pub fn has_text_block(&self) -> bool {
        self.content.iter().any(|b| b.as_text().is_some())
    }

    /// All tool calls, in the order the model listed them.
    pub fn tool_calls(&self) -> Vec<&ToolCall> {
        self.content.iter().filter_map(|b| b.as_tool_use()).collect()
    }

    /// Returns `true` if the response contains any tool use requests.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }

    /// The first call to the named tool, if any.
    pub fn find_tool_call(&self, name: &str) -> Option<&ToolCall> {
        self.content
            .iter()
            .filter_map(|b| b.as_tool_use())
            .find(|call| call.tool_name == name)
    }
}
