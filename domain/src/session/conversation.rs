//! Conversation context sent to the model.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// One turn of a single-query conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Turn {
    /// Text from the user side (the instruction plus the question).
    User { text: String },
    /// The model's request to run a tool, echoed back verbatim.
    ToolRequest { call: ToolCall },
    /// The tool's output, keyed by tool name.
    ToolResponse {
        name: String,
        payload: serde_json::Value,
    },
}

/// The ordered turns of one query. Starts with a single user turn and is
/// extended by at most one request/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new(user_text: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::User {
                text: user_text.into(),
            }],
        }
    }

    /// Append a tool request and its result.
    pub fn push_tool_exchange(&mut self, call: ToolCall, payload: serde_json::Value) {
        let name = call.tool_name.clone();
        self.turns.push(Turn::ToolRequest { call });
        self.turns.push(Turn::ToolResponse { name, payload });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn has_tool_exchange(&self) -> bool {
        self.turns
            .iter()
            .any(|t| matches!(t, Turn::ToolResponse { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_exchange_appends_two_turns() {
        let mut conversation = Conversation::new("What happened today?");
        assert!(!conversation.has_tool_exchange());

        conversation.push_tool_exchange(
            ToolCall::new("web_search").with_arg("query", "today"),
            json!({"results": []}),
        );

        assert_eq!(conversation.turns().len(), 3);
        assert!(conversation.has_tool_exchange());
        match &conversation.turns()[2] {
            Turn::ToolResponse { name, payload } => {
                assert_eq!(name, "web_search");
                assert_eq!(payload["results"], json!([]));
            }
            other => panic!("unexpected turn: {:?}", other),
        }
    }
}
