//! Wire types for the Gemini `generateContent` API and their conversion to
//! and from domain session types.

use searchmind_domain::{ContentBlock, Conversation, LlmResponse, ToolCall, Turn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GeminiTool>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiTool {
    pub function_declarations: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.8,
            max_output_tokens: 2048,
        }
    }
}

// ─── Shared ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FunctionResponse {
    pub name: String,
    pub response: Value,
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

// ─── Domain → Gemini ─────────────────────────────────────────────

fn text_part(text: &str) -> GeminiPart {
    GeminiPart {
        text: Some(text.to_string()),
        ..Default::default()
    }
}

/// Convert conversation turns to `contents`.
///
/// The tool request is echoed back as a `model` turn and the tool output
/// follows as a `user` turn carrying a `functionResponse`.
pub(crate) fn convert_conversation(conversation: &Conversation) -> Vec<GeminiContent> {
    conversation
        .turns()
        .iter()
        .map(|turn| match turn {
            Turn::User { text } => GeminiContent {
                role: Some("user".to_string()),
                parts: vec![text_part(text)],
            },
            Turn::ToolRequest { call } => GeminiContent {
                role: Some("model".to_string()),
                parts: vec![GeminiPart {
                    function_call: Some(FunctionCall {
                        name: call.tool_name.clone(),
                        args: call.arguments_json(),
                    }),
                    ..Default::default()
                }],
            },
            Turn::ToolResponse { name, payload } => GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    function_response: Some(FunctionResponse {
                        name: name.clone(),
                        response: payload.clone(),
                    }),
                    ..Default::default()
                }],
            },
        })
        .collect()
}

// ─── Gemini → Domain ─────────────────────────────────────────────

/// Convert a single part to a content block.
///
/// Returns `None` for parts that are neither text nor a function call.
fn convert_part(part: &GeminiPart) -> Option<ContentBlock> {
    if let Some(call) = &part.function_call {
        return Some(ContentBlock::tool_use(ToolCall::from_json(&call.name, &call.args)));
    }
    part.text.as_deref().map(ContentBlock::text)
}

/// Convert the first candidate to an [`LlmResponse`].
///
/// Returns `None` when there is no candidate or it carries no content.
pub(crate) fn convert_response(response: &GenerateContentResponse) -> Option<LlmResponse> {
    let content = response.candidates.first()?.content.as_ref()?;
    Some(LlmResponse {
        content: content.parts.iter().filter_map(convert_part).collect(),
        model: response.model_version.clone(),
    })
}
