//! Provider kinds

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The answer-generation strategies this client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Plain LLM call, no citations.
    DirectAnswer,
    /// LLM call with one `web_search` tool round-trip.
    ToolCalling,
    /// Search-augmented chat completion API.
    SearchNative,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::DirectAnswer => "direct-answer",
            ProviderKind::ToolCalling => "tool-calling",
            ProviderKind::SearchNative => "search-native",
        }
    }

    /// Whether this provider refuses to run without a caller credential.
    pub fn requires_credential(&self) -> bool {
        matches!(self, ProviderKind::SearchNative)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct-answer" | "direct" => Ok(ProviderKind::DirectAnswer),
            "tool-calling" | "tools" => Ok(ProviderKind::ToolCalling),
            "search-native" | "native" => Ok(ProviderKind::SearchNative),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}
