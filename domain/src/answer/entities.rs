//! Answer entities

use serde::{Deserialize, Serialize};

/// A synthesized answer, normalized across providers.
///
/// Produced once per successful orchestration and never mutated afterwards;
/// the fields are private so the only way to a different answer is a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    content: String,
    sources: Vec<String>,
    is_complete: bool,
}

impl AnswerResult {
    /// A complete answer with citations.
    pub fn new(content: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            content: content.into(),
            sources,
            is_complete: true,
        }
    }

    /// A complete answer without citations.
    pub fn uncited(content: impl Into<String>) -> Self {
        Self::new(content, Vec::new())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Number of characters (not bytes) in the content.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}
