//! Presentation frames

use crate::answer::AnswerResult;
use serde::{Deserialize, Serialize};

/// The single user-visible message for every failed orchestration.
pub const APOLOGY_MESSAGE: &str =
    "Sorry, there was an error processing your search. Please check your connection and try again.";

/// One snapshot of the answer as shown to the user.
///
/// `sources` is only populated on the final frame (`is_streaming == false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationFrame {
    pub visible_content: String,
    pub sources: Vec<String>,
    pub is_streaming: bool,
}

impl PresentationFrame {
    /// The empty loading frame shown while the answer is being fetched.
    pub fn pending() -> Self {
        Self::partial("")
    }

    /// An intermediate frame showing a prefix of the content.
    pub fn partial(visible_content: impl Into<String>) -> Self {
        Self {
            visible_content: visible_content.into(),
            sources: Vec::new(),
            is_streaming: true,
        }
    }

    /// The terminal frame carrying the whole answer.
    pub fn complete(answer: &AnswerResult) -> Self {
        Self {
            visible_content: answer.content().to_string(),
            sources: answer.sources().to_vec(),
            is_streaming: false,
        }
    }

    /// The terminal frame shown when the orchestration failed.
    pub fn apology() -> Self {
        Self {
            visible_content: APOLOGY_MESSAGE.to_string(),
            sources: Vec::new(),
            is_streaming: false,
        }
    }

    pub fn is_final(&self) -> bool {
        !self.is_streaming
    }

    /// Whether this is the failure frame built by [`apology`](Self::apology).
    ///
    /// Frames carry no error flag, so an answer whose text is exactly the
    /// apology and which has no sources also matches.
    pub fn is_apology(&self) -> bool {
        self.is_final() && self.sources.is_empty() && self.visible_content == APOLOGY_MESSAGE
    }
}
