//! Output format value object

use serde::{Deserialize, Serialize};

/// How answers are rendered
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Simulated typing, frame by frame (default)
    #[default]
    Stream,
    /// Only the final answer and its sources
    Plain,
    /// Every frame as one JSON line
    Json,
}
