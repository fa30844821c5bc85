//! Search tool port
//!
//! The web search the tool-calling provider runs on the model's behalf.

use async_trait::async_trait;
use searchmind_domain::SearchOutcome;

/// Executes a web search.
///
/// Never fails: an unreachable or misbehaving backend yields an outcome with
/// no results and `error` set, see [`SearchOutcome::unavailable`].
#[async_trait]
pub trait SearchTool: Send + Sync {
    /// `num_results` is already clamped to `1..=10` by the caller.
    async fn search(&self, query: &str, num_results: u8) -> SearchOutcome;
}
