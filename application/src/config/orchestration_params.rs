//! Orchestration parameters for the facade and presenter.
//!
//! These are application-layer concerns (how a query is sequenced and
//! replayed), not domain policy.

use searchmind_domain::ProviderKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for [`AnswerOrchestrator`](crate::use_cases::orchestrate_answer::AnswerOrchestrator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationParams {
    /// Whether the tool-calling provider may be selected.
    pub tool_calling_enabled: bool,
    /// Bypass the selector and always use this provider.
    pub forced_provider: Option<ProviderKind>,
    /// Interval between presentation frames.
    pub tick: Duration,
    /// Pause before the provider is called, shown as a loading state.
    pub thinking_delay: Duration,
    /// Fixed seed for the typing cadence. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for OrchestrationParams {
    fn default() -> Self {
        Self {
            tool_calling_enabled: true,
            forced_provider: None,
            tick: Duration::from_millis(30),
            thinking_delay: Duration::from_millis(800),
            seed: None,
        }
    }
}

impl OrchestrationParams {
    // ==================== Builder Methods ====================

    pub fn with_tool_calling(mut self, enabled: bool) -> Self {
        self.tool_calling_enabled = enabled;
        self
    }

    pub fn with_forced_provider(mut self, kind: ProviderKind) -> Self {
        self.forced_provider = Some(kind);
        self
    }

    /// A zero tick is ignored; the presenter needs a non-zero interval.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        if !tick.is_zero() {
            self.tick = tick;
        }
        self
    }

    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
