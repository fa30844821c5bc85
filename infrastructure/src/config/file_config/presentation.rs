//! Presentation cadence from TOML (`[presentation]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePresentationConfig {
    /// Milliseconds between typing frames.
    pub tick_ms: u64,
    /// Milliseconds of loading state before the provider is called.
    pub thinking_delay_ms: u64,
    /// Fixed typing-cadence seed, for reproducible output.
    pub seed: Option<u64>,
}

impl Default for FilePresentationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            thinking_delay_ms: 800,
            seed: None,
        }
    }
}
