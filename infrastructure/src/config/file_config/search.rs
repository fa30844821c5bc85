//! Web search configuration from TOML (`[search]` section)

use searchmind_domain::search::DEFAULT_NUM_RESULTS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Allow the tool-calling provider. When false, queries without a
    /// search-native key go to the direct-answer provider.
    pub enabled: bool,
    /// DuckDuckGo Instant Answer API endpoint.
    pub base_url: String,
    /// Result count used when the model does not ask for one.
    pub default_num_results: u8,
    pub timeout_secs: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.duckduckgo.com".to_string(),
            default_num_results: DEFAULT_NUM_RESULTS,
            timeout_secs: 30,
        }
    }
}
