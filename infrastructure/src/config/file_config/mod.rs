//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod presentation;
mod providers;
mod search;

pub use output::FileOutputConfig;
pub use presentation::FilePresentationConfig;
pub use providers::{FileGeminiConfig, FilePerplexityConfig, FileProvidersConfig};
pub use search::FileSearchConfig;

use searchmind_domain::search::{MAX_NUM_RESULTS, MIN_NUM_RESULTS};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Upstream API settings
    pub providers: FileProvidersConfig,
    /// Web search backend used by the tool-calling provider
    pub search: FileSearchConfig,
    /// Typing cadence
    pub presentation: FilePresentationConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// A problem found in an otherwise loadable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending key, e.g. `search.default_num_results`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues are warnings: every value still has a usable interpretation
    /// (out-of-range counts are clamped, empty URLs fail at request time).
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let n = self.search.default_num_results;
        if !(MIN_NUM_RESULTS..=MAX_NUM_RESULTS).contains(&n) {
            issues.push(ConfigIssue::new(
                "search.default_num_results",
                format!("{n} is outside {MIN_NUM_RESULTS}..={MAX_NUM_RESULTS} and will be clamped"),
            ));
        }

        for (field, url) in [
            ("providers.gemini.base_url", &self.providers.gemini.base_url),
            ("providers.perplexity.base_url", &self.providers.perplexity.base_url),
            ("search.base_url", &self.search.base_url),
        ] {
            if url.trim().is_empty() {
                issues.push(ConfigIssue::new(field, "base URL is empty"));
            }
        }

        if self.presentation.tick_ms == 0 {
            issues.push(ConfigIssue::new(
                "presentation.tick_ms",
                "0 is not a valid interval, the default of 30 ms will be used",
            ));
        }

        if self.providers.gemini.api_key.is_some() || self.providers.perplexity.api_key.is_some() {
            issues.push(ConfigIssue::new(
                "providers",
                "api_key is set in a config file; prefer the api_key_env variable",
            ));
        }

        issues
    }
}
