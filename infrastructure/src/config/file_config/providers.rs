//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// Gemini `generateContent` settings, shared by the direct-answer and
/// tool-calling providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Inline API key; prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash-exp".to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.8,
            max_output_tokens: 2048,
            timeout_secs: 60,
        }
    }
}

/// Perplexity chat completions settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePerplexityConfig {
    /// Environment variable name for the API key (default: "PERPLEXITY_API_KEY").
    pub api_key_env: String,
    /// Inline API key; prefer `api_key_env` or `--remember-key`.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    /// One of `hour`, `day`, `week`, `month`, `year`.
    pub search_recency_filter: String,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FilePerplexityConfig {
    fn default() -> Self {
        Self {
            api_key_env: "PERPLEXITY_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.perplexity.ai".to_string(),
            model: "llama-3.1-sonar-small-128k-online".to_string(),
            temperature: 0.2,
            top_p: 0.9,
            max_tokens: 2048,
            search_recency_filter: "month".to_string(),
            frequency_penalty: 1.0,
            presence_penalty: 0.0,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub gemini: FileGeminiConfig,
    pub perplexity: FilePerplexityConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_defaults() {
        let config = FileGeminiConfig::default();
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-2.5-flash-exp");
        assert_eq!(config.top_k, 40);
        assert_eq!(config.max_output_tokens, 2048);
    }

    #[test]
    fn test_perplexity_partial_override() {
        let toml_str = r#"
api_key_env = "MY_PPLX_KEY"
model = "sonar"
"#;
        let config: FilePerplexityConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key_env, "MY_PPLX_KEY");
        assert_eq!(config.model, "sonar");
        assert_eq!(config.search_recency_filter, "month");
        assert_eq!(config.frequency_penalty, 1.0);
    }
}
