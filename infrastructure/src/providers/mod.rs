//! Answer providers
//!
//! HTTP adapters implementing
//! [`AnswerProvider`](searchmind_application::AnswerProvider), one per
//! [`ProviderKind`](searchmind_domain::ProviderKind), and the wiring that
//! builds a [`ProviderSet`] from configuration.

pub mod gemini;
pub mod perplexity;

use crate::config::FileConfig;
use crate::search::DuckDuckGoSearch;
use gemini::{DirectAnswerProvider, GeminiClient, GenerationConfig, ToolCallingProvider};
use perplexity::{PerplexitySettings, SearchNativeProvider};
use searchmind_application::{ProviderError, ProviderSet, SearchTool};
use searchmind_domain::Credential;
use std::sync::Arc;
use std::time::Duration;

/// Longest upstream error body kept in a [`ProviderError`] message.
const ERROR_BODY_LIMIT: usize = 200;

/// Map a reqwest transport failure, dropping the URL (it may carry a key).
pub(crate) fn transport_error(e: reqwest::Error) -> ProviderError {
    let status = e.status().map(|s| s.as_u16());
    ProviderError::upstream(status, e.without_url().to_string())
}

/// `" - <first 200 chars>"`, or nothing for an empty body.
pub(crate) fn error_body_excerpt(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }
    let excerpt: String = body.chars().take(ERROR_BODY_LIMIT).collect();
    format!(" - {excerpt}")
}

fn http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("SearchMind/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Build the three providers from configuration.
///
/// `gemini_key` is the deployment key for both Gemini providers; without
/// it they fail with `MissingCredential` when used.
pub fn build_provider_set(
    config: &FileConfig,
    gemini_key: Option<Credential>,
) -> Result<ProviderSet, reqwest::Error> {
    let gemini = &config.providers.gemini;
    let client = Arc::new(
        GeminiClient::new(
            http_client(gemini.timeout_secs)?,
            &gemini.base_url,
            &gemini.model,
            gemini_key,
        )
        .with_generation_config(GenerationConfig {
            temperature: gemini.temperature,
            top_k: gemini.top_k,
            top_p: gemini.top_p,
            max_output_tokens: gemini.max_output_tokens,
        }),
    );

    let search: Arc<dyn SearchTool> = Arc::new(DuckDuckGoSearch::new(
        &config.search.base_url,
        Duration::from_secs(config.search.timeout_secs),
    )?);

    let pplx = &config.providers.perplexity;
    let search_native = SearchNativeProvider::new(
        http_client(pplx.timeout_secs)?,
        &pplx.base_url,
        PerplexitySettings {
            model: pplx.model.clone(),
            temperature: pplx.temperature,
            top_p: pplx.top_p,
            max_tokens: pplx.max_tokens,
            search_recency_filter: pplx.search_recency_filter.clone(),
            frequency_penalty: pplx.frequency_penalty,
            presence_penalty: pplx.presence_penalty,
        },
    );

    Ok(ProviderSet::new(
        Arc::new(DirectAnswerProvider::new(Arc::clone(&client))),
        Arc::new(ToolCallingProvider::new(client, search)),
        Arc::new(search_native),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchmind_domain::ProviderKind;

    #[test]
    fn test_error_body_excerpt() {
        assert_eq!(error_body_excerpt("  "), "");
        assert_eq!(error_body_excerpt("quota exceeded"), " - quota exceeded");
        assert_eq!(error_body_excerpt(&"é".repeat(500)).chars().count(), 3 + ERROR_BODY_LIMIT);
    }

    #[test]
    fn test_build_provider_set_kinds() {
        let set = build_provider_set(&FileConfig::default(), None).unwrap();
        assert_eq!(set.direct.kind(), ProviderKind::DirectAnswer);
        assert_eq!(set.tool_calling.kind(), ProviderKind::ToolCalling);
        assert_eq!(set.search_native.kind(), ProviderKind::SearchNative);
    }
}
