//! Search-native provider backed by Perplexity chat completions.
//!
//! The caller must supply a credential; without one the provider fails
//! with `MissingCredential` before any request is made. Sources come from
//! the `[n]` markers in the answer, resolved against the response's
//! `citations` array when present and labelled `Source n` otherwise.

use crate::providers::{error_body_excerpt, transport_error};
use async_trait::async_trait;
use searchmind_application::{AnswerProvider, ProviderError};
use searchmind_domain::{
    AnswerResult, Credential, PromptTemplate, ProviderKind, Query, resolve_citations,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Sampling and search settings sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct PerplexitySettings {
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub search_recency_filter: String,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for PerplexitySettings {
    fn default() -> Self {
        Self {
            model: "llama-3.1-sonar-small-128k-online".to_string(),
            temperature: 0.2,
            top_p: 0.9,
            max_tokens: 2048,
            search_recency_filter: "month".to_string(),
            frequency_penalty: 1.0,
            presence_penalty: 0.0,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
    return_images: bool,
    return_related_questions: bool,
    search_recency_filter: &'a str,
    frequency_penalty: f64,
    presence_penalty: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    citations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

pub struct SearchNativeProvider {
    http: reqwest::Client,
    base_url: String,
    settings: PerplexitySettings,
}

impl SearchNativeProvider {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, settings: PerplexitySettings) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            settings,
        }
    }

    fn request<'a>(&'a self, query: &'a Query) -> ChatRequest<'a> {
        let s = &self.settings;
        ChatRequest {
            model: &s.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: PromptTemplate::search_native_system(),
                },
                ChatMessage {
                    role: "user",
                    content: query.as_str(),
                },
            ],
            temperature: s.temperature,
            top_p: s.top_p,
            max_tokens: s.max_tokens,
            return_images: false,
            return_related_questions: false,
            search_recency_filter: &s.search_recency_filter,
            frequency_penalty: s.frequency_penalty,
            presence_penalty: s.presence_penalty,
        }
    }
}

#[async_trait]
impl AnswerProvider for SearchNativeProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SearchNative
    }

    async fn answer(
        &self,
        query: &Query,
        credential: Option<&Credential>,
    ) -> Result<AnswerResult, ProviderError> {
        let credential = credential.ok_or(ProviderError::MissingCredential(self.kind()))?;

        debug!("Perplexity request: model={}", self.settings.model);
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(credential.expose())
            .json(&self.request(query))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::upstream(
                Some(status.as_u16()),
                format!("Perplexity API error: {}{}", status, error_body_excerpt(&body)),
            ));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            ProviderError::malformed(format!("Perplexity response: {}", e.without_url()))
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| ProviderError::malformed("Invalid response from Perplexity API"))?;

        let sources = resolve_citations(&content, &body.citations);
        info!(
            "Search-native answer with {} sources ({} citation URLs)",
            sources.len(),
            body.citations.len()
        );
        Ok(AnswerResult::new(content, sources))
    }
}
