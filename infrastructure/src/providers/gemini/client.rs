//! HTTP client for the Gemini `generateContent` endpoint.

use super::types::{
    GenerateContentRequest, GenerateContentResponse, GeminiTool, GenerationConfig,
    convert_conversation, convert_response,
};
use crate::providers::{error_body_excerpt, transport_error};
use searchmind_application::ProviderError;
use searchmind_domain::{Conversation, Credential, LlmResponse};
use serde_json::Value;
use tracing::debug;

/// One `generateContent` call per [`generate`](GeminiClient::generate).
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    generation: GenerationConfig,
    api_key: Option<Credential>,
}

impl GeminiClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<Credential>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            generation: GenerationConfig::default(),
            api_key,
        }
    }

    pub fn with_generation_config(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// The deployment key, if one was configured.
    pub fn api_key(&self) -> Option<&Credential> {
        self.api_key.as_ref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send the conversation, optionally declaring functions.
    ///
    /// `MalformedResponse` if the body does not parse or has no candidate
    /// content; an empty-but-present candidate is returned as is.
    pub async fn generate(
        &self,
        key: &Credential,
        conversation: &Conversation,
        function_declarations: Option<&[Value]>,
    ) -> Result<LlmResponse, ProviderError> {
        let request = GenerateContentRequest {
            contents: convert_conversation(conversation),
            tools: function_declarations.map(|decls| {
                vec![GeminiTool {
                    function_declarations: decls.to_vec(),
                }]
            }),
            generation_config: self.generation.clone(),
        };

        debug!(
            "Gemini request: model={}, turns={}, tools={}",
            self.model,
            request.contents.len(),
            request.tools.is_some()
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", key.expose())])
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::upstream(
                Some(status.as_u16()),
                format!("Gemini API error: {}{}", status, error_body_excerpt(&body)),
            ));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(format!("Gemini response: {}", e.without_url())))?;

        convert_response(&body)
            .ok_or_else(|| ProviderError::malformed("Invalid response from Gemini API"))
    }
}
