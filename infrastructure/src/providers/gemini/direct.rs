//! Direct-answer provider: one Gemini call, no tools, no citations.

use super::client::GeminiClient;
use async_trait::async_trait;
use searchmind_application::{AnswerProvider, ProviderError};
use searchmind_domain::{AnswerResult, Conversation, Credential, PromptTemplate, ProviderKind, Query};
use std::sync::Arc;
use tracing::info;

pub struct DirectAnswerProvider {
    client: Arc<GeminiClient>,
}

impl DirectAnswerProvider {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnswerProvider for DirectAnswerProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::DirectAnswer
    }

    async fn answer(
        &self,
        query: &Query,
        _credential: Option<&Credential>,
    ) -> Result<AnswerResult, ProviderError> {
        let key = self
            .client
            .api_key()
            .ok_or(ProviderError::MissingCredential(self.kind()))?;

        let conversation = Conversation::new(PromptTemplate::answer_query(query.as_str()));
        let response = self.client.generate(key, &conversation, None).await?;

        if !response.has_text_block() {
            return Err(ProviderError::malformed("Gemini returned no text"));
        }

        info!("Direct answer from {}", self.client.model());
        Ok(AnswerResult::uncited(response.text_content()))
    }
}
