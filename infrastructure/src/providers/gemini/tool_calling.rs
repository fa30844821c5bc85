//! Tool-calling provider: Gemini with a single `web_search` round-trip.
//!
//! ```text
//! round 1: question + functionDeclarations ──▶ text?          ─▶ answer, no sources
//!                                          └─▶ functionCall   ─▶ search
//! round 2: question + call + result (no tools) ──▶ text       ─▶ answer, result URLs
//! ```
//!
//! There is never a third round. A round-2 reply that asks for another
//! tool call instead of answering is a malformed response.

use super::client::GeminiClient;
use crate::tools::function_declaration;
use async_trait::async_trait;
use searchmind_application::{AnswerProvider, ProviderError, SearchTool};
use searchmind_domain::{
    AnswerResult, Conversation, Credential, PromptTemplate, ProviderKind, Query, WEB_SEARCH,
    WebSearchArgs, web_search_definition,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ToolCallingProvider {
    client: Arc<GeminiClient>,
    search: Arc<dyn SearchTool>,
    declarations: Vec<Value>,
}

impl ToolCallingProvider {
    pub fn new(client: Arc<GeminiClient>, search: Arc<dyn SearchTool>) -> Self {
        Self {
            client,
            search,
            declarations: vec![function_declaration(&web_search_definition())],
        }
    }

    fn instruction(query: &Query) -> String {
        format!(
            "{}\n\n{}",
            PromptTemplate::answer_query(query.as_str()),
            PromptTemplate::tool_guidance()
        )
    }
}

#[async_trait]
impl AnswerProvider for ToolCallingProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ToolCalling
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

        let mut conversation = Conversation::new(Self::instruction(query));
        let first = self
            .client
            .generate(key, &conversation, Some(&self.declarations))
            .await?;

        let Some(call) = first.find_tool_call(WEB_SEARCH) else {
            if first.has_text() {
                debug!("Model answered without searching");
                return Ok(AnswerResult::uncited(first.text_content()));
            }
            return Err(ProviderError::malformed(
                "Gemini returned neither text nor a web_search call",
            ));
        };

        let args = WebSearchArgs::from_call(call, query.as_str());
        info!(
            "Model requested web_search ({} results)",
            args.num_results
        );
        let outcome = self.search.search(&args.query, args.num_results).await;
        let sources = outcome.source_urls();
        let payload = serde_json::to_value(&outcome)
            .map_err(|e| ProviderError::malformed(format!("search outcome: {e}")))?;

        conversation.push_tool_exchange(call.clone(), payload);
        let second = self.client.generate(key, &conversation, None).await?;

        if !second.has_text() {
            return Err(ProviderError::malformed(
                "Gemini returned no answer after the web_search result",
            ));
        }

        Ok(AnswerResult::new(second.text_content(), sources))
    }
}
