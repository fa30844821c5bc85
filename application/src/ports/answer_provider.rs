//! Answer provider port
//!
//! Defines the interface every answer-generation strategy implements.

use async_trait::async_trait;
use searchmind_domain::{AnswerResult, Credential, ProviderKind, Query};
use std::sync::Arc;
use thiserror::Error;

/// Coarse classification of a [`ProviderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    MissingCredential,
    Upstream,
    MalformedResponse,
}

/// Errors that can occur while producing an answer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider needs a caller-supplied credential and none was given.
    #[error("Missing credential for {0} provider")]
    MissingCredential(ProviderKind),

    /// Transport failure or non-success status from the upstream API.
    #[error("Upstream error{}: {message}", status_suffix(.status))]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// The upstream answered, but not in a shape we can use.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl ProviderError {
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            Self::MissingCredential(_) => ProviderErrorKind::MissingCredential,
            Self::Upstream { .. } => ProviderErrorKind::Upstream,
            Self::MalformedResponse(_) => ProviderErrorKind::MalformedResponse,
        }
    }

    /// HTTP status of the failed call, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

/// A strategy that turns a query into an [`AnswerResult`].
///
/// Implementations live in the infrastructure layer. The credential is only
/// consulted by providers whose [`ProviderKind::requires_credential`] is true.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    async fn answer(
        &self,
        query: &Query,
        credential: Option<&Credential>,
    ) -> Result<AnswerResult, ProviderError>;
}

/// The closed set of providers, one per [`ProviderKind`].
#[derive(Clone)]
pub struct ProviderSet {
    pub direct: Arc<dyn AnswerProvider>,
    pub tool_calling: Arc<dyn AnswerProvider>,
    pub search_native: Arc<dyn AnswerProvider>,
}

impl ProviderSet {
    pub fn new(
        direct: Arc<dyn AnswerProvider>,
        tool_calling: Arc<dyn AnswerProvider>,
        search_native: Arc<dyn AnswerProvider>,
    ) -> Self {
        Self {
            direct,
            tool_calling,
            search_native,
        }
    }

    pub fn get(&self, kind: ProviderKind) -> Arc<dyn AnswerProvider> {
        match kind {
            ProviderKind::DirectAnswer => Arc::clone(&self.direct),
            ProviderKind::ToolCalling => Arc::clone(&self.tool_calling),
            ProviderKind::SearchNative => Arc::clone(&self.search_native),
        }
    }
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet")
            .field("direct", &self.direct.kind())
            .field("tool_calling", &self.tool_calling.kind())
            .field("search_native", &self.search_native.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(ProviderKind);

    #[async_trait]
    impl AnswerProvider for Fixed {
        fn kind(&self) -> ProviderKind {
            self.0
        }

        async fn answer(
            &self,
            _query: &Query,
            _credential: Option<&Credential>,
        ) -> Result<AnswerResult, ProviderError> {
            Ok(AnswerResult::uncited(self.0.as_str()))
        }
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::upstream(Some(503), "service unavailable");
        assert_eq!(
            err.to_string(),
            "Upstream error (HTTP 503): service unavailable"
        );

        let err = ProviderError::upstream(None, "connection refused");
        assert_eq!(err.to_string(), "Upstream error: connection refused");

        let err = ProviderError::MissingCredential(ProviderKind::SearchNative);
        assert_eq!(
            err.to_string(),
            "Missing credential for search-native provider"
        );
    }

    #[test]
    fn test_error_kind_and_status() {
        assert_eq!(
            ProviderError::upstream(Some(500), "x").kind(),
            ProviderErrorKind::Upstream
        );
        assert_eq!(ProviderError::upstream(Some(500), "x").status(), Some(500));
        assert_eq!(ProviderError::malformed("no text").status(), None);
        assert_eq!(
            ProviderError::malformed("no text").kind(),
            ProviderErrorKind::MalformedResponse
        );
    }

    #[tokio::test]
    async fn test_provider_set_routes_by_kind() {
        let set = ProviderSet::new(
            Arc::new(Fixed(ProviderKind::DirectAnswer)),
            Arc::new(Fixed(ProviderKind::ToolCalling)),
            Arc::new(Fixed(ProviderKind::SearchNative)),
        );
        let query = Query::new("anything").unwrap();

        for kind in [
            ProviderKind::DirectAnswer,
            ProviderKind::ToolCalling,
            ProviderKind::SearchNative,
        ] {
            let provider = set.get(kind);
            assert_eq!(provider.kind(), kind);
            let answer = provider.answer(&query, None).await.unwrap();
            assert_eq!(answer.content(), kind.as_str());
        }
    }
}
