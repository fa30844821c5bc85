//! Search-native provider against a mock Perplexity API.

use httpmock::prelude::*;
use searchmind_application::{AnswerProvider, ProviderError, ProviderErrorKind};
use searchmind_domain::{Credential, ProviderKind, Query};
use searchmind_infrastructure::{PerplexitySettings, SearchNativeProvider};
use serde_json::json;

fn provider(server: &MockServer) -> SearchNativeProvider {
    SearchNativeProvider::new(
        reqwest::Client::new(),
        server.base_url(),
        PerplexitySettings::default(),
    )
}

fn key() -> Credential {
    Credential::new("pplx-test").unwrap()
}

#[tokio::test]
async fn test_citations_resolve_to_urls() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer pplx-test")
                .body_contains("\"search_recency_filter\":\"month\"")
                .body_contains("\"content\":\"who won the match?\"");
            then.status(200).json_body(json!({
                "choices": [{ "message": { "role": "assistant", "content": "Team A won [2], per reports [1][2]." } }],
                "citations": ["https://a.example", "https://b.example"]
            }));
        })
        .await;

    let answer = provider(&server)
        .answer(&Query::new("who won the match?").unwrap(), Some(&key()))
        .await
        .unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(answer.content(), "Team A won [2], per reports [1][2].");
    assert_eq!(
        answer.sources(),
        ["https://b.example".to_string(), "https://a.example".to_string()]
    );
}

#[tokio::test]
async fn test_markers_without_citations_use_placeholders() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({
                "choices": [{ "message": { "content": "Fact one [1]. Fact two [3]. Again [1]." } }]
            }));
        })
        .await;

    let answer = provider(&server)
        .answer(&Query::new("facts").unwrap(), Some(&key()))
        .await
        .unwrap();

    assert_eq!(
        answer.sources(),
        ["Source 1".to_string(), "Source 3".to_string()]
    );
}

#[tokio::test]
async fn test_no_credential_no_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200);
        })
        .await;

    let err = provider(&server)
        .answer(&Query::new("latest news").unwrap(), None)
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::MissingCredential(ProviderKind::SearchNative));
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_unauthorized_is_upstream() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401).body("invalid api key");
        })
        .await;

    let err = provider(&server)
        .answer(&Query::new("q").unwrap(), Some(&key()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(!err.to_string().contains("pplx-test"));
}

#[tokio::test]
async fn test_missing_message_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({ "choices": [] }));
        })
        .await;

    let err = provider(&server)
        .answer(&Query::new("q").unwrap(), Some(&key()))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ProviderErrorKind::MalformedResponse);
}
