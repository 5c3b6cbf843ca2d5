//! Summary extractor tests: live source via wiremock, fixture source via disk.

use std::path::PathBuf;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_digest::config::Config;
use arxiv_digest::error::SummaryError;
use arxiv_digest::summary::{FixtureSource, OpenAiSource, SummaryExtractor};

fn completion_body(arguments: &serde_json::Value) -> serde_json::Value {
    json!({
        "choices": [
            {
                "message": {
                    "function_call": {
                        "name": "output_format",
                        "arguments": arguments.to_string()
                    }
                }
            }
        ]
    })
}

fn live_extractor(mock_server: &MockServer) -> SummaryExtractor {
    let mut config = Config::for_testing(&mock_server.uri());
    config.openai_api_key = Some("test-key".to_string());
    let model = config.model.clone();
    SummaryExtractor::new(Box::new(OpenAiSource::new(&config).unwrap()), model)
}

// =============================================================================
// Live Source
// =============================================================================

#[tokio::test]
async fn test_live_source_decodes_four_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&json!({
            "short_summary": "一言",
            "problem": "課題",
            "how": "手法",
            "result": "結果"
        }))))
        .mount(&mock_server)
        .await;

    let extractor = live_extractor(&mock_server);
    let summary = extractor.summarize("An abstract.").await.unwrap();

    assert_eq!(summary.short_summary, "一言");
    assert_eq!(summary.problem, "課題");
    assert_eq!(summary.how, "手法");
    assert_eq!(summary.result, "結果");
}

#[tokio::test]
async fn test_live_source_sends_abstract_and_schema() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{"role": "user", "content": "The abstract under test."}],
            "functions": [{"name": "output_format"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&json!({
            "short_summary": "a", "problem": "b", "how": "c", "result": "d"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let extractor = live_extractor(&mock_server);
    extractor.summarize("The abstract under test.").await.unwrap();
}

#[tokio::test]
async fn test_missing_result_field_is_schema_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&json!({
            "short_summary": "一言",
            "problem": "課題",
            "how": "手法"
        }))))
        .mount(&mock_server)
        .await;

    let extractor = live_extractor(&mock_server);
    let err = extractor.summarize("An abstract.").await.unwrap_err();

    assert!(!err.is_recoverable());
    assert!(matches!(err, SummaryError::MissingField { field: "result" }));
}

#[tokio::test]
async fn test_non_success_status_is_recoverable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&mock_server)
        .await;

    let extractor = live_extractor(&mock_server);
    let err = extractor.summarize("An abstract.").await.unwrap_err();

    assert!(err.is_recoverable());
    assert!(matches!(err, SummaryError::Client(_)));
}

#[tokio::test]
async fn test_response_without_function_call_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "plain text"}}]})),
        )
        .mount(&mock_server)
        .await;

    let extractor = live_extractor(&mock_server);
    let err = extractor.summarize("An abstract.").await.unwrap_err();

    assert!(!err.is_recoverable());
    assert!(matches!(err, SummaryError::MalformedResponse(_)));
}

// =============================================================================
// Fixture Source
// =============================================================================

#[tokio::test]
async fn test_fixture_source_replays_captured_response() {
    let source = FixtureSource::new(PathBuf::from("tests/fixtures/summary_response.json"));
    let extractor = SummaryExtractor::new(Box::new(source), "unused-model");

    let summary = extractor.summarize("An abstract.").await.unwrap();
    assert_eq!(summary.short_summary, "一言の要約");
    assert_eq!(summary.problem, "既存研究の課題");
    assert_eq!(summary.how, "提案手法");
    assert_eq!(summary.result, "得られた結果");
}

#[tokio::test]
async fn test_missing_fixture_file_is_reported() {
    let source = FixtureSource::new(PathBuf::from("tests/fixtures/no-such-file.json"));
    let extractor = SummaryExtractor::new(Box::new(source), "unused-model");

    let err = extractor.summarize("An abstract.").await.unwrap_err();
    assert!(!err.is_recoverable());
    assert!(matches!(err, SummaryError::Fixture { .. }));
}
