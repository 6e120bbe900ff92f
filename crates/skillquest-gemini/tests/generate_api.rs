//! Integration tests for the Gemini client against a local mock server.
//!
//! The client is pointed at httpmock via `with_base_url`; no real network
//! or credential is needed.

use httpmock::prelude::*;
use serde_json::json;
use skillquest_core::{CourseRequest, GenerationRequest, GenerationResult};
use skillquest_gemini::{GeminiClient, GenerateError, Generator};

const MODEL: &str = "gemini-2.5-flash";

fn request() -> GenerationRequest {
    skillquest_prompts::build_request(&CourseRequest {
        domain: "Développement Web".into(),
        skill: "React.js".into(),
        subject: "Introduction aux Hooks et au state".into(),
        keywords: "useState, useEffect".into(),
    })
}

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_base_url(&server.base_url(), "test-key", MODEL).unwrap()
}

#[tokio::test]
async fn returns_candidate_text_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v1beta/models/{MODEL}:generateContent"))
            .header("x-goog-api-key", "test-key")
            .body_contains("React.js : Introduction aux Hooks et au state");
        then.status(200).json_body(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "# Title\n..." } ] } }
            ]
        }));
    });

    let text = client(&server).try_generate(&request()).await.unwrap();

    assert_eq!(text, "# Title\n...");
    mock.assert();
}

#[tokio::test]
async fn sends_both_instructions() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v1beta/models/{MODEL}:generateContent"))
            // system instruction
            .body_contains("uniquement du Markdown valide")
            // user instruction, including the keywords clause
            .body_contains("useState, useEffect");
        then.status(200).json_body(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "# ok" } ] } }
            ]
        }));
    });

    client(&server).try_generate(&request()).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn endpoint_error_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(429).json_body(json!({
            "error": { "message": "rate limited", "status": "RESOURCE_EXHAUSTED" }
        }));
    });

    let client = client(&server);
    let err = client.try_generate(&request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::Endpoint(_)));
    assert!(err.to_string().contains("rate limited"));
}

#[tokio::test]
async fn generate_resolves_failure_with_underlying_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(429)
            .json_body(json!({ "error": { "message": "rate limited" } }));
    });

    let result = client(&server).generate(&request()).await;

    match result {
        GenerationResult::Failure(message) => assert!(message.contains("rate limited")),
        GenerationResult::Markdown(text) => panic!("expected failure, got markdown: {text}"),
    }
}

#[tokio::test]
async fn generate_resolves_success_to_markdown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "# Plan" } ] } }
            ]
        }));
    });

    let result = client(&server).generate(&request()).await;
    assert_eq!(result, GenerationResult::Markdown("# Plan".into()));
}

#[tokio::test]
async fn unreachable_endpoint_still_resolves() {
    // Nothing listens on port 1; generate must fold the transport error
    // into a Failure rather than propagate it.
    let client = GeminiClient::with_base_url("http://127.0.0.1:1", "test-key", MODEL).unwrap();

    let result = client.generate(&request()).await;
    assert!(result.is_failure());
}

#[tokio::test]
async fn missing_candidates_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({ "candidates": [] }));
    });

    let err = client(&server).try_generate(&request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::Decode(_)));
}

#[test]
fn blocking_client_generates_through_the_trait() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "# Plan" } ] } }
            ]
        }));
    });

    let client = skillquest_gemini::BlockingGeminiClient::with_base_url(
        &server.base_url(),
        "test-key",
        MODEL,
    )
    .unwrap();
    let generator: &dyn Generator = &client;

    assert_eq!(
        generator.generate(&request()),
        GenerationResult::Markdown("# Plan".into())
    );
}
