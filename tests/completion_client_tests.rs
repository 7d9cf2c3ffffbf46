use chat_proxy::config::{ApiKey, Config};
use chat_proxy::error::AppError;
use chat_proxy::services::completion_client::CompletionClient;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn configured_model_and_token_cap_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-other"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({ "model": "gpt-4o", "max_tokens": 64 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Claro." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 40, "completion_tokens": 2, "total_tokens": 42 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::new(ApiKey::new("sk-other"), format!("{}/v1", server.uri()));
    config.model = "gpt-4o".to_string();
    config.max_tokens = 64;

    let client = CompletionClient::new(config);
    assert_eq!(client.complete("¿Tienen soporte?").await.unwrap(), "Claro.");
}

#[tokio::test]
async fn null_content_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })))
        .mount(&server)
        .await;

    let client = CompletionClient::new(Config::new(ApiKey::new("k"), server.uri()));
    let result = client.complete("hola").await;
    assert!(matches!(result, Err(AppError::UpstreamInvalidResponse)));
}

#[tokio::test]
async fn transport_failure_is_internal() {
    let client = CompletionClient::new(Config::new(ApiKey::new("sk-leak"), "http://127.0.0.1:1"));
    match client.complete("hola").await {
        Err(AppError::Internal(detail)) => assert!(!detail.contains("sk-leak")),
        other => panic!("expected internal error, got {other:?}"),
    }
}
