use mockito::{Matcher, Server};
use serde_json::json;

use super::{decode_reply, Ollama};
use crate::chat::{ChatMessage, ChatOutcome, ModelClient, FALLBACK_REPLY};

const MODEL: &str = "deepseek-r1:1.5b";

fn prompt() -> Vec<ChatMessage> {
    vec![ChatMessage::user().content("Rate this answer").build()]
}

#[tokio::test]
async fn assistant_reply_returns_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::Json(json!({
            "model": MODEL,
            "messages": [{"role": "user", "content": "Rate this answer"}],
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"model":"deepseek-r1:1.5b","message":{"role":"assistant","content":"8/10 - mostly right"},"done":true}"#,
        )
        .create_async()
        .await;

    let client = Ollama::new(server.url(), None).unwrap();
    let outcome = client.evaluate(MODEL, &prompt()).await;

    mock.assert_async().await;
    assert_eq!(
        outcome,
        ChatOutcome::AssistantReply("8/10 - mostly right".to_string())
    );
}

#[tokio::test]
async fn non_assistant_role_yields_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body(r#"{"message":{"role":"user","content":"echo"}}"#)
        .create_async()
        .await;

    let client = Ollama::new(server.url(), None).unwrap();
    let outcome = client.evaluate(MODEL, &prompt()).await;

    assert_eq!(outcome, ChatOutcome::Unrecognized);
    assert_eq!(outcome.report_text(), FALLBACK_REPLY);
}

#[tokio::test]
async fn server_error_status_is_reported_inline() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(500)
        .with_body("model not loaded")
        .create_async()
        .await;

    let client = Ollama::new(server.url(), None).unwrap();
    let outcome = client.evaluate(MODEL, &prompt()).await;

    match outcome {
        ChatOutcome::TransportError(detail) => assert!(detail.contains("500"), "{detail}"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_reported_inline() {
    let client = Ollama::new("http://127.0.0.1:1", Some(5)).unwrap();
    let outcome = client.evaluate(MODEL, &prompt()).await;

    assert!(matches!(outcome, ChatOutcome::TransportError(ref d) if !d.is_empty()));
    assert!(outcome
        .report_text()
        .starts_with("Error communicating with Ollama: "));
}

#[test]
fn chat_url_tolerates_trailing_slash() {
    let client = Ollama::new("http://localhost:11434/", None).unwrap();
    assert_eq!(client.chat_url(), "http://localhost:11434/api/chat");
}

#[test]
fn decode_reply_rejects_missing_message() {
    let outcome = decode_reply(r#"{"error":"model 'x' not found"}"#).unwrap();
    assert_eq!(outcome, ChatOutcome::Unrecognized);
}

#[test]
fn decode_reply_rejects_missing_content() {
    let outcome = decode_reply(r#"{"message":{"role":"assistant"}}"#).unwrap();
    assert_eq!(outcome, ChatOutcome::Unrecognized);
}

#[test]
fn decode_reply_fails_on_non_json_body() {
    assert!(decode_reply("<html>gateway</html>").is_err());
}
