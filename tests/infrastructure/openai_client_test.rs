use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use speakwell::application::ports::{ChatMessage, CompletionRequest, LlmClient, LlmClientError};
use speakwell::infrastructure::llm::OpenAiClient;

#[derive(Default)]
struct Captured {
    body: Option<Value>,
    authorization: Option<String>,
}

async fn start_mock_chat_server(
    status: u16,
    response_body: &'static str,
) -> (String, Arc<Mutex<Captured>>, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = Arc::clone(&captured);

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
            let mut guard = sink.lock().unwrap();
            guard.body = Some(body);
            guard.authorization = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            drop(guard);
            let status = StatusCode::from_u16(status).unwrap();
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                response_body,
            )
                .into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/v1", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

fn completion_request() -> CompletionRequest {
    CompletionRequest {
        model: "llama-3.2-3b-preview".to_string(),
        messages: vec![
            ChatMessage::system("You write questions."),
            ChatMessage::user("Generate 2 questions."),
        ],
        temperature: 0.7,
        max_tokens: Some(2000),
        top_p: Some(1.0),
        stream: false,
    }
}

fn client(base_url: String) -> OpenAiClient {
    OpenAiClient::new("test-key".to_string(), Some(base_url), None).unwrap()
}

#[tokio::test]
async fn given_successful_completion_when_completing_then_returns_first_choice_content() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"1. A?\n2. B?"}}]}"#;
    let (base_url, _captured, shutdown_tx) = start_mock_chat_server(200, body).await;

    let result = client(base_url).complete(completion_request()).await;

    assert_eq!(result.unwrap(), "1. A?\n2. B?");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_request_when_completing_then_sends_openai_wire_format() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#;
    let (base_url, captured, shutdown_tx) = start_mock_chat_server(200, body).await;

    client(base_url).complete(completion_request()).await.unwrap();

    let captured = captured.lock().unwrap();
    let sent = captured.body.as_ref().unwrap();
    assert_eq!(sent["model"], "llama-3.2-3b-preview");
    assert_eq!(sent["max_tokens"], 2000);
    assert_eq!(sent["top_p"], 1.0);
    assert_eq!(sent["stream"], false);
    assert_eq!(sent["messages"][0]["role"], "system");
    assert_eq!(sent["messages"][1]["role"], "user");
    assert_eq!(sent["messages"][1]["content"], "Generate 2 questions.");
    assert_eq!(captured.authorization.as_deref(), Some("Bearer test-key"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unset_optional_parameters_when_completing_then_omits_them() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#;
    let (base_url, captured, shutdown_tx) = start_mock_chat_server(200, body).await;
    let mut request = completion_request();
    request.max_tokens = None;
    request.top_p = None;

    client(base_url).complete(request).await.unwrap();

    let captured = captured.lock().unwrap();
    let sent = captured.body.as_ref().unwrap();
    assert!(sent.get("max_tokens").is_none());
    assert!(sent.get("top_p").is_none());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_completing_then_returns_rate_limited() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_chat_server(429, r#"{"error":"slow down"}"#).await;

    let result = client(base_url).complete(completion_request()).await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_completing_then_returns_api_error() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_chat_server(401, r#"{"error":"invalid api key"}"#).await;

    let result = client(base_url).complete(completion_request()).await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => assert!(message.contains("401")),
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_chat_server(200, r#"{"choices":[]}"#).await;

    let result = client(base_url).complete(completion_request()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_undecodable_body_when_completing_then_returns_invalid_response() {
    let (base_url, _captured, shutdown_tx) = start_mock_chat_server(200, "not json").await;

    let result = client(base_url).complete(completion_request()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_completing_then_returns_api_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(format!("http://{}/v1", addr))
        .complete(completion_request())
        .await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}
