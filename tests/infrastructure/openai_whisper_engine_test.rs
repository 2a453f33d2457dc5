use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::Multipart;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use speakwell::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};
use speakwell::infrastructure::audio::OpenAiWhisperEngine;

type Fields = Arc<Mutex<HashMap<String, String>>>;

async fn start_mock_transcription_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, Fields, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let fields: Fields = Arc::new(Mutex::new(HashMap::new()));
    let sink = Arc::clone(&fields);

    let app = Router::new().route(
        "/openai/v1/audio/transcriptions",
        post(move |mut multipart: Multipart| async move {
            while let Some(field) = multipart.next_field().await.unwrap() {
                let name = field.name().unwrap_or_default().to_string();
                let value = match field.file_name() {
                    Some(file_name) => format!("file:{}", file_name),
                    None => field.text().await.unwrap(),
                };
                sink.lock().unwrap().insert(name, value);
            }
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/openai/v1", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, fields, shutdown_tx)
}

fn transcription_request() -> TranscriptionRequest {
    TranscriptionRequest {
        audio: b"fake audio bytes".to_vec(),
        filename: "question_0.webm".to_string(),
        model: "whisper-large-v3-turbo".to_string(),
        prompt: "Transcribe in English. Include hesitation markers like 'um'".to_string(),
        response_format: "json".to_string(),
        language: "en".to_string(),
        temperature: 0.0,
    }
}

fn engine(base_url: String) -> OpenAiWhisperEngine {
    OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None).unwrap()
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_trimmed_text() {
    let (base_url, _fields, shutdown_tx) =
        start_mock_transcription_server(200, r#"{"text": " um, I like to travel. "}"#).await;

    let result = engine(base_url).transcribe(transcription_request()).await;

    assert_eq!(result.unwrap(), "um, I like to travel.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_request_when_transcribing_then_sends_all_form_fields() {
    let (base_url, fields, shutdown_tx) =
        start_mock_transcription_server(200, r#"{"text": "ok"}"#).await;

    engine(base_url)
        .transcribe(transcription_request())
        .await
        .unwrap();

    let fields = fields.lock().unwrap();
    assert_eq!(fields["model"], "whisper-large-v3-turbo");
    assert_eq!(fields["response_format"], "json");
    assert_eq!(fields["language"], "en");
    assert_eq!(fields["temperature"], "0");
    assert!(fields["prompt"].contains("'um'"));
    assert_eq!(fields["file"], "file:question_0.webm");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_transcribing_then_returns_api_error() {
    let (base_url, _fields, shutdown_tx) =
        start_mock_transcription_server(400, r#"{"error": {"message": "bad audio"}}"#).await;

    let result = engine(base_url).transcribe(transcription_request()).await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_when_transcribing_then_returns_rate_limited() {
    let (base_url, _fields, shutdown_tx) =
        start_mock_transcription_server(429, r#"{"error": "slow down"}"#).await;

    let result = engine(base_url).transcribe(transcription_request()).await;

    assert!(matches!(result, Err(TranscriptionError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_body_without_text_when_transcribing_then_returns_invalid_response() {
    let (base_url, _fields, shutdown_tx) =
        start_mock_transcription_server(200, r#"{"transcript": "wrong key"}"#).await;

    let result = engine(base_url).transcribe(transcription_request()).await;

    assert!(matches!(result, Err(TranscriptionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
