use std::path::Path;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::domain::DEFAULT_LANGUAGE;
use crate::presentation::state::AppState;

use super::error_response::error_response;

const DEFAULT_FILENAME: &str = "recording.webm";

struct Upload {
    filename: String,
    data: Bytes,
}

/// Accepts a multipart `file` (and optional `language`), stages it on disk,
/// transcribes it and removes the staged copy.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_audio_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut upload = None;
    let mut language = DEFAULT_LANGUAGE.to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .and_then(safe_file_name)
                    .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
                match field.bytes().await {
                    Ok(data) => upload = Some(Upload { filename, data }),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file: {}", e),
                        );
                    }
                }
            }
            Some("language") => match field.text().await {
                Ok(text) if !text.trim().is_empty() => language = text.trim().to_string(),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Unreadable language field, keeping default");
                }
            },
            _ => {}
        }
    }

    let Some(upload) = upload else {
        tracing::warn!("Process-audio request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        language = %language,
        "Audio upload received"
    );

    let staging_dir = state.upload_dir.join(Uuid::new_v4().to_string());
    if let Err(e) = tokio::fs::create_dir_all(&staging_dir).await {
        tracing::error!(error = %e, dir = %staging_dir.display(), "Failed to create staging dir");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to stage upload: {}", e),
        );
    }

    let staged_path = staging_dir.join(&upload.filename);
    let result = match tokio::fs::write(&staged_path, &upload.data).await {
        Ok(()) => Ok(state
            .transcription_service
            .transcribe(&staged_path, &language)
            .await),
        Err(e) => Err(e),
    };

    if let Err(e) = tokio::fs::remove_dir_all(&staging_dir).await {
        tracing::warn!(error = %e, dir = %staging_dir.display(), "Failed to remove staged upload");
    }

    match result {
        Ok(transcription) => (StatusCode::OK, Json(transcription)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to write staged upload");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to stage upload: {}", e),
            )
        }
    }
}

/// Keeps only the final path component so uploads cannot escape the
/// staging directory.
fn safe_file_name(name: &str) -> Option<String> {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
