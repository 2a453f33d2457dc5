use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionRequest};
use crate::domain::{LanguageCatalog, TranscriptionResult};

pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3-turbo";

/// Filled pauses the model is asked to keep; fluency analysis depends on them.
pub const HESITATION_MARKERS: &[&str] = &[
    "hmm", "um", "uh", "aaa", "aa", "mmm", "mm", "ah", "er", "erm", "uhm", "uhmm", "uhhuh", "uhuh",
];

const RESPONSE_FORMAT: &str = "json";
const TEMPERATURE: f32 = 0.0;

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    catalog: Arc<LanguageCatalog>,
    model: String,
}

impl TranscriptionService {
    pub fn new(
        engine: Arc<dyn TranscriptionEngine>,
        catalog: Arc<LanguageCatalog>,
        model: String,
    ) -> Self {
        Self {
            engine,
            catalog,
            model,
        }
    }

    /// Transcribes the audio file at `file_path`. Never fails: a missing file
    /// or a remote error comes back as a result with `status: error`.
    pub async fn transcribe(&self, file_path: &Path, language: &str) -> TranscriptionResult {
        if !matches!(tokio::fs::try_exists(file_path).await, Ok(true)) {
            tracing::error!(path = %file_path.display(), "File not found");
            return TranscriptionResult::not_found();
        }

        let filename = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.display().to_string());
        let language_code = self.catalog.locale_code(language).to_string();

        tracing::info!(
            language = %language,
            language_code = %language_code,
            filename = %filename,
            "Processing audio"
        );

        let audio = match tokio::fs::read(file_path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "Error processing audio file");
                return TranscriptionResult::failed(
                    format!("Error processing audio: {}", e),
                    filename,
                    language.to_string(),
                );
            }
        };

        let request = TranscriptionRequest {
            audio,
            filename: filename.clone(),
            model: self.model.clone(),
            prompt: transcription_prompt(language),
            response_format: RESPONSE_FORMAT.to_string(),
            language: language_code.clone(),
            temperature: TEMPERATURE,
        };

        match self.engine.transcribe(request).await {
            Ok(text) => {
                TranscriptionResult::success(text, filename, language.to_string(), language_code)
            }
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "Error processing audio file");
                TranscriptionResult::failed(
                    format!("Error processing audio: {}", e),
                    filename,
                    language.to_string(),
                )
            }
        }
    }
}

pub fn transcription_prompt(language: &str) -> String {
    let markers = HESITATION_MARKERS
        .iter()
        .map(|m| format!("'{}'", m))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Transcribe in {}. Include hesitation markers like {}",
        language, markers
    )
}
