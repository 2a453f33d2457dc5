use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionStatus {
    Success,
    Error,
}

impl TranscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionStatus::Success => "success",
            TranscriptionStatus::Error => "error",
        }
    }
}

impl fmt::Display for TranscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one transcription request. Failures are carried as data with
/// `status: error` and a `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptionResult {
    pub status: TranscriptionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TranscriptionResult {
    pub const FILE_NOT_FOUND: &'static str = "File not found";

    pub fn success(text: String, filename: String, language: String, language_code: String) -> Self {
        Self {
            status: TranscriptionStatus::Success,
            text: Some(text),
            filename: Some(filename),
            language: Some(language),
            language_code: Some(language_code),
            message: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: TranscriptionStatus::Error,
            text: None,
            filename: None,
            language: None,
            language_code: None,
            message: Some(Self::FILE_NOT_FOUND.to_string()),
        }
    }

    pub fn failed(message: String, filename: String, language: String) -> Self {
        Self {
            status: TranscriptionStatus::Error,
            text: None,
            filename: Some(filename),
            language: Some(language),
            language_code: None,
            message: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TranscriptionStatus::Success
    }
}
