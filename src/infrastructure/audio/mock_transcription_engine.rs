use std::sync::{Mutex, PoisonError};

use crate::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};

enum Scripted {
    Transcript(String),
    Fail(String),
}

/// Scripted [`TranscriptionEngine`] that records every request it receives.
pub struct MockTranscriptionEngine {
    outcome: Scripted,
    requests: Mutex<Vec<TranscriptionRequest>>,
}

impl MockTranscriptionEngine {
    pub fn returning(text: impl Into<String>) -> Self {
        Self::with(Scripted::Transcript(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with(Scripted::Fail(message.into()))
    }

    fn with(outcome: Scripted) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn last_request(&self) -> Option<TranscriptionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, TranscriptionError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match &self.outcome {
            Scripted::Transcript(text) => Ok(text.clone()),
            Scripted::Fail(message) => Err(TranscriptionError::ApiRequestFailed(message.clone())),
        }
    }
}
