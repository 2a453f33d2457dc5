use std::sync::{Mutex, PoisonError};

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};

enum Scripted {
    Reply(String),
    Fail(String),
}

/// Scripted [`LlmClient`] that records every request it receives.
pub struct MockLlmClient {
    outcome: Scripted,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with(Scripted::Reply(content.into()))
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

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmClientError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match &self.outcome {
            Scripted::Reply(content) => Ok(content.clone()),
            Scripted::Fail(message) => Err(LlmClientError::ApiRequestFailed(message.clone())),
        }
    }
}
