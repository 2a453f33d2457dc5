mod llm_client;
mod transcription_engine;

pub use llm_client::{ChatMessage, ChatRole, CompletionRequest, LlmClient, LlmClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};
