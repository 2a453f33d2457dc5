use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{AnswerScorer, QuestionGenerator, TranscriptionService};
use crate::domain::LanguageCatalog;

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub question_generator: Arc<QuestionGenerator>,
    pub answer_scorer: Arc<AnswerScorer>,
    pub catalog: Arc<LanguageCatalog>,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}
