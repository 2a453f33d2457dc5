mod assessment_request;
mod language;
mod score_result;
mod transcription_result;
mod word_count_score;

pub use assessment_request::{AssessmentRequest, AssessmentRequestError, DEFAULT_MAX_QUESTIONS};
pub use language::{CatalogError, DEFAULT_LANGUAGE, LanguageCatalog, LanguageEntry};
pub use score_result::{MAX_SCORE, ScoreResult};
pub use transcription_result::{TranscriptionResult, TranscriptionStatus};
pub use word_count_score::{MIN_WORD_COUNT, WORD_COUNT_POINTS, WordCountScore};
