mod answer_scorer;
mod content_judgment;
mod question_generator;
mod transcription_service;

pub use answer_scorer::{
    AnswerScorer, DEFAULT_SCORING_MODEL, ScoringError, ScoringOptions, build_judgment_prompt,
};
pub use content_judgment::{
    ContentJudgment, JudgmentParseError, MAX_CONTENT_POINTS, RELEVANCE_FLOOR,
};
pub use question_generator::{
    DEFAULT_GENERATION_MODEL, GenerationOptions, QuestionGenerator, build_prompt,
    extract_questions, fit_to_count, parse_questions, strip_numbering, system_prompt,
};
pub use transcription_service::{
    DEFAULT_TRANSCRIPTION_MODEL, HESITATION_MARKERS, TranscriptionService, transcription_prompt,
};
