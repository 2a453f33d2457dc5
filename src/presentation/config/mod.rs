mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    API_KEY_FALLBACK_VAR, GenerationSettings, LanguageSettings, LlmSettings, LoggingSettings,
    ScoringSettings, ServerSettings, Settings, TranscriptionSettings, UploadSettings,
};
