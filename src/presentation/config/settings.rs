use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_GENERATION_MODEL, DEFAULT_SCORING_MODEL, DEFAULT_TRANSCRIPTION_MODEL,
    GenerationOptions, ScoringOptions,
};
use crate::infrastructure::llm::DEFAULT_BASE_URL;
use crate::infrastructure::observability::TracingConfig;

use super::Environment;

/// Read when `llm.api_key` is not configured.
pub const API_KEY_FALLBACK_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub generation: GenerationSettings,
    pub scoring: ScoringSettings,
    pub uploads: UploadSettings,
    pub languages: LanguageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub model: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub max_questions: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            model: DEFAULT_GENERATION_MODEL.to_string(),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
            max_questions: options.max_questions,
        }
    }
}

impl From<&GenerationSettings> for GenerationOptions {
    fn from(settings: &GenerationSettings) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            top_p: settings.top_p,
            max_questions: settings.max_questions,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_SCORING_MODEL.to_string(),
            temperature: ScoringOptions::default().temperature,
        }
    }
}

impl From<&ScoringSettings> for ScoringOptions {
    fn from(settings: &ScoringSettings) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_file_size_mb: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            dir: std::env::temp_dir().join("speakwell-uploads"),
            max_file_size_mb: 25,
        }
    }
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

/// `catalog_path` replaces the bundled language table when set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LanguageSettings {
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingConfig::default().default_filter,
            json: false,
        }
    }
}

impl Settings {
    /// Layers `config/default`, `config/{environment}` and `APP_*` variables
    /// (nested keys use `__`, e.g. `APP_LLM__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!("config/{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.llm.api_key.is_empty() {
            if let Ok(key) = std::env::var(API_KEY_FALLBACK_VAR) {
                settings.llm.api_key = key;
            }
        }

        Ok(settings)
    }

    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        let json_override = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        TracingConfig {
            environment: environment.to_string(),
            json_format: self.logging.json || json_override,
            default_filter: self.logging.level.clone(),
        }
    }
}
