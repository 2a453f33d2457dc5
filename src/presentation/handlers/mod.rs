mod check_correctness;
mod error_response;
mod generate_questions;
mod health;
mod languages;
mod process_audio;

pub use check_correctness::{CheckCorrectnessRequest, check_correctness_handler};
pub use error_response::{ErrorResponse, error_response};
pub use generate_questions::{QuestionsResponse, generate_questions_handler};
pub use health::health_handler;
pub use languages::{LanguageSummary, LanguagesResponse, languages_handler};
pub use process_audio::process_audio_handler;
