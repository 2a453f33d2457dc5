use serde::{Deserialize, Serialize};

use super::language::DEFAULT_LANGUAGE;

/// Upper bound on `numberOfQuestions` unless configured otherwise.
pub const DEFAULT_MAX_QUESTIONS: usize = 50;

/// Parameters for one question-generation request, as sent by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub question_type: String,
    pub number_of_questions: usize,
    pub topic: String,
    pub difficulty: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentRequestError {
    #[error("numberOfQuestions must be positive")]
    ZeroQuestions,
    #[error("numberOfQuestions must be at most {max}, got {requested}")]
    TooManyQuestions { requested: usize, max: usize },
}

impl AssessmentRequest {
    pub fn validate(&self, max_questions: usize) -> Result<(), AssessmentRequestError> {
        if self.number_of_questions == 0 {
            return Err(AssessmentRequestError::ZeroQuestions);
        }
        if self.number_of_questions > max_questions {
            return Err(AssessmentRequestError::TooManyQuestions {
                requested: self.number_of_questions,
                max: max_questions,
            });
        }
        Ok(())
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
