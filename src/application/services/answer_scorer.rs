use std::sync::Arc;

use crate::application::ports::{ChatMessage, CompletionRequest, LlmClient, LlmClientError};
use crate::domain::{ScoreResult, WordCountScore};

use super::content_judgment::{ContentJudgment, JudgmentParseError};

pub const DEFAULT_SCORING_MODEL: &str = "llama2-70b-4096";

const SYSTEM_PROMPT: &str =
    "You are an English assessment expert. Provide detailed analysis in JSON format.";

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOptions {
    pub model: String,
    pub temperature: f32,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_SCORING_MODEL.to_string(),
            temperature: 0.1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("parse: {0}")]
    Parse(#[from] JudgmentParseError),
}

pub struct AnswerScorer {
    llm_client: Arc<dyn LlmClient>,
    options: ScoringOptions,
}

impl AnswerScorer {
    pub fn new(llm_client: Arc<dyn LlmClient>, options: ScoringOptions) -> Self {
        Self {
            llm_client,
            options,
        }
    }

    /// Scores `answer` out of 100: up to 50 for length, up to 25 each for
    /// relevance and quality. A failed judgment leaves only the length score.
    pub async fn check_correctness(&self, question: &str, answer: &str) -> ScoreResult {
        let word_count = WordCountScore::evaluate(answer);
        let mut feedback = vec![word_count.feedback()];

        let score = match self.judge(question, answer).await {
            Ok(judgment) => {
                feedback.push(format!("Relevance: {}", judgment.relevance_feedback));
                feedback.push(format!("Quality: {}", judgment.quality_feedback));

                if judgment.is_relevant() {
                    word_count.points + judgment.content_points()
                } else {
                    feedback.push(
                        "Response is completely irrelevant to the question. Score set to 0."
                            .to_string(),
                    );
                    0.0
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Content analysis failed, using word count score only");
                feedback.push(format!("Error in analysis: {}", e));
                word_count.points
            }
        };

        tracing::info!(
            words = word_count.word_count,
            score,
            "Answer scored"
        );

        ScoreResult::new(score, &feedback)
    }

    async fn judge(&self, question: &str, answer: &str) -> Result<ContentJudgment, ScoringError> {
        let request = CompletionRequest {
            model: self.options.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_judgment_prompt(question, answer)),
            ],
            temperature: self.options.temperature,
            max_tokens: None,
            top_p: None,
            stream: false,
        };

        let content = self.llm_client.complete(request).await?;
        Ok(ContentJudgment::parse(&content)?)
    }
}

pub fn build_judgment_prompt(question: &str, answer: &str) -> String {
    format!(
        "Analyze the following answer for its relevance to the question and quality of explanation.\n\
         \n\
         Question: {question}\n\
         Answer: {answer}\n\
         \n\
         Respond with a single JSON object and nothing else, using exactly this structure:\n\
         {{\n\
         \x20   \"relevance_score\": <number from 0 to 25>,\n\
         \x20   \"quality_score\": <number from 0 to 25>,\n\
         \x20   \"relevance_feedback\": \"detailed explanation of relevance score\",\n\
         \x20   \"quality_feedback\": \"detailed explanation of quality score\"\n\
         }}\n\
         \n\
         Base your scoring on:\n\
         - Relevance: How well the answer addresses the specific question (0-25 points)\n\
         - Quality: Clarity, depth, and coherence of the explanation (0-25 points)"
    )
}
