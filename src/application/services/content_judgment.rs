use serde::Deserialize;

pub const MAX_CONTENT_POINTS: f64 = 25.0;
/// Relevance below this zeroes the whole score.
pub const RELEVANCE_FLOOR: f64 = 5.0;

/// The model's relevance/quality verdict for one answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentJudgment {
    pub relevance_score: f64,
    pub quality_score: f64,
    pub relevance_feedback: String,
    pub quality_feedback: String,
}

#[derive(Debug, thiserror::Error)]
pub enum JudgmentParseError {
    #[error("response is not valid judgment JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl ContentJudgment {
    /// Strict JSON parse. A surrounding code fence is tolerated; anything
    /// else that is not the expected object is rejected.
    pub fn parse(raw: &str) -> Result<Self, JudgmentParseError> {
        let judgment: ContentJudgment = serde_json::from_str(strip_code_fence(raw))?;
        check_range("relevance_score", judgment.relevance_score)?;
        check_range("quality_score", judgment.quality_score)?;
        Ok(judgment)
    }

    pub fn is_relevant(&self) -> bool {
        self.relevance_score >= RELEVANCE_FLOOR
    }

    pub fn content_points(&self) -> f64 {
        self.relevance_score + self.quality_score
    }
}

fn check_range(field: &'static str, value: f64) -> Result<(), JudgmentParseError> {
    if (0.0..=MAX_CONTENT_POINTS).contains(&value) {
        Ok(())
    } else {
        Err(JudgmentParseError::OutOfRange { field, value })
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = body.split_once('\n').map_or(body, |(_, rest)| rest);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
