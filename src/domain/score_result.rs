use serde::Serialize;

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub detailed_feedback: String,
    pub max_score: u32,
}

impl ScoreResult {
    /// Rounds `score` to two decimals (ties to even) and joins the feedback lines.
    pub fn new(score: f64, feedback: &[String]) -> Self {
        Self {
            score: round_to_hundredths(score),
            detailed_feedback: feedback.join("\n"),
            max_score: MAX_SCORE,
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
