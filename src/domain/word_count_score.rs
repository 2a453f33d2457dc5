pub const MIN_WORD_COUNT: usize = 80;
pub const WORD_COUNT_POINTS: f64 = 50.0;

/// Deterministic length component of an answer score.
///
/// Answers below [`MIN_WORD_COUNT`] earn linear partial credit; anything at
/// or above earns the full [`WORD_COUNT_POINTS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordCountScore {
    pub word_count: usize,
    pub points: f64,
}

impl WordCountScore {
    pub fn evaluate(answer: &str) -> Self {
        let word_count = answer.split_whitespace().count();
        let points = if word_count < MIN_WORD_COUNT {
            (word_count as f64 / MIN_WORD_COUNT as f64) * WORD_COUNT_POINTS
        } else {
            WORD_COUNT_POINTS
        };

        Self { word_count, points }
    }

    pub fn requirement_met(&self) -> bool {
        self.word_count >= MIN_WORD_COUNT
    }

    pub fn feedback(&self) -> String {
        if self.requirement_met() {
            format!(
                "Word count ({}/{}): Requirement met. Full word count score awarded",
                self.word_count, MIN_WORD_COUNT
            )
        } else {
            format!(
                "Word count ({}/{}): Your response is too short. -50% score penalty",
                self.word_count, MIN_WORD_COUNT
            )
        }
    }
}
