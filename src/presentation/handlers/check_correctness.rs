use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::domain::ScoreResult;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct CheckCorrectnessRequest {
    pub question: String,
    pub answer: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn check_correctness_handler(
    State(state): State<AppState>,
    Json(request): Json<CheckCorrectnessRequest>,
) -> Json<ScoreResult> {
    tracing::debug!(question = %sanitize_prompt(&request.question), "Scoring answer");

    Json(
        state
            .answer_scorer
            .check_correctness(&request.question, &request.answer)
            .await,
    )
}
