use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::AssessmentRequest;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_questions_handler(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate(state.question_generator.max_questions()) {
        tracing::warn!(error = %e, "Rejected assessment request");
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
    }

    tracing::debug!(
        language = %request.language,
        topic = %request.topic,
        difficulty = %request.difficulty,
        count = request.number_of_questions,
        "Generating questions"
    );

    let questions = state.question_generator.generate(&request).await;

    (StatusCode::OK, Json(QuestionsResponse { questions })).into_response()
}
