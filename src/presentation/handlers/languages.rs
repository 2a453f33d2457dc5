use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageSummary>,
}

#[derive(Serialize)]
pub struct LanguageSummary {
    pub name: String,
    pub code: String,
}

pub async fn languages_handler(State(state): State<AppState>) -> Json<LanguagesResponse> {
    let languages = state
        .catalog
        .entries()
        .iter()
        .map(|entry| LanguageSummary {
            name: entry.display_name.clone(),
            code: entry.locale_code.clone(),
        })
        .collect();

    Json(LanguagesResponse { languages })
}
