//! Keyword-based personality inference.
//!
//! Deliberately trivial: a two-keyword substring check over the user's entry
//! texts, not a model call.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::{require_user_id, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferParams {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InferResponse {
    pub suggestion: String,
    pub message: String,
}

/// POST /personality/infer — suggest a type from the user's entries and
/// store it on their profile as `inferredSuggestion`.
pub async fn infer_personality(
    State(state): State<AppState>,
    Json(params): Json<InferParams>,
) -> Result<Json<InferResponse>, ApiError> {
    let user_id = require_user_id(params.user_id.as_deref())?;

    let joined = state.store.entry_texts(user_id).join(" ").to_lowercase();
    let suggestion = if joined.contains("plan") || joined.contains("strategy") {
        "INTJ"
    } else {
        "INFP"
    };
    state.store.set_inferred_suggestion(user_id, suggestion);

    tracing::info!(user = %user_id, suggestion, "personality inferred");
    Ok(Json(InferResponse {
        suggestion: suggestion.to_string(),
        message: format!("Based on your entries, you might be {suggestion}."),
    }))
}
