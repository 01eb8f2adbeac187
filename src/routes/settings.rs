//! Guidance-tone settings.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::domain::{TonePreference, UserSettings};
use crate::error::ApiError;
use crate::routes::{require_user_id, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneParams {
    pub user_id: Option<String>,
    pub tone: Option<String>,
    pub dynamic_tone_adaptation: Option<bool>,
}

/// PATCH /settings/tone — replace the user's settings wholesale.
pub async fn replace_tone(
    State(state): State<AppState>,
    Json(params): Json<ToneParams>,
) -> Result<Json<UserSettings>, ApiError> {
    let user_id = require_user_id(params.user_id.as_deref())?;

    let tone: TonePreference = params
        .tone
        .as_deref()
        .ok_or_else(|| ApiError::validation("tone", "is required"))?
        .parse()
        .map_err(|e: String| ApiError::validation("tone", e))?;

    let settings = UserSettings {
        tone,
        dynamic_tone_adaptation: params.dynamic_tone_adaptation.unwrap_or(false),
    };

    let stored = state.store.replace_settings(user_id, settings);
    tracing::info!(user = %user_id, tone = %stored.tone, "settings replaced");
    Ok(Json(stored))
}
