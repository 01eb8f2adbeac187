//! Onboarding: capture (or skip) the user's personality-framework codes.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::domain::PersonalityProfile;
use crate::error::ApiError;
use crate::routes::{require_user_id, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingParams {
    pub user_id: Option<String>,
    pub mbti: Option<String>,
    pub enneagram: Option<String>,
    pub big_five: Option<String>,
    pub skipped_onboarding: Option<bool>,
}

/// POST /onboarding/profile — replace the user's profile wholesale.
///
/// Fields absent from the request are absent from the stored profile; a
/// previously stored profile is not merged in.
pub async fn replace_profile(
    State(state): State<AppState>,
    Json(params): Json<OnboardingParams>,
) -> Result<Json<PersonalityProfile>, ApiError> {
    let user_id = require_user_id(params.user_id.as_deref())?;

    let profile = PersonalityProfile {
        mbti: params.mbti,
        enneagram: params.enneagram,
        big_five: params.big_five,
        skipped_onboarding: Some(params.skipped_onboarding.unwrap_or(false)),
        inferred_suggestion: None,
    };

    let stored = state.store.replace_profile(user_id, profile);
    tracing::info!(user = %user_id, "onboarding profile replaced");
    Ok(Json(stored))
}
