//! Wisdom nuggets: short generated texts derived from the user's most
//! recent entry, or a generic fallback when they have none.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{now_rfc3339, prefixed_id, WisdomNugget};
use crate::error::ApiError;
use crate::personality::prompt::build_system_prompt;
use crate::routes::{generate_text, require_user_id, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNuggetParams {
    pub user_id: Option<String>,
}

/// POST /wisdom/generate — generate and prepend a new nugget.
pub async fn generate_nugget(
    State(state): State<AppState>,
    Json(params): Json<GenerateNuggetParams>,
) -> Result<(StatusCode, Json<WisdomNugget>), ApiError> {
    let user_id = require_user_id(params.user_id.as_deref())?.to_string();

    let user = state.store.get_or_create(&user_id);
    let user_prompt = match user.entries.first() {
        Some(latest) => format!(
            "Generate a short wisdom nugget based on this latest entry:\n{}",
            latest.text
        ),
        None => "Generate a short wisdom nugget encouraging reflective journaling.".to_string(),
    };
    let system_prompt = build_system_prompt(user.settings.tone, &user.profile);
    let text =
        generate_text(Arc::clone(&state.generator), system_prompt, user_prompt).await?;

    let nugget = WisdomNugget {
        id: prefixed_id("nugget"),
        user_id: user_id.clone(),
        text,
        created_at: now_rfc3339(),
    };
    state.store.prepend_nugget(&user_id, nugget.clone());

    tracing::info!(user = %user_id, nugget = %nugget.id, "wisdom nugget generated");
    Ok((StatusCode::CREATED, Json(nugget)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestNuggetQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LatestNuggetResponse {
    /// `null` when the user has no nuggets yet — that is not an error.
    pub nugget: Option<WisdomNugget>,
}

/// GET /wisdom/latest?userId — the most recently prepended nugget, or null.
pub async fn latest_nugget(
    State(state): State<AppState>,
    Query(query): Query<LatestNuggetQuery>,
) -> Result<Json<LatestNuggetResponse>, ApiError> {
    let user_id = require_user_id(query.user_id.as_deref())?;
    Ok(Json(LatestNuggetResponse {
        nugget: state.store.latest_nugget(user_id),
    }))
}
