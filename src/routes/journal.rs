//! Journal entries: starter prompts, entry creation with generated guidance,
//! and case-insensitive search.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{now_rfc3339, prefixed_id, GuidanceMessage, JournalEntry};
use crate::error::ApiError;
use crate::personality::prompt::build_system_prompt;
use crate::routes::{generate_text, require_user_id, AppState};

/// Suggested entry openers returned to the client.
pub const STARTER_PROMPTS: [&str; 3] = [
    "What are you avoiding today?",
    "What decision are you delaying and why?",
    "Where are you choosing comfort over growth right now?",
];

/// GET /journal/prompts — the fixed starter-prompt list.
pub async fn starter_prompts() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "prompts": STARTER_PROMPTS }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryParams {
    pub user_id: Option<String>,
    pub text: Option<String>,
    pub starter_prompt: Option<String>,
}

/// POST /journal/entries — create an entry and attach generated guidance.
///
/// Settings and profile are snapshotted before the generation call; the
/// store lock is never held across the await. A concurrent request for the
/// same user may interleave here — entry prepends commute, so ordering under
/// that race is tolerated rather than serialized.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(params): Json<CreateEntryParams>,
) -> Result<(StatusCode, Json<JournalEntry>), ApiError> {
    let user_id = require_user_id(params.user_id.as_deref())?.to_string();
    let text = match params.text.as_deref() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return Err(ApiError::validation("text", "must be a non-empty string")),
    };

    let user = state.store.get_or_create(&user_id);
    let system_prompt = build_system_prompt(user.settings.tone, &user.profile);
    let guidance_text =
        generate_text(Arc::clone(&state.generator), system_prompt, text.clone()).await?;

    let entry_id = prefixed_id("entry");
    let guidance = GuidanceMessage {
        id: prefixed_id("guide"),
        entry_id: entry_id.clone(),
        text: guidance_text,
        tone: user.settings.tone,
        created_at: now_rfc3339(),
    };
    let entry = JournalEntry {
        id: entry_id,
        user_id: user_id.clone(),
        text,
        created_at: now_rfc3339(),
        starter_prompt: params.starter_prompt,
        guidance: Some(guidance),
    };
    state.store.prepend_entry(&user_id, entry.clone());

    tracing::info!(user = %user_id, entry = %entry.id, "journal entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesQuery {
    pub user_id: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<JournalEntry>,
}

/// GET /journal/entries?userId&query — the user's entries, newest first,
/// filtered by case-insensitive substring over entry + guidance text.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<ListEntriesQuery>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let user_id = require_user_id(query.user_id.as_deref())?;
    let entries = state
        .store
        .entries_matching(user_id, query.query.as_deref().unwrap_or(""));
    Ok(Json(EntriesResponse { entries }))
}
