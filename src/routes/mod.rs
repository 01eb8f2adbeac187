//! HTTP surface: axum router, shared state, and route handlers.
//!
//! # Routes
//!
//! - `GET   /health`             — liveness flag
//! - `POST  /onboarding/profile` — replace a user's personality profile
//! - `PATCH /settings/tone`      — replace a user's guidance settings
//! - `GET   /journal/prompts`    — fixed starter prompts
//! - `POST  /journal/entries`    — create an entry with generated guidance
//! - `GET   /journal/entries`    — list/search a user's entries
//! - `POST  /personality/infer`  — keyword-based type suggestion
//! - `POST  /wisdom/generate`    — generate a wisdom nugget
//! - `GET   /wisdom/latest`      — most recent nugget, or null
//!
//! `userId` is a caller-supplied string standing in for identity — there is
//! no authentication on any route.

pub mod infer;
pub mod journal;
pub mod onboarding;
pub mod settings;
pub mod wisdom;

use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::config::CandorConfig;
use crate::error::ApiError;
use crate::generation::{self, TextGenerator};
use crate::store::UserStore;

/// Shared application state: the user-state store, the text-generation
/// provider, and the loaded config.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub generator: Arc<dyn TextGenerator>,
    pub config: Arc<CandorConfig>,
}

impl AppState {
    /// Build state from config, creating the configured generation provider.
    pub fn new(config: CandorConfig) -> Result<Self> {
        let generator = generation::create_generator(&config.generation)?;
        Ok(Self {
            store: Arc::new(UserStore::new()),
            generator: Arc::from(generator),
            config: Arc::new(config),
        })
    }

    /// Build state around a caller-supplied generator.
    pub fn with_generator(config: CandorConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            store: Arc::new(UserStore::new()),
            generator,
            config: Arc::new(config),
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/onboarding/profile", post(onboarding::replace_profile))
        .route("/settings/tone", patch(settings::replace_tone))
        .route("/journal/prompts", get(journal::starter_prompts))
        .route(
            "/journal/entries",
            post(journal::create_entry).get(journal::list_entries),
        )
        .route("/personality/infer", post(infer::infer_personality))
        .route("/wisdom/generate", post(wisdom::generate_nugget))
        .route("/wisdom/latest", get(wisdom::latest_nugget))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Validate the caller-supplied user id: present and non-empty. Validation
/// runs before any store access so a failing request never creates a record.
pub(crate) fn require_user_id(user_id: Option<&str>) -> Result<&str, ApiError> {
    match user_id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ApiError::validation("userId", "must be a non-empty string")),
    }
}

/// Run the generation provider off the async runtime (its methods are
/// synchronous, mirroring how the provider trait is specified).
pub(crate) async fn generate_text(
    generator: Arc<dyn TextGenerator>,
    system_prompt: String,
    user_prompt: String,
) -> Result<String, ApiError> {
    let text =
        tokio::task::spawn_blocking(move || generator.generate(&system_prompt, &user_prompt))
            .await
            .map_err(|e| anyhow::anyhow!("generation task failed: {e}"))??;
    Ok(text)
}
