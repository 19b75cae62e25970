// SPDX-License-Identifier: MIT

//! Profile routes.

use crate::error::Result;
use crate::models::profile::{Profile, ProfileUpdate};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/profile", get(get_profile).put(update_profile))
}

async fn get_profile(State(state): State<Arc<AppState>>) -> Result<Json<Profile>> {
    Ok(Json(state.store.get_profile().await))
}

/// Merge-patch the profile: present fields replace, absent fields keep
/// their current values.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ProfileUpdate>,
) -> Result<Json<Profile>> {
    let updated = state.store.update_profile(patch).await;
    tracing::info!(username = %updated.username, "Profile updated");

    Ok(Json(updated))
}
