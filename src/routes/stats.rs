// SPDX-License-Identifier: MIT

//! Dashboard stats route.

use crate::error::Result;
use crate::services::stats::{dashboard_summary, DashboardSummary};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/stats/dashboard", get(get_dashboard))
}

/// Dashboard summary: profile aggregates plus chart series shaped from
/// the workout collection.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> Result<Json<DashboardSummary>> {
    let profile = state.store.get_profile().await;
    let workouts = state.store.list_workouts().await;

    Ok(Json(dashboard_summary(profile.stats, &workouts)))
}
