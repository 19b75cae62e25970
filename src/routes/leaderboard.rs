// SPDX-License-Identifier: MIT

//! Leaderboard routes.

use crate::error::{AppError, Result};
use crate::models::leaderboard::{LeaderboardEntry, LeaderboardMetric};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/leaderboard", get(get_leaderboard))
}

#[derive(Deserialize)]
struct LeaderboardQuery {
    /// Metric to rank by; defaults to weekly workouts
    metric: Option<String>,
}

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub metric: LeaderboardMetric,
    pub entries: Vec<LeaderboardEntry>,
}

async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>> {
    let metric = match params.metric.as_deref() {
        None | Some("weekly_workouts") => LeaderboardMetric::WeeklyWorkouts,
        Some("weekly_distance") => LeaderboardMetric::WeeklyDistance,
        Some("weekly_calories") => LeaderboardMetric::WeeklyCalories,
        Some("streak") => LeaderboardMetric::Streak,
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Unknown leaderboard metric: {other}"
            )));
        }
    };

    let entries = state.store.leaderboard(metric).await;
    Ok(Json(LeaderboardResponse { metric, entries }))
}
