// SPDX-License-Identifier: MIT

//! Goal and achievement routes.

use crate::error::{AppError, Result};
use crate::models::goal::{Achievement, Goal, GoalUpdate, NewGoal};
use crate::routes::workouts::DeleteResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/goals", get(list_goals).post(create_goal))
        .route(
            "/api/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/api/achievements", get(list_achievements))
}

#[derive(Serialize)]
pub struct GoalsResponse {
    pub goals: Vec<Goal>,
}

async fn list_goals(State(state): State<Arc<AppState>>) -> Result<Json<GoalsResponse>> {
    Ok(Json(GoalsResponse {
        goals: state.store.list_goals().await,
    }))
}

async fn get_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Goal>> {
    let goal = state
        .store
        .get_goal(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Goal {id} not found")))?;

    Ok(Json(goal))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewGoal>,
) -> Result<(StatusCode, Json<Goal>)> {
    if new.target <= 0.0 {
        return Err(AppError::BadRequest("target must be positive".to_string()));
    }

    let goal = state.store.insert_goal(new).await;
    tracing::info!(id = goal.id, goal_type = ?goal.goal_type, "Goal created");

    Ok((StatusCode::CREATED, Json(goal)))
}

/// Patch a goal's progress. The `achieved` flag is recomputed from the
/// updated values, never taken from the request.
async fn update_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(patch): Json<GoalUpdate>,
) -> Result<Json<Goal>> {
    if patch.target.is_some_and(|t| t <= 0.0) {
        return Err(AppError::BadRequest("target must be positive".to_string()));
    }

    let goal = state
        .store
        .update_goal(id, patch)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Goal {id} not found")))?;

    Ok(Json(goal))
}

async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    if !state.store.delete_goal(id).await {
        return Err(AppError::NotFound(format!("Goal {id} not found")));
    }

    tracing::info!(id, "Goal deleted");
    Ok(Json(DeleteResponse { success: true }))
}

#[derive(Serialize)]
pub struct AchievementsResponse {
    pub achievements: Vec<Achievement>,
}

async fn list_achievements(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AchievementsResponse>> {
    Ok(Json(AchievementsResponse {
        achievements: state.store.list_achievements().await,
    }))
}
