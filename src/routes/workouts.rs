// SPDX-License-Identifier: MIT

//! Workout routes: listing, detail, creation, deletion, comparison.

use crate::error::{AppError, Result};
use crate::models::workout::{NewWorkout, Workout, WorkoutType};
use crate::services::comparison::{self, Comparison};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/api/workouts/compare", get(compare_workouts))
        .route(
            "/api/workouts/{id}",
            get(get_workout).delete(delete_workout),
        )
}

// ─── Listing ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct WorkoutsQuery {
    /// Filter by activity type
    #[serde(rename = "type")]
    workout_type: Option<WorkoutType>,
    /// Case-insensitive substring search over type label and notes
    q: Option<String>,
}

#[derive(Serialize)]
pub struct WorkoutsResponse {
    pub workouts: Vec<Workout>,
    pub total: u32,
}

/// List workouts, most recent first, with optional filtering.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WorkoutsQuery>,
) -> Result<Json<WorkoutsResponse>> {
    tracing::debug!(
        workout_type = ?params.workout_type,
        q = ?params.q,
        "Fetching workouts"
    );

    let mut workouts = state.store.list_workouts().await;

    if let Some(ty) = params.workout_type {
        workouts.retain(|w| w.workout_type == ty);
    }
    if let Some(q) = params.q.as_deref() {
        let needle = q.to_lowercase();
        workouts.retain(|w| {
            w.workout_type.label().to_lowercase().contains(&needle)
                || w.notes
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
        });
    }

    let total = workouts.len() as u32;
    Ok(Json(WorkoutsResponse { workouts, total }))
}

// ─── Detail ──────────────────────────────────────────────────

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Workout>> {
    let workout = state
        .store
        .get_workout(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Workout {id} not found")))?;

    Ok(Json(workout))
}

// ─── Creation ────────────────────────────────────────────────

/// Create a workout from a validated request body.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewWorkout>,
) -> Result<(StatusCode, Json<Workout>)> {
    new.validate().map_err(AppError::BadRequest)?;

    let workout = state.store.insert_workout(new).await;
    tracing::info!(id = workout.id, workout_type = %workout.workout_type, "Workout created");

    Ok((StatusCode::CREATED, Json(workout)))
}

// ─── Deletion ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    if !state.store.delete_workout(id).await {
        return Err(AppError::NotFound(format!("Workout {id} not found")));
    }

    tracing::info!(id, "Workout deleted");
    Ok(Json(DeleteResponse { success: true }))
}

// ─── Comparison ──────────────────────────────────────────────

#[derive(Deserialize)]
struct CompareQuery {
    first: u64,
    second: u64,
}

/// Compare two workouts of the same type.
///
/// 404 when either workout is missing, 400 (`incompatible_types`) when
/// the types differ.
async fn compare_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareQuery>,
) -> Result<Json<Comparison>> {
    let first = state
        .store
        .get_workout(params.first)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", params.first)))?;
    let second = state
        .store
        .get_workout(params.second)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", params.second)))?;

    let comparison = comparison::compare(&first, &second)?;

    tracing::debug!(
        first = first.id,
        second = second.id,
        workout_type = %first.workout_type,
        "Workouts compared"
    );
    Ok(Json(comparison))
}
