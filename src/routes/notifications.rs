// SPDX-License-Identifier: MIT

//! Notification routes.

use crate::error::{AppError, Result};
use crate::models::notification::Notification;
use crate::routes::workouts::DeleteResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/notifications", get(get_notifications))
        .route("/api/notifications/{id}/read", post(mark_read))
        .route("/api/notifications/read-all", post(mark_all_read))
}

/// Notifications split by read state, each most recent first.
#[derive(Serialize)]
pub struct NotificationsResponse {
    pub unread: Vec<Notification>,
    pub read: Vec<Notification>,
}

async fn get_notifications(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NotificationsResponse>> {
    let (read, unread) = state
        .store
        .list_notifications()
        .await
        .into_iter()
        .partition(|n| n.read);

    Ok(Json(NotificationsResponse { unread, read }))
}

async fn mark_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    if !state.store.mark_notification_read(id).await {
        return Err(AppError::NotFound(format!("Notification {id} not found")));
    }

    Ok(Json(DeleteResponse { success: true }))
}

#[derive(Serialize)]
pub struct MarkAllReadResponse {
    pub marked: usize,
}

async fn mark_all_read(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MarkAllReadResponse>> {
    let marked = state.store.mark_all_notifications_read().await;
    tracing::debug!(marked, "Notifications marked read");

    Ok(Json(MarkAllReadResponse { marked }))
}
