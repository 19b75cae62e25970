// SPDX-License-Identifier: MIT

//! Social feed, friends, and suggestions routes.

use crate::error::{AppError, Result};
use crate::models::social::{FeedPost, Friend, FriendSuggestion, NewPost};
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/social/feed", get(get_feed).post(create_post))
        .route("/api/social/friends", get(get_friends))
        .route("/api/social/suggestions", get(get_suggestions))
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub feed: Vec<FeedPost>,
}

async fn get_feed(State(state): State<Arc<AppState>>) -> Result<Json<FeedResponse>> {
    Ok(Json(FeedResponse {
        feed: state.store.list_feed().await,
    }))
}

/// Post to the feed as the signed-in user.
async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewPost>,
) -> Result<(StatusCode, Json<FeedPost>)> {
    if new.caption.trim().is_empty() {
        return Err(AppError::BadRequest("caption is required".to_string()));
    }

    let post = state.store.insert_post(new).await;
    tracing::info!(id = post.id, post_type = ?post.post_type, "Feed post created");

    Ok((StatusCode::CREATED, Json(post)))
}

#[derive(Serialize)]
pub struct FriendsResponse {
    pub friends: Vec<Friend>,
}

async fn get_friends(State(state): State<Arc<AppState>>) -> Result<Json<FriendsResponse>> {
    Ok(Json(FriendsResponse {
        friends: state.store.list_friends().await,
    }))
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<FriendSuggestion>,
}

async fn get_suggestions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuggestionsResponse>> {
    Ok(Json(SuggestionsResponse {
        suggestions: state.store.list_suggestions().await,
    }))
}
