// SPDX-License-Identifier: MIT

//! Integration tests for the profile routes.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_json, create_test_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_get_profile() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/api/profile").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Alex Johnson");
    assert_eq!(body["username"], "alexj");
    assert_eq!(body["preferences"]["units"], "metric");
    assert_eq!(body["stats"]["total_workouts"], 87);
}

#[tokio::test]
async fn test_update_profile_merges_patch() {
    let (app, _) = create_test_app();

    let payload = json!({
        "weight_kg": 73.5,
        "preferences": {
            "dark_mode": true,
            "notifications": true,
            "email_updates": false,
            "units": "imperial"
        }
    });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/profile")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["weight_kg"], 73.5);
    assert_eq!(body["preferences"]["dark_mode"], true);
    // Untouched fields survive the patch
    assert_eq!(body["name"], "Alex Johnson");
    assert_eq!(body["email"], "alex.johnson@example.com");

    // The change persists for subsequent reads
    let response = app
        .oneshot(Request::builder().uri("/api/profile").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["preferences"]["units"], "imperial");
}
