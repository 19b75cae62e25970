// SPDX-License-Identifier: MIT

use fittrack_api::config::Config;
use fittrack_api::routes::create_router;
use fittrack_api::store::MemoryStore;
use fittrack_api::AppState;
use std::sync::Arc;
use std::time::Duration;

/// Create a test app with a freshly seeded zero-latency store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let store = MemoryStore::seeded(Duration::ZERO);

    let state = Arc::new(AppState { config, store });

    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
