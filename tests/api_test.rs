use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use countdown_ring::{create_router, AppState};

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let app = create_router(Arc::new(AppState::new(60_000)));
    let (status, body) = call(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn status_of_a_fresh_countdown() {
    let app = create_router(Arc::new(AppState::new(60_000)));
    let (status, body) = call(&app, Method::GET, "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["countdown"]["remaining_millis"], 60_000);
    assert_eq!(body["countdown"]["running"], false);
    assert_eq!(body["countdown"]["clock"], "00:01:00");
    assert_eq!(body["countdown"]["color"], "#4CAF50");
    assert_eq!(body["last_action"], Value::Null);
}

#[tokio::test(start_paused = true)]
async fn start_then_pause_counts_down() {
    let state = Arc::new(AppState::new(60_000));
    let app = create_router(Arc::clone(&state));

    let (status, body) = call(&app, Method::POST, "/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["countdown"]["running"], true);

    tokio::time::sleep(Duration::from_millis(1_025)).await;

    let (_, body) = call(&app, Method::POST, "/pause").await;
    assert_eq!(body["status"], "idle");
    assert_eq!(body["countdown"]["remaining_millis"], 59_000);
    assert_eq!(body["countdown"]["clock"], "00:00:59");

    let (_, body) = call(&app, Method::GET, "/status").await;
    assert_eq!(body["last_action"], "pause");
}

#[tokio::test(start_paused = true)]
async fn toggle_and_reset() {
    let state = Arc::new(AppState::new(60_000));
    let app = create_router(Arc::clone(&state));

    let (_, body) = call(&app, Method::POST, "/toggle").await;
    assert_eq!(body["status"], "active");

    tokio::time::sleep(Duration::from_millis(310)).await;

    let (_, body) = call(&app, Method::POST, "/reset").await;
    assert_eq!(body["status"], "idle");
    assert_eq!(body["countdown"]["remaining_millis"], 60_000);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(state.get_countdown().unwrap().remaining_millis(), 60_000);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = create_router(Arc::new(AppState::new(60_000)));
    let request = Request::builder().uri("/coffee").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
