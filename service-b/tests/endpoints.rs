use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use server_http::environment::{FixedClock, FixedHostname};
use server_http::{build_router, AppState};
use service_b::{router, IDENTITY};
use shared::config::Config;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Service B is healthy");
}

#[tokio::test]
async fn test_root_endpoint() {
    let (status, body) = get(router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Hello from Service B"), "{body}");
    assert!(body.contains("running on"), "{body}");
    assert!(body.contains(" at "), "{body}");
}

#[test]
fn test_default_listen_address() {
    assert_eq!(Config::default().bind_addr(), "0.0.0.0:8080");
}

#[tokio::test]
async fn test_concurrent_requests() {
    const NUM_REQUESTS: usize = 10;
    let app = router();

    let handles: Vec<_> = (0..NUM_REQUESTS)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { get(app, "/").await.0 })
        })
        .collect();

    let statuses = tokio::time::timeout(Duration::from_secs(5), async {
        let mut statuses = Vec::with_capacity(NUM_REQUESTS);
        for handle in handles {
            statuses.push(handle.await.unwrap());
        }
        statuses
    })
    .await
    .expect("timeout waiting for concurrent requests to complete");

    assert_eq!(statuses.len(), NUM_REQUESTS);
    assert!(statuses.iter().all(|s| *s == StatusCode::OK));
}

#[tokio::test]
async fn test_response_format() {
    let at = chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let app = build_router(AppState::with_sources(
        IDENTITY,
        Arc::new(FixedHostname("b-host".into())),
        Arc::new(FixedClock(at)),
    ));

    let (_, body) = get(app, "/").await;
    assert_eq!(
        body,
        "Hello from Service B running on b-host at 2026-10-19 08:00:00"
    );
    assert!(body.split(' ').count() >= 8);
}

#[tokio::test]
async fn test_service_identity() {
    let (_, body) = get(router(), "/").await;
    assert!(body.starts_with("Hello from Service B"));
    assert!(!body.contains("Service A"));
}

#[tokio::test]
async fn test_health_is_idempotent() {
    let app = router();
    let first = get(app.clone(), "/health").await;
    for _ in 0..5 {
        assert_eq!(get(app.clone(), "/health").await, first);
    }
}

#[tokio::test]
async fn test_unknown_path() {
    let (status, _) = get(router(), "/unknown-path").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
