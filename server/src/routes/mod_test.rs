use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn base_routes_serve_healthz() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn base_routes_reject_unknown_paths() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/plans").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn get_app_page(uri: &str) -> (StatusCode, String) {
    let response = app()
        .unwrap()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn app_serves_plans_in_wide_shell() {
    let (status, body) = get_app_page("/plans").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("w-full px-4 max-w-5xl"), "{body}");
}

#[tokio::test]
async fn app_serves_login_in_standard_shell() {
    let (status, body) = get_app_page("/login").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("w-full px-4 max-w-md"), "{body}");
    assert!(!body.contains("max-w-5xl"), "{body}");
}

#[tokio::test]
async fn app_still_serves_healthz() {
    let (status, _) = get_app_page("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}
