use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::verification::verification_router;

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("json body")
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn form_submission_creates_a_pending_request() {
    let router = verification_router(Arc::new(seeded_service()));
    let justification =
        "Signed to an independent label with two albums released and a national tour.";

    let response = router
        .oneshot(post_json(
            "/api/v1/verification-requests",
            json!({
                "artistName": "Lena Park",
                "justification": justification,
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["artistId"], "8");
    assert_eq!(body["id"], "req-005");
}

#[tokio::test]
async fn invalid_form_returns_field_errors() {
    let router = verification_router(Arc::new(seeded_service()));

    let response = router
        .oneshot(post_json(
            "/api/v1/verification-requests",
            json!({ "artistName": "Lena Park", "justification": "short" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["field"], "justification");
}

#[tokio::test]
async fn admin_panel_lists_and_reviews_requests() {
    let router = verification_router(Arc::new(seeded_service()));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/admin/verification-requests")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["requests"].as_array().map(Vec::len), Some(4));

    let response = router
        .clone()
        .oneshot(post_empty("/api/v1/admin/verification-requests/req-002/approve"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "Approved");

    let response = router
        .clone()
        .oneshot(post_empty("/api/v1/admin/verification-requests/req-002/deny"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = router
        .oneshot(post_empty("/api/v1/admin/verification-requests/req-404/deny"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
