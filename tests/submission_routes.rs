mod common;

use artist_directory::submission::submission_router;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::*;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).expect("request builds")
}

fn put_json(uri: &str, payload: Value) -> Request<Body> {
    Request::put(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn wizard_session_walks_to_submission() {
    let (service, handler) = service();
    let router = submission_router(service);

    let (status, body) = send(&router, post("/api/v1/submissions")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["step"], "basic_info");
    assert_eq!(body["stepIndex"], 0);
    assert_eq!(body["totalSteps"], 5);
    assert_eq!(body["isFirstStep"], true);
    let id = body["wizardId"].as_str().expect("wizard id").to_string();
    let base = format!("/api/v1/submissions/{id}");

    for payload in [basic_info(), artist_types(), identity(), socials()] {
        let (status, _) = send(&router, put_json(&format!("{base}/draft"), payload)).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&router, post(&format!("{base}/next"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&router, get(&base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "review_submit");
    assert_eq!(body["isLastStep"], true);

    let (status, card) = send(&router, get(&format!("{base}/preview"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card["id"], "preview-id");
    assert_eq!(card["name"], "Nova Reyes");
    assert_eq!(card["isVerified"], false);

    let (status, body) = send(&router, post(&format!("{base}/next"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submitted"], true);
    assert_eq!(body["receipt"]["artistName"], "Nova Reyes");
    assert_eq!(handler.received().len(), 1);

    let (status, _) = send(&router, post(&format!("{base}/back"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_step_returns_field_errors() {
    let (service, _) = service();
    let router = submission_router(service);

    let (_, body) = send(&router, post("/api/v1/submissions")).await;
    let id = body["wizardId"].as_str().expect("wizard id").to_string();
    let base = format!("/api/v1/submissions/{id}");

    send(
        &router,
        put_json(
            &format!("{base}/draft"),
            json!({ "name": "A", "profilePicture": "nope" }),
        ),
    )
    .await;
    let (status, body) = send(&router, post(&format!("{base}/next"))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["step"], "basic_info");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|error| error["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["name", "profilePicture"]);

    let (_, body) = send(&router, get(&base)).await;
    assert_eq!(body["stepIndex"], 0);
}

#[tokio::test]
async fn malformed_draft_and_unknown_sessions_are_reported() {
    let (service, _) = service();
    let router = submission_router(service);

    let (_, body) = send(&router, post("/api/v1/submissions")).await;
    let id = body["wizardId"].as_str().expect("wizard id").to_string();

    let (status, _) = send(
        &router,
        put_json(
            &format!("/api/v1/submissions/{id}/draft"),
            json!({ "types": ["Juggler"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&router, get("/api/v1/submissions/wiz-missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "submission session not found");
}
