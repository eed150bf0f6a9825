use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{ReviewDecision, VerificationForm, VerificationRequestId};
use super::repository::VerificationRepository;
use super::service::{VerificationError, VerificationService};
use crate::roster::ArtistSource;

/// Router builder for the verification form and the admin review panel.
pub fn verification_router<R, S>(service: Arc<VerificationService<R, S>>) -> Router
where
    R: VerificationRepository + 'static,
    S: ArtistSource + 'static,
{
    Router::new()
        .route("/api/v1/verification-requests", post(request_handler::<R, S>))
        .route(
            "/api/v1/admin/verification-requests",
            get(list_handler::<R, S>),
        )
        .route(
            "/api/v1/admin/verification-requests/:request_id/approve",
            post(approve_handler::<R, S>),
        )
        .route(
            "/api/v1/admin/verification-requests/:request_id/deny",
            post(deny_handler::<R, S>),
        )
        .with_state(service)
}

pub(crate) async fn request_handler<R, S>(
    State(service): State<Arc<VerificationService<R, S>>>,
    Json(form): Json<VerificationForm>,
) -> Response
where
    R: VerificationRepository + 'static,
    S: ArtistSource + 'static,
{
    let today = Local::now().date_naive();
    match service.request(form, today) {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R, S>(
    State(service): State<Arc<VerificationService<R, S>>>,
) -> Response
where
    R: VerificationRepository + 'static,
    S: ArtistSource + 'static,
{
    match service.list() {
        Ok(requests) => (StatusCode::OK, Json(json!({ "requests": requests }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn approve_handler<R, S>(
    State(service): State<Arc<VerificationService<R, S>>>,
    Path(request_id): Path<String>,
) -> Response
where
    R: VerificationRepository + 'static,
    S: ArtistSource + 'static,
{
    review(&service, request_id, ReviewDecision::Approve)
}

pub(crate) async fn deny_handler<R, S>(
    State(service): State<Arc<VerificationService<R, S>>>,
    Path(request_id): Path<String>,
) -> Response
where
    R: VerificationRepository + 'static,
    S: ArtistSource + 'static,
{
    review(&service, request_id, ReviewDecision::Deny)
}

fn review<R, S>(
    service: &VerificationService<R, S>,
    request_id: String,
    decision: ReviewDecision,
) -> Response
where
    R: VerificationRepository + 'static,
    S: ArtistSource + 'static,
{
    match service.review(&VerificationRequestId(request_id), decision) {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: VerificationError) -> Response {
    match error {
        VerificationError::Validation(errors) => {
            let payload = json!({
                "error": "validation failed",
                "errors": errors.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        VerificationError::NotFound(id) => {
            let payload = json!({
                "error": "verification request not found",
                "request_id": id,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        error @ VerificationError::InvalidTransition { .. } => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        VerificationError::Repository(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
