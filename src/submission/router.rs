use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Map, Value};

use super::handler::SubmissionHandler;
use super::repository::{WizardId, WizardRecord, WizardRepository};
use super::service::{SubmissionService, SubmissionServiceError, WizardView};
use super::wizard::WizardError;
use crate::repository::RepositoryError;

/// Router builder exposing the submission wizard as HTTP session resources.
pub fn submission_router<R, H>(service: Arc<SubmissionService<R, H>>) -> Router
where
    R: WizardRepository + 'static,
    H: SubmissionHandler + 'static,
{
    Router::new()
        .route("/api/v1/submissions", post(start_handler::<R, H>))
        .route("/api/v1/submissions/:wizard_id", get(status_handler::<R, H>))
        .route(
            "/api/v1/submissions/:wizard_id/draft",
            put(draft_handler::<R, H>),
        )
        .route("/api/v1/submissions/:wizard_id/next", post(next_handler::<R, H>))
        .route("/api/v1/submissions/:wizard_id/back", post(back_handler::<R, H>))
        .route(
            "/api/v1/submissions/:wizard_id/preview",
            get(preview_handler::<R, H>),
        )
        .with_state(service)
}

pub(crate) async fn start_handler<R, H>(
    State(service): State<Arc<SubmissionService<R, H>>>,
) -> Response
where
    R: WizardRepository + 'static,
    H: SubmissionHandler + 'static,
{
    match service.start() {
        Ok(record) => (StatusCode::CREATED, Json(WizardView::from(&record))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, H>(
    State(service): State<Arc<SubmissionService<R, H>>>,
    Path(wizard_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
    H: SubmissionHandler + 'static,
{
    view_response(service.get(&WizardId(wizard_id)))
}

pub(crate) async fn draft_handler<R, H>(
    State(service): State<Arc<SubmissionService<R, H>>>,
    Path(wizard_id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> Response
where
    R: WizardRepository + 'static,
    H: SubmissionHandler + 'static,
{
    view_response(service.update_draft(&WizardId(wizard_id), patch))
}

pub(crate) async fn next_handler<R, H>(
    State(service): State<Arc<SubmissionService<R, H>>>,
    Path(wizard_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
    H: SubmissionHandler + 'static,
{
    view_response(service.next(&WizardId(wizard_id)))
}

pub(crate) async fn back_handler<R, H>(
    State(service): State<Arc<SubmissionService<R, H>>>,
    Path(wizard_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
    H: SubmissionHandler + 'static,
{
    view_response(service.back(&WizardId(wizard_id)))
}

pub(crate) async fn preview_handler<R, H>(
    State(service): State<Arc<SubmissionService<R, H>>>,
    Path(wizard_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
    H: SubmissionHandler + 'static,
{
    match service.preview(&WizardId(wizard_id)) {
        Ok(card) => (StatusCode::OK, Json(card)).into_response(),
        Err(error) => error_response(error),
    }
}

fn view_response(
    result: Result<WizardRecord, SubmissionServiceError>,
) -> Response {
    match result {
        Ok(record) => (StatusCode::OK, Json(WizardView::from(&record))).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SubmissionServiceError) -> Response {
    match error {
        SubmissionServiceError::Wizard(WizardError::Invalid { step, errors }) => {
            let payload = json!({
                "error": "validation failed",
                "step": step,
                "errors": errors.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        SubmissionServiceError::Wizard(
            error @ (WizardError::AlreadySubmitted | WizardError::NotOnFinalStep { .. }),
        ) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        SubmissionServiceError::Wizard(WizardError::Draft(error)) => {
            let payload = json!({ "error": format!("invalid draft: {error}") });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        SubmissionServiceError::Wizard(WizardError::Handler(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
        SubmissionServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "submission session not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        SubmissionServiceError::Repository(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
