use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AdmissionId, ApplicationId, ApplicationPatch, ApplicationSubmission};
use super::repository::{AdmissionStore, ApplicationStore, DecisionNotifier, RegistryError};
use super::service::{ApplicationsService, GuidanceServiceError};

/// Router builder exposing HTTP endpoints for intake, review, and admissions.
pub fn applications_router<S, D, N>(service: Arc<ApplicationsService<S, D, N>>) -> Router
where
    S: ApplicationStore + 'static,
    D: AdmissionStore + 'static,
    N: DecisionNotifier + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(submit_handler::<S, D, N>))
        .route(
            "/api/v1/applications/:application_id",
            get(status_handler::<S, D, N>)
                .patch(decide_handler::<S, D, N>)
                .delete(withdraw_handler::<S, D, N>),
        )
        .route(
            "/api/v1/admissions/:admission_id",
            get(admission_handler::<S, D, N>),
        )
        .with_state(service)
}

fn error_response(error: GuidanceServiceError) -> Response {
    let status = match &error {
        GuidanceServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        GuidanceServiceError::Registry(RegistryError::Conflict) => StatusCode::CONFLICT,
        GuidanceServiceError::Registry(RegistryError::NotFound) => StatusCode::NOT_FOUND,
        GuidanceServiceError::Registry(RegistryError::Unavailable(_))
        | GuidanceServiceError::Notification(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<S, D, N>(
    State(service): State<Arc<ApplicationsService<S, D, N>>>,
    axum::Json(submission): axum::Json<ApplicationSubmission>,
) -> Response
where
    S: ApplicationStore + 'static,
    D: AdmissionStore + 'static,
    N: DecisionNotifier + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<S, D, N>(
    State(service): State<Arc<ApplicationsService<S, D, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    S: ApplicationStore + 'static,
    D: AdmissionStore + 'static,
    N: DecisionNotifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn decide_handler<S, D, N>(
    State(service): State<Arc<ApplicationsService<S, D, N>>>,
    Path(application_id): Path<String>,
    axum::Json(patch): axum::Json<ApplicationPatch>,
) -> Response
where
    S: ApplicationStore + 'static,
    D: AdmissionStore + 'static,
    N: DecisionNotifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.decide(&id, patch) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn withdraw_handler<S, D, N>(
    State(service): State<Arc<ApplicationsService<S, D, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    S: ApplicationStore + 'static,
    D: AdmissionStore + 'static,
    N: DecisionNotifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.withdraw(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn admission_handler<S, D, N>(
    State(service): State<Arc<ApplicationsService<S, D, N>>>,
    Path(admission_id): Path<String>,
) -> Response
where
    S: ApplicationStore + 'static,
    D: AdmissionStore + 'static,
    N: DecisionNotifier + 'static,
{
    let id = AdmissionId(admission_id);
    match service.admission(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}
