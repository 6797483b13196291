use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::application::{Application, ApplicationView};
use super::command::{Action, Command};
use super::domain::{Classification, Resolution};
use super::tracker::{HiringTracker, TrackerError};

/// A tracker behind the coarse lock that guards concurrent collection
/// access. Commands against a single application stay serialized through it.
pub type SharedTracker = Arc<Mutex<HiringTracker>>;

/// Router builder exposing the hiring roster as JSON endpoints.
pub fn hiring_router(tracker: SharedTracker) -> Router {
    Router::new()
        .route(
            "/api/v1/hiring/applications",
            get(list_handler).post(create_handler),
        )
        .route(
            "/api/v1/hiring/applications/:id",
            get(view_handler).delete(delete_handler),
        )
        .route(
            "/api/v1/hiring/applications/:id/command",
            post(command_handler),
        )
        .route("/api/v1/hiring/roster/summary", get(summary_handler))
        .with_state(tracker)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    classification: Option<Classification>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateApplicationRequest {
    summary: String,
    note: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommandRequest {
    action: Action,
    #[serde(default)]
    reviewer_id: Option<String>,
    #[serde(default)]
    resolution: Option<Resolution>,
    note: String,
}

pub(crate) async fn list_handler(
    State(tracker): State<SharedTracker>,
    Query(query): Query<ListQuery>,
) -> Response {
    let tracker = tracker.lock().expect("tracker mutex poisoned");
    let views: Vec<ApplicationView> = match query.classification {
        Some(classification) => tracker
            .applications_by_classification(classification)
            .into_iter()
            .map(Application::view)
            .collect(),
        None => tracker
            .applications()
            .iter()
            .map(Application::view)
            .collect(),
    };
    (StatusCode::OK, Json(views)).into_response()
}

pub(crate) async fn create_handler(
    State(tracker): State<SharedTracker>,
    Json(payload): Json<CreateApplicationRequest>,
) -> Response {
    let mut tracker = tracker.lock().expect("tracker mutex poisoned");
    match tracker.add_application(payload.summary, payload.note) {
        Ok(id) => {
            let view = tracker.application(id).map(Application::view);
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn view_handler(
    State(tracker): State<SharedTracker>,
    Path(id): Path<u32>,
) -> Response {
    let tracker = tracker.lock().expect("tracker mutex poisoned");
    match tracker.application(id) {
        Some(application) => (StatusCode::OK, Json(application.view())).into_response(),
        None => not_found(id),
    }
}

pub(crate) async fn command_handler(
    State(tracker): State<SharedTracker>,
    Path(id): Path<u32>,
    Json(payload): Json<CommandRequest>,
) -> Response {
    let command = match Command::new(
        payload.action,
        payload.reviewer_id,
        payload.resolution,
        payload.note,
    ) {
        Ok(command) => command,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let mut tracker = tracker.lock().expect("tracker mutex poisoned");
    match tracker.execute(id, &command) {
        Ok(()) => {
            let view = tracker.application(id).map(Application::view);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(TrackerError::UnknownApplication(_)) => not_found(id),
        Err(TrackerError::Transition(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn delete_handler(
    State(tracker): State<SharedTracker>,
    Path(id): Path<u32>,
) -> Response {
    let mut tracker = tracker.lock().expect("tracker mutex poisoned");
    match tracker.remove(id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => not_found(id),
    }
}

pub(crate) async fn summary_handler(State(tracker): State<SharedTracker>) -> Response {
    let tracker = tracker.lock().expect("tracker mutex poisoned");
    (StatusCode::OK, Json(tracker.roster_summary())).into_response()
}

fn not_found(id: u32) -> Response {
    let payload = json!({ "error": format!("no application with id {id}") });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}
