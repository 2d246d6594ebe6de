use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, patch},
    Router,
};
use serde_json::{json, Value};
use shared::{Task, TaskPayload};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::store::TaskStore;

type SharedStore = Arc<TaskStore>;

/// Wires every endpoint onto the given store. The cross-origin policy is
/// uniform: any origin, the full method set, content-type and authorization
/// headers.
pub fn build_router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(home))
        .route("/tasks", get(get_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/:id/toggle", patch(toggle_task))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}

async fn home() -> &'static str {
    "Task Manager API - Use endpoints to manage tasks"
}

async fn get_tasks(State(store): State<SharedStore>) -> Json<Vec<Task>> {
    Json(store.list())
}

async fn get_task(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    match store.get(&id) {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::NotFound),
    }
}

async fn create_task(
    State(store): State<SharedStore>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidFormat)?;
    let task = store.create(payload);
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidFormat)?;
    match store.update(&id, payload) {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::NotFound),
    }
}

async fn delete_task(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if store.delete(&id) {
        Ok(Json(json!({"status": "success", "message": "Task deleted"})))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn toggle_task(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    match store.toggle(&id) {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::NotFound),
    }
}
