use axum::{body::Bytes, extract::{Path, State}, routing::{get, patch}, Json, Router};
use axum::http::StatusCode;

use crate::{
    application::todo_service::TodoService,
    domain::todo::{NewTodo, Todo, TodoPatch},
    http::types::{ApiError, Success},
};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/api/todos/:id", patch(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, Json(payload): Json<NewTodo>) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.service.create(payload).await?;
    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, body: Bytes) -> Result<Json<Todo>, ApiError> {
    let patch = parse_patch(&body)?;
    let todo = state.service.update(&id, patch).await?;
    tracing::info!(id = %todo.id, completed = todo.completed, "todo updated");
    Ok(Json(todo))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Success>, ApiError> {
    state.service.delete(&id).await?;
    tracing::info!(%id, "todo deleted");
    Ok(Json(Success { success: true }))
}

// A bare PATCH marks the todo completed.
fn parse_patch(body: &[u8]) -> Result<TodoPatch, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TodoPatch::mark_completed());
    }
    serde_json::from_slice(body).map_err(|_| ApiError::bad_request("Invalid request body"))
}
