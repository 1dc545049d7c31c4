/// Todo endpoints
///
/// # Endpoints
///
/// - `POST /todos` - Create todo
/// - `GET /todos` - List todos
/// - `GET /todos/:id` - Fetch todo
/// - `PUT /todos/:id` - Update the provided fields
/// - `DELETE /todos/:id` - Delete todo

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    response::Envelope,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use usertodo_shared::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Create todo
///
/// # Request
///
/// ```json
/// { "user_id": 1, "title": "Buy milk" }
/// ```
///
/// `description`, `complete` and `due_date` (YYYY-MM-DD) are optional. An
/// unknown `user_id` or a missing `title` is a 400.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> ApiResult<(StatusCode, Envelope<Todo>)> {
    let Json(data) = payload?;

    let todo = Todo::create(&state.db, data).await?;
    tracing::info!(todo_id = todo.id, user_id = ?todo.user_id, "Todo created");

    Ok((StatusCode::CREATED, Envelope::success("Todo created", todo)))
}

pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Envelope<Vec<Todo>>> {
    let todos = Todo::list(&state.db).await?;

    Ok(Envelope::success("todos received successfully", todos))
}

pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Envelope<Todo>> {
    let Path(id) = id?;

    let todo = Todo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("todo not found".to_string()))?;

    Ok(Envelope::success("todo fetched successfully", todo))
}

/// Update a todo; fields left out of the body keep their value
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> ApiResult<Envelope<Todo>> {
    let Path(id) = id?;
    let Json(data) = payload?;

    let todo = Todo::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::NotFound("todo not found".to_string()))?;
    tracing::info!(todo_id = todo.id, "Todo updated");

    Ok(Envelope::success("Todo updated successfully", todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Envelope<()>> {
    let Path(id) = id?;

    if !Todo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("todo not found".to_string()));
    }
    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Envelope::message("todo deleted successfully"))
}
