/// User endpoints
///
/// Each handler runs exactly one statement through the injected pool.
///
/// # Endpoints
///
/// - `POST /users` - Create user
/// - `GET /users` - List users
/// - `GET /users/:id` - Fetch user
/// - `PUT /users/:id` - Replace name and email
/// - `DELETE /users/:id` - Delete user (cascades to their todos)
/// - `GET /users/:id/todos` - List the user's todos

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
use usertodo_shared::models::{
    todo::Todo,
    user::{CreateUser, UpdateUser, User},
};

/// Create user
///
/// # Request
///
/// ```json
/// { "name": "Ann", "email": "ann@x.com" }
/// ```
///
/// `age`, `phone` and `address` are accepted as well. A duplicate email is a
/// 409; a missing `name` or `email` is a 400 raised by the database.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> ApiResult<(StatusCode, Envelope<User>)> {
    let Json(data) = payload?;

    let user = User::create(&state.db, data).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Envelope::success("Data inserted", user)))
}

/// List users
///
/// An empty table yields an empty array, not an error.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Envelope<Vec<User>>> {
    let users = User::list(&state.db).await?;

    Ok(Envelope::success("users received successfully", users))
}

/// Fetch one user
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Envelope<User>> {
    let Path(id) = id?;

    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    Ok(Envelope::success("user fetched successfully", user))
}

/// Replace a user's name and email
///
/// Both fields are written; omitting one is rejected by `NOT NULL`.
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> ApiResult<Envelope<User>> {
    let Path(id) = id?;
    let Json(data) = payload?;

    let user = User::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    tracing::info!(user_id = user.id, "User updated");

    Ok(Envelope::success("User updated successfully", user))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Envelope<()>> {
    let Path(id) = id?;

    if !User::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("user not found".to_string()));
    }
    tracing::info!(user_id = id, "User deleted");

    Ok(Envelope::message("user deleted successfully"))
}

/// List the todos owned by a user
///
/// An unknown user id returns an empty array.
pub async fn list_user_todos(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Envelope<Vec<Todo>>> {
    let Path(id) = id?;

    let todos = Todo::list_by_user(&state.db, id).await?;

    Ok(Envelope::success("todos received successfully", todos))
}
