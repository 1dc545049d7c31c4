/// End-to-end tests for the users and todos API
///
/// These tests need PostgreSQL at `DATABASE_URL` and are skipped without it.
/// Every test gets a private schema, so they can run in parallel.

mod common;

use axum::http::StatusCode;
use common::{empty_request, json_request, TestContext};
use serde_json::json;

macro_rules! test_context {
    () => {
        match TestContext::new().await.expect("test context") {
            Some(ctx) => ctx,
            None => return,
        }
    };
}

#[tokio::test]
async fn test_user_lifecycle() {
    let ctx = test_context!();

    let (status, body) = ctx
        .send(json_request(
            "POST",
            "/users",
            json!({"name": "Ann", "email": "ann@x.com"}),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Data inserted");
    assert_eq!(body["data"]["name"], "Ann");
    assert_eq!(body["data"]["email"], "ann@x.com");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, fetched) = ctx.send(empty_request("GET", &format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["message"], "user fetched successfully");
    assert_eq!(fetched["data"], body["data"]);

    let (status, deleted) = ctx
        .send(empty_request("DELETE", &format!("/users/{id}")))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        deleted,
        json!({"success": true, "message": "user deleted successfully"})
    );

    let (status, gone) = ctx.send(empty_request("GET", &format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(gone["success"], false);
    assert_eq!(gone["message"], "user not found");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_list_users_empty_then_populated() {
    let ctx = test_context!();

    let (status, body) = ctx.send(empty_request("GET", "/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));

    ctx.create_user("Ann", "ann@x.com").await;
    ctx.create_user("Bo", "bo@x.com").await;

    let (status, body) = ctx.send(empty_request("GET", "/users")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ann", "Bo"]);

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let ctx = test_context!();

    ctx.create_user("Ann", "same@x.com").await;
    let (status, body) = ctx
        .send(json_request(
            "POST",
            "/users",
            json!({"name": "Imposter", "email": "same@x.com"}),
        ))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "conflict");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_missing_required_field_is_validation_error() {
    let ctx = test_context!();

    let (status, body) = ctx
        .send(json_request("POST", "/users", json!({"email": "nameless@x.com"})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let ctx = test_context!();

    let (status, body) = ctx.send(empty_request("GET", "/users/999999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_update_user() {
    let ctx = test_context!();

    let id = ctx.create_user("Ann", "ann@x.com").await;
    let (status, body) = ctx
        .send(json_request(
            "PUT",
            &format!("/users/{id}"),
            json!({"name": "Annie", "email": "annie@x.com"}),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["data"]["name"], "Annie");
    assert_eq!(body["data"]["email"], "annie@x.com");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_update_unknown_user_leaves_table_unchanged() {
    let ctx = test_context!();

    let id = ctx.create_user("Ann", "ann@x.com").await;
    let (status, body) = ctx
        .send(json_request(
            "PUT",
            "/users/999999",
            json!({"name": "Ghost", "email": "ghost@x.com"}),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (_, list) = ctx.send(empty_request("GET", "/users")).await;
    let users = list["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], id);
    assert_eq!(users[0]["name"], "Ann");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found() {
    let ctx = test_context!();

    let (status, body) = ctx.send(empty_request("DELETE", "/users/999999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "user not found");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_todo() {
    let ctx = test_context!();

    let user_id = ctx.create_user("Ann", "ann@x.com").await;
    let (status, body) = ctx
        .send(json_request(
            "POST",
            "/todos",
            json!({"user_id": user_id, "title": "Buy milk"}),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Todo created");
    assert_eq!(body["data"]["user_id"], user_id);
    assert_eq!(body["data"]["title"], "Buy milk");
    assert_eq!(body["data"]["complete"], false);

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_todo_for_unknown_user_is_rejected() {
    let ctx = test_context!();

    let (status, body) = ctx
        .send(json_request(
            "POST",
            "/todos",
            json!({"user_id": 999999, "title": "Orphan"}),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_deleting_user_cascades_to_todos() {
    let ctx = test_context!();

    let user_id = ctx.create_user("Ann", "ann@x.com").await;
    let (_, todo) = ctx
        .send(json_request(
            "POST",
            "/todos",
            json!({"user_id": user_id, "title": "Goes away"}),
        ))
        .await;
    let todo_id = todo["data"]["id"].as_i64().unwrap();

    let (status, _) = ctx
        .send(empty_request("DELETE", &format!("/users/{user_id}")))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = ctx
        .send(empty_request("GET", &format!("/todos/{todo_id}")))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, todos) = ctx.send(empty_request("GET", "/todos")).await;
    assert_eq!(todos["data"], json!([]));

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_todo_update_and_delete() {
    let ctx = test_context!();

    let user_id = ctx.create_user("Ann", "ann@x.com").await;
    let (_, created) = ctx
        .send(json_request(
            "POST",
            "/todos",
            json!({
                "user_id": user_id,
                "title": "Write report",
                "description": "Q3 numbers",
                "due_date": "2026-11-01"
            }),
        ))
        .await;
    let todo_id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["due_date"], "2026-11-01");

    let (status, updated) = ctx
        .send(json_request(
            "PUT",
            &format!("/todos/{todo_id}"),
            json!({"complete": true}),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["complete"], true);
    assert_eq!(updated["data"]["title"], "Write report");
    assert_eq!(updated["data"]["description"], "Q3 numbers");

    let (status, owned) = ctx
        .send(empty_request("GET", &format!("/users/{user_id}/todos")))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owned["data"].as_array().unwrap().len(), 1);

    let (status, _) = ctx
        .send(empty_request("DELETE", &format!("/todos/{todo_id}")))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = ctx
        .send(empty_request("DELETE", &format!("/todos/{todo_id}")))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "todo not found");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_health_reports_connected() {
    let ctx = test_context!();

    let (status, body) = ctx.send(empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_update_user_to_taken_email_is_conflict() {
    let ctx = test_context!();

    ctx.create_user("Ann", "ann@x.com").await;
    let bo = ctx.create_user("Bo", "bo@x.com").await;

    let (status, body) = ctx
        .send(json_request(
            "PUT",
            &format!("/users/{bo}"),
            json!({"name": "Bo", "email": "ann@x.com"}),
        ))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "conflict");

    let (_, fetched) = ctx.send(empty_request("GET", &format!("/users/{bo}"))).await;
    assert_eq!(fetched["data"]["email"], "bo@x.com");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_overlong_value_is_validation_error() {
    let ctx = test_context!();

    // phone is VARCHAR(15)
    let (status, body) = ctx
        .send(json_request(
            "POST",
            "/users",
            json!({"name": "Ann", "email": "ann@x.com", "phone": "+1 555 0100 0100 0100"}),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "validation_error");

    let (_, list) = ctx.send(empty_request("GET", "/users")).await;
    assert_eq!(list["data"], json!([]));

    ctx.cleanup().await.unwrap();
}
