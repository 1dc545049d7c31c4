/// Todo model and database operations
///
/// Todos optionally belong to a user. The foreign key cascades, so deleting a
/// user removes their todos without any application code.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS todos(
///     id SERIAL PRIMARY KEY,
///     user_id INT REFERENCES users(id) ON DELETE CASCADE,
///     title VARCHAR(200) NOT NULL,
///     description TEXT,
///     complete BOOLEAN DEFAULT FALSE,
///     due_date DATE,
///     created_at TIMESTAMP DEFAULT NOW(),
///     updated_at TIMESTAMP DEFAULT NOW()
/// );
/// ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

const TODO_COLUMNS: &str =
    "id, user_id, title, description, complete, due_date, created_at, updated_at";

/// A row of the `todos` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,

    /// Owning user; null when the todo is unassigned
    pub user_id: Option<i32>,

    pub title: String,

    pub description: Option<String>,

    /// Defaults to false on insert
    pub complete: Option<bool>,

    pub due_date: Option<NaiveDate>,

    pub created_at: Option<NaiveDateTime>,

    pub updated_at: Option<NaiveDateTime>,
}

/// Input for creating a todo
///
/// A missing `title` is rejected by `NOT NULL`; an unknown `user_id` by the
/// foreign key. `complete` falls back to the column default when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    pub user_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub complete: Option<bool>,
    pub due_date: Option<NaiveDate>,
}

/// Input for updating a todo
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub complete: Option<bool>,
    pub due_date: Option<NaiveDate>,
}

impl Todo {
    /// Inserts a todo and returns the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `user_id` does not reference an existing user (foreign key violation)
    /// - `title` is missing (not-null violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateTodo) -> Result<Self, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (user_id, title, description, complete, due_date)
             VALUES ($1, $2, $3, COALESCE($4, FALSE), $5)
             RETURNING {TODO_COLUMNS}"
        );

        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(data.user_id)
            .bind(data.title)
            .bind(data.description)
            .bind(data.complete)
            .bind(data.due_date)
            .fetch_one(pool)
            .await?;

        Ok(todo)
    }

    /// Finds a todo by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1");

        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(todo)
    }

    /// Lists every todo, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY id");

        let todos = sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await?;

        Ok(todos)
    }

    /// Lists the todos owned by `user_id`, oldest first
    ///
    /// An unknown user simply has no todos.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos WHERE user_id = $1 ORDER BY id");

        let todos = sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(todos)
    }

    /// Updates the provided fields and stamps `updated_at`
    ///
    /// # Returns
    ///
    /// The updated todo, or None if no row has this ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateTodo,
    ) -> Result<Option<Self>, sqlx::Error> {
        let query = format!(
            "UPDATE todos
             SET title = COALESCE($1, title),
                 description = COALESCE($2, description),
                 complete = COALESCE($3, complete),
                 due_date = COALESCE($4, due_date),
                 updated_at = NOW()
             WHERE id = $5
             RETURNING {TODO_COLUMNS}"
        );

        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(data.title)
            .bind(data.description)
            .bind(data.complete)
            .bind(data.due_date)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(todo)
    }

    /// Deletes a todo by ID
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the todo didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_todo_parses_due_date() {
        let create: CreateTodo =
            serde_json::from_str(r#"{"user_id":1,"title":"Ship it","due_date":"2026-11-01"}"#)
                .unwrap();

        assert_eq!(create.user_id, Some(1));
        assert_eq!(create.title.as_deref(), Some("Ship it"));
        assert_eq!(create.due_date, NaiveDate::from_ymd_opt(2026, 11, 1));
        assert!(create.complete.is_none());
    }

    #[test]
    fn test_update_todo_default_changes_nothing() {
        let update = UpdateTodo::default();
        assert!(update.title.is_none());
        assert!(update.description.is_none());
        assert!(update.complete.is_none());
        assert!(update.due_date.is_none());
    }
}
