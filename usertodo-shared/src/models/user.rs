/// User model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS users(
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(100) NOT NULL,
///     email VARCHAR(150) UNIQUE NOT NULL,
///     age INT,
///     phone VARCHAR(15),
///     address TEXT,
///     created_at TIMESTAMP DEFAULT NOW(),
///     updated_at TIMESTAMP DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use usertodo_shared::models::user::{User, CreateUser};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let user = User::create(
///     &pool,
///     CreateUser {
///         name: Some("Ann".to_string()),
///         email: Some("ann@example.com".to_string()),
///         ..Default::default()
///     },
/// )
/// .await?;
///
/// let found = User::find_by_id(&pool, user.id).await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

const USER_COLUMNS: &str = "id, name, email, age, phone, address, created_at, updated_at";

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Generated primary key
    pub id: i32,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    pub age: Option<i32>,

    pub phone: Option<String>,

    pub address: Option<String>,

    /// Set by the column default on insert
    pub created_at: Option<NaiveDateTime>,

    /// Set on insert and on every update
    pub updated_at: Option<NaiveDateTime>,
}

/// Input for creating a user
///
/// `name` and `email` are optional here on purpose: a missing value is bound as
/// NULL and rejected by the column's `NOT NULL` constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Input for replacing a user's name and email
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Inserts a user and returns the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists (unique constraint violation)
    /// - `name` or `email` is missing (not-null violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, age, phone, address)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(data.name)
            .bind(data.email)
            .bind(data.age)
            .bind(data.phone)
            .bind(data.address)
            .fetch_one(pool)
            .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Lists every user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");

        let users = sqlx::query_as::<_, User>(&query).fetch_all(pool).await?;

        Ok(users)
    }

    /// Replaces `name` and `email` and stamps `updated_at`
    ///
    /// Both columns are always written, so a missing field violates `NOT NULL`.
    ///
    /// # Returns
    ///
    /// The updated user, or None if no row has this ID
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists for another user
    /// - A required field is missing
    /// - Database connection fails
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let query = format!(
            "UPDATE users
             SET name = $1, email = $2, updated_at = NOW()
             WHERE id = $3
             RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(data.name)
            .bind(data.email)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Deletes a user by ID; the database cascades the delete to their todos
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the user didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
