/// Database models for usertodo
///
/// Each model owns its row type and the single parameterized statement behind
/// every operation. Constraint enforcement (NOT NULL, unique email, foreign
/// keys) is left to PostgreSQL; callers map the resulting `sqlx::Error`.
///
/// # Models
///
/// - `user`: People who own todos
/// - `todo`: Todo items, removed with their owning user
///
/// # Example
///
/// ```no_run
/// use usertodo_shared::models::user::{User, CreateUser};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let new_user = CreateUser {
///     name: Some("Ann".to_string()),
///     email: Some("ann@example.com".to_string()),
///     ..Default::default()
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod todo;
pub mod user;
