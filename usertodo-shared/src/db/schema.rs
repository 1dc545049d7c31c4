/// Schema bootstrap
///
/// The two tables are created on every startup with `CREATE TABLE IF NOT
/// EXISTS`, so running the bootstrap against an initialized database is a
/// no-op. `todos` references `users`, so the statements run in that order.
///
/// # Example
///
/// ```no_run
/// use usertodo_shared::db::schema::init_schema;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// init_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::postgres::PgPool;
use tracing::{debug, info};

/// `users` table definition
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users(
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(150) UNIQUE NOT NULL,
    age INT,
    phone VARCHAR(15),
    address TEXT,
    created_at TIMESTAMP DEFAULT NOW(),
    updated_at TIMESTAMP DEFAULT NOW()
    )
"#;

/// `todos` table definition; depends on `users`
pub const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos(
    id SERIAL PRIMARY KEY,
    user_id INT REFERENCES users(id) ON DELETE CASCADE,
    title VARCHAR(200) NOT NULL,
    description TEXT,
    complete BOOLEAN DEFAULT FALSE,
    due_date DATE,
    created_at TIMESTAMP DEFAULT NOW(),
    updated_at TIMESTAMP DEFAULT NOW()
    )
"#;

/// Creates `users` then `todos` if they are absent
///
/// No retry is attempted. The caller decides whether a failure is fatal; the
/// API server treats it as a failed start.
///
/// # Errors
///
/// Returns the first statement's error, e.g. when the database is unreachable
/// or the role lacks `CREATE` privileges.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Initializing database schema");

    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    debug!(table = "users", "Table ready");

    sqlx::query(CREATE_TODOS_TABLE).execute(pool).await?;
    debug!(table = "todos", "Table ready");

    info!("Database schema initialized");
    Ok(())
}

/// Returns whether `table_name` exists in the connection's current schema
///
/// # Errors
///
/// Returns an error if the catalog query fails
pub async fn table_exists(pool: &PgPool, table_name: &str) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = current_schema()
            AND table_name = $1
        )",
    )
    .bind(table_name)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
