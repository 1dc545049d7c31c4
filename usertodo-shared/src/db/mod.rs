/// Database layer for usertodo
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with health checks
/// - `schema`: Idempotent `CREATE TABLE IF NOT EXISTS` bootstrap
///
/// # Example
///
/// ```no_run
/// use usertodo_shared::db::pool::{create_pool, DatabaseConfig};
/// use usertodo_shared::db::schema::init_schema;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     init_schema(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
