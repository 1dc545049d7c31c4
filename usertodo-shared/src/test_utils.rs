/// Helpers for tests that need a real PostgreSQL database
///
/// Each `TestDatabase` lives in its own freshly created schema: every pooled
/// connection gets `search_path` pointed at it, so tests running in parallel
/// against one database never see each other's rows.
///
/// The database comes from `DATABASE_URL`. When the variable is not set,
/// `TestDatabase::from_env` returns `None` and callers skip the test.

use crate::db::schema::init_schema;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Executor;
use std::sync::atomic::{AtomicU64, Ordering};

static SCHEMA_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A pool scoped to a private, initialized schema
pub struct TestDatabase {
    pub pool: PgPool,
    pub schema: String,
}

impl TestDatabase {
    /// Connects to `DATABASE_URL` inside a new schema with both tables created
    ///
    /// Returns `Ok(None)` when `DATABASE_URL` is unset.
    pub async fn from_env() -> Result<Option<Self>, sqlx::Error> {
        match std::env::var("DATABASE_URL") {
            Ok(url) => Self::connect(&url).await.map(Some),
            Err(_) => {
                eprintln!("DATABASE_URL not set, skipping database test");
                Ok(None)
            }
        }
    }

    /// Connects to `url` inside a new schema with both tables created
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let schema = unique_schema_name();
        let search_path = format!("SET search_path TO {schema}");

        let pool = PgPoolOptions::new()
            .max_connections(4)
            .after_connect(move |conn, _meta| {
                let statement = search_path.clone();
                Box::pin(async move {
                    conn.execute(statement.as_str()).await?;
                    Ok(())
                })
            })
            .connect(url)
            .await?;

        pool.execute(format!("CREATE SCHEMA IF NOT EXISTS {schema}").as_str())
            .await?;
        init_schema(&pool).await?;

        Ok(Self { pool, schema })
    }

    /// Drops the schema and everything in it, then closes the pool
    pub async fn cleanup(self) -> Result<(), sqlx::Error> {
        self.pool
            .execute(format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema).as_str())
            .await?;
        self.pool.close().await;
        Ok(())
    }
}

/// Returns a value that is unique across tests in this process and across runs
pub fn unique_suffix() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let n = SCHEMA_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{nanos}_{n}")
}

fn unique_schema_name() -> String {
    format!("usertodo_test_{}", unique_suffix())
}
