//! # usertodo API Server
//!
//! Startup sequence:
//! 1. Load configuration (environment, optionally `.env`)
//! 2. Initialize tracing
//! 3. Connect the PostgreSQL pool
//! 4. Create the `users` and `todos` tables if absent
//! 5. Serve HTTP until Ctrl-C, then close the pool
//!
//! Any failure before serving aborts startup with a non-zero exit status.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/usertodo cargo run -p usertodo-api
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usertodo_api::{
    app::{build_router, AppState},
    config::{Config, LogFormat},
};
use usertodo_shared::db::{pool, schema};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    tracing::info!(
        "usertodo API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let db = pool::create_pool(config.pool_config()).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to database");
        e
    })?;

    schema::init_schema(&db).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize database schema");
        e
    })?;

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(db.clone(), config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let stats = pool::get_pool_stats(&db);
    tracing::info!(
        active = stats.active_connections,
        idle = stats.idle_connections,
        total = stats.total_connections,
        "Database pool at shutdown"
    );
    pool::close_pool(db).await;
    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "usertodo_api=debug,usertodo_shared=info,tower_http=debug".into());

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
