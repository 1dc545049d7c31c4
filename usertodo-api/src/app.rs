/// Application state and router builder
///
/// The pool is created once at startup and injected into every handler
/// through `AppState`; there is no global connection state.
///
/// # Example
///
/// ```no_run
/// use usertodo_api::{app::AppState, config::Config};
/// use usertodo_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(pool, config);
/// let app = usertodo_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{
    config::Config, middleware::logger::request_logger, routes,
    routes::fallback::route_not_found,
};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /                 # Greeting (request logger attached)
/// ├── POST   /                 # Echo (request logger attached)
/// ├── GET    /health           # Health check
/// ├── /users
/// │   ├── POST   /             # Create user
/// │   ├── GET    /             # List users
/// │   ├── GET    /:id          # Fetch user
/// │   ├── PUT    /:id          # Update user
/// │   ├── DELETE /:id          # Delete user
/// │   └── GET    /:id/todos    # User's todos
/// ├── /todos
/// │   ├── POST   /             # Create todo
/// │   ├── GET    /             # List todos
/// │   ├── GET    /:id          # Fetch todo
/// │   ├── PUT    /:id          # Update todo
/// │   └── DELETE /:id          # Delete todo
/// └── *                        # 404 envelope with the requested path
/// ```
///
/// Every method router also falls back to the 404 envelope, so a known path
/// with an unsupported method gets the same answer as an unknown path.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    let root_routes = Router::new()
        .route(
            "/",
            get(routes::root::greeting)
                .post(routes::root::echo)
                .fallback(route_not_found),
        )
        .route_layer(axum::middleware::from_fn(request_logger));

    let health_routes = Router::new().route(
        "/health",
        get(routes::health::health_check).fallback(route_not_found),
    );

    let user_routes = Router::new()
        .route(
            "/users",
            get(routes::users::list_users)
                .post(routes::users::create_user)
                .fallback(route_not_found),
        )
        .route(
            "/users/:id",
            get(routes::users::get_user)
                .put(routes::users::update_user)
                .delete(routes::users::delete_user)
                .fallback(route_not_found),
        )
        .route(
            "/users/:id/todos",
            get(routes::users::list_user_todos).fallback(route_not_found),
        );

    let todo_routes = Router::new()
        .route(
            "/todos",
            get(routes::todos::list_todos)
                .post(routes::todos::create_todo)
                .fallback(route_not_found),
        )
        .route(
            "/todos/:id",
            get(routes::todos::get_todo)
                .put(routes::todos::update_todo)
                .delete(routes::todos::delete_todo)
                .fallback(route_not_found),
        );

    let cors = cors_layer(&state.config.api.cors_origins);

    Router::new()
        .merge(root_routes)
        .merge(health_routes)
        .merge(user_routes)
        .merge(todo_routes)
        .fallback(route_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}
