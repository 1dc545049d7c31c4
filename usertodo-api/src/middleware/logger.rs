/// Request logging middleware
///
/// Emits a single line `[<timestamp>] <METHOD> <path>` for each request it
/// wraps, then always hands the request on. The timestamp is UTC ISO-8601
/// with millisecond precision, e.g. `[2026-10-19T08:30:00.000Z] GET /`.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use usertodo_api::middleware::logger::request_logger;
///
/// let app: Router = Router::new()
///     .route("/", get(|| async { "hi" }))
///     .layer(axum::middleware::from_fn(request_logger));
/// ```

use axum::{extract::Request, http::Method, middleware::Next, response::Response};
use chrono::{DateTime, SecondsFormat, Utc};

/// Logs method, path and time, then runs the rest of the stack
pub async fn request_logger(req: Request, next: Next) -> Response {
    let line = format_log_line(Utc::now(), req.method(), req.uri().path());
    tracing::info!("{}", line);

    next.run(req).await
}

pub fn format_log_line(timestamp: DateTime<Utc>, method: &Method, path: &str) -> String {
    format!(
        "[{}] {} {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        method,
        path
    )
}
