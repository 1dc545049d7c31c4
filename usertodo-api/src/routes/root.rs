/// Root endpoints
///
/// ```text
/// GET  /   -> 200 text/plain greeting
/// POST /   -> 201 {"success": true, "message": "API is working"}
/// ```

use crate::response::Envelope;
use axum::http::StatusCode;

pub const GREETING: &str = "Hello Next level developer";

/// Plain-text greeting
pub async fn greeting() -> &'static str {
    GREETING
}

/// Liveness echo; the request body is ignored
pub async fn echo() -> (StatusCode, Envelope<()>) {
    (StatusCode::CREATED, Envelope::message("API is working"))
}
