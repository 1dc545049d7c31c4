/// Catch-all for requests no route matched
///
/// Installed with `Router::fallback` for unknown paths and as each method
/// router's fallback for known paths called with an unsupported method.

use crate::response::Envelope;
use axum::{http::{StatusCode, Uri}, response::IntoResponse};

pub async fn route_not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Envelope::<()>::route_not_found(uri.path()),
    )
}
