/// Error handling for the API server
///
/// Every failure is classified into one of four kinds and rendered as the
/// standard envelope with `success: false`. Handlers return `ApiResult<T>` and
/// use `?` on database calls; the `From<sqlx::Error>` conversion below decides
/// the kind from the PostgreSQL error.
///
/// | Kind | Status | Typical cause |
/// |------|--------|---------------|
/// | `NotFound` | 404 | No row with the requested id |
/// | `Validation` | 400 | NOT NULL / foreign key / check violation, data exception (SQLSTATE 22xxx), malformed body or path |
/// | `Conflict` | 409 | Unique violation (duplicate email) |
/// | `Internal` | 500 | Anything else (connectivity, pool timeout, ...) |
///
/// # Example
///
/// ```
/// use usertodo_api::error::{ApiError, ApiResult};
///
/// fn lookup(found: bool) -> ApiResult<&'static str> {
///     if !found {
///         return Err(ApiError::NotFound("user not found".to_string()));
///     }
///     Ok("ok")
/// }
/// ```

use crate::response::Envelope;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::error::ErrorKind;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (400) - the input was rejected
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Conflict (409) - e.g., duplicate email
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable kind, sent as the envelope's `error` field
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Validation(_) => "validation_error",
            ApiError::Conflict(_) => "conflict",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match self {
            ApiError::NotFound(msg) | ApiError::Validation(msg) | ApiError::Conflict(msg) => msg,
            ApiError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        };

        (status, Envelope::<()>::failure(message, code)).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => ApiError::Conflict(db_err.message().to_string()),
                ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation => ApiError::Validation(db_err.message().to_string()),
                _ if is_data_exception(db_err.code().as_deref()) => {
                    ApiError::Validation(db_err.message().to_string())
                }
                _ => ApiError::Internal(format!("Database error: {}", db_err)),
            },
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// SQLSTATE class 22 (data exception): the value itself was unacceptable,
/// e.g. 22001 string too long for `VARCHAR(n)` or 22003 numeric out of range
fn is_data_exception(code: Option<&str>) -> bool {
    code.is_some_and(|code| code.starts_with("22"))
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
