/// The JSON envelope wrapping every API result
///
/// ```json
/// { "success": true, "message": "user fetched successfully", "data": { ... } }
/// { "success": false, "message": "user not found", "error": "not_found" }
/// { "success": false, "message": "route not found", "path": "/nonexistent" }
/// ```
///
/// `data`, `error` and `path` are omitted when not set.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    pub success: bool,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error kind code, only on failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Requested path, only on unmatched routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful result carrying `data`
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            path: None,
        }
    }

    /// Successful result with no payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
            path: None,
        }
    }

    pub fn failure(message: impl Into<String>, code: &str) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(code.to_string()),
            path: None,
        }
    }

    pub fn route_not_found(path: impl Into<String>) -> Self {
        Self {
            success: false,
            message: "route not found".to_string(),
            data: None,
            error: None,
            path: Some(path.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
