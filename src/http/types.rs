use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::error::TodoError;

/// Wire shape of every handled error: `{ "error": "..." }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody { pub error: String }

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::Validation(_) | TodoError::InvalidId => Self::bad_request(e.to_string()),
            TodoError::NotFound => Self { status: StatusCode::NOT_FOUND, message: e.to_string() },
            TodoError::Store(cause) => {
                tracing::error!(error = %cause, "store operation failed");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: "Internal server error".into() }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, axum::Json(ErrorBody { error: self.message })).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Success { pub success: bool }
