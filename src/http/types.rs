use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::error::TodoError;

/// Client-facing failure. The body is plain text so htmx leaves the page alone.
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
    fn from(err: TodoError) -> Self {
        let status = match err {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::ValidationRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::warn!(%status, error = %err, "mutation refused");
        Self { status, message: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response { (self.status, self.message).into_response() }
}
