use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Request-level errors surfaced to clients.
///
/// Both variants are terminal for the request: the error is written as the
/// HTTP response and nothing is retried or recovered.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing or invalid credentials")]
    Unauthorized,

    #[error("input parameter missing, empty, or too long")]
    InvalidInput,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AppError::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input"),
        };

        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");

        (status, message).into_response()
    }
}
