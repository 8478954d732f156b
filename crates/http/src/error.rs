//! Error handling for the gateway HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use bookgate_clients::ClientError;

/// Errors a translator operation can surface to the client.
///
/// Every failing request terminates with exactly one `{message, error}`
/// envelope and one log event, emitted from `into_response`.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Malformed input caught before any backend call. Always 400.
    #[error("validation error: {message}")]
    Validation { message: String, detail: String },

    /// A failure returned by or while communicating with the backend.
    /// Surfaced as 500 unless the backend signaled a more specific status.
    #[error("backend error: {message}")]
    Backend {
        status: StatusCode,
        message: String,
        detail: String,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl GatewayError {
    /// Create a validation error with the given human-readable message.
    pub fn validation(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Wrap a client failure, keeping a backend-signaled status when the
    /// backend provided one.
    pub fn backend(message: impl Into<String>, err: ClientError) -> Self {
        let status = err
            .backend_status()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Self::Backend {
            status,
            message: message.into(),
            detail: err.to_string(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Validation { .. } => StatusCode::BAD_REQUEST,
            GatewayError::Backend { status, .. } => *status,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, detail) = match self {
            GatewayError::Validation { message, detail } => (message, detail),
            GatewayError::Backend {
                message, detail, ..
            } => (message, detail),
            GatewayError::Internal(err) => ("internal error".to_string(), err.to_string()),
        };

        tracing::error!(
            status = %status.as_u16(),
            error = %detail,
            "{message}"
        );

        let body = json!({
            "message": message,
            "error": detail,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_bad_request() {
        let error = GatewayError::validation("book id is not valid", "book id is not valid");
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn backend_error_defaults_to_internal_server_error() {
        let error = GatewayError::backend(
            "error while creating book",
            ClientError::Connect {
                endpoint: "http://127.0.0.1:9000".to_string(),
                reason: "refused".to_string(),
            },
        );
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn backend_signaled_status_passes_through() {
        let error = GatewayError::backend(
            "error while getting book",
            ClientError::Backend {
                status: 404,
                message: "book not found".to_string(),
            },
        );
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_response_status_matches_error() {
        let error = GatewayError::validation("error while parsing json body", "eof");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
