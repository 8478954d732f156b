//! Error taxonomy for backend client calls.

use thiserror::Error;

/// Failures surfaced by the backend service clients.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The channel to a backend endpoint could not be established.
    /// Fatal at startup; the gateway must not begin serving.
    #[error("failed to establish channel to '{endpoint}': {reason}")]
    Connect { endpoint: String, reason: String },

    /// The backend replied with an error status. The status is carried
    /// through so the gateway can pass a backend-signaled code to clients.
    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The call failed below the application layer (connection refused,
    /// reset, malformed response body). Surfaced as an internal error.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Backend-signaled HTTP status, if one exists for this failure.
    pub fn backend_status(&self) -> Option<u16> {
        match self {
            ClientError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_status_passes_through() {
        let err = ClientError::Backend {
            status: 404,
            message: "book not found".to_string(),
        };
        assert_eq!(err.backend_status(), Some(404));
    }

    #[test]
    fn connect_error_has_no_backend_status() {
        let err = ClientError::Connect {
            endpoint: "not a url".to_string(),
            reason: "invalid endpoint".to_string(),
        };
        assert_eq!(err.backend_status(), None);
    }
}
