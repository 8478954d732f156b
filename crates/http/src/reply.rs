//! Success response strategies.
//!
//! The gateway exposes two deliberately distinct shapes: create, update,
//! and delete acknowledgments are wrapped in the `{message, data}` envelope,
//! while get-by-id and list forward the backend payload verbatim. The split
//! is part of the observed wire contract; unifying it would change what
//! existing clients see.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

/// The uniform success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

/// Envelope strategy: wrap a payload in `{message, data}` at the given
/// status.
pub fn enveloped<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    let body = Envelope {
        message: message.to_string(),
        data,
    };
    (status, Json(body)).into_response()
}

/// Envelope strategy with the usual arguments: 200 and message "ok".
pub fn ok<T: Serialize>(data: T) -> Response {
    enveloped(StatusCode::OK, "ok", data)
}

/// Passthrough strategy: forward a backend payload untouched with 200.
pub fn passthrough(payload: Value) -> Response {
    Json(payload).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn enveloped_wraps_payload() {
        let response = ok(json!("assigned-guid"));
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, json!({"message": "ok", "data": "assigned-guid"}));
    }

    #[tokio::test]
    async fn passthrough_forwards_payload_untouched() {
        let payload = json!({"books": [{"guid": "b-1"}], "count": 1});
        let response = passthrough(payload.clone());
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, payload);
    }
}
