//! JSON-over-HTTP RPC channel shared by the backend service clients.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::ClientError;

/// One channel per resource family. The underlying HTTP client is
/// multiplexed and safe for concurrent use by any number of in-flight
/// requests; calls are one-shot with no retry and no application timeout.
pub struct RpcChannel {
    http: reqwest::Client,
    base: Url,
    service: &'static str,
}

impl RpcChannel {
    /// Establish a channel to the given backend endpoint.
    ///
    /// Establishing means validating the endpoint and building the
    /// transport; the connection itself is opened lazily on first call.
    /// Any failure here is fatal to process startup.
    pub fn connect(endpoint: &str, service: &'static str) -> Result<Self, ClientError> {
        let base = Url::parse(endpoint).map_err(|err| ClientError::Connect {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        })?;

        if base.cannot_be_a_base() {
            return Err(ClientError::Connect {
                endpoint: endpoint.to_string(),
                reason: "endpoint is not a base URL".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| ClientError::Connect {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            http,
            base,
            service,
        })
    }

    /// Invoke one backend method and return its raw JSON payload.
    ///
    /// Non-2xx replies are mapped to `ClientError::Backend` carrying the
    /// backend's status and message; everything below the application layer
    /// maps to `ClientError::Transport`.
    pub async fn call<Req>(&self, method: &str, request: &Req) -> Result<Value, ClientError>
    where
        Req: Serialize + ?Sized,
    {
        let url = self.method_url(method)?;

        tracing::debug!(service = self.service, method, "backend call");

        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("backend error")
                    .to_string()
            });

        Err(ClientError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    fn method_url(&self, method: &str) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Connect {
                endpoint: self.base.to_string(),
                reason: "endpoint is not a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend([self.service, method]);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_rejects_malformed_endpoint() {
        let result = RpcChannel::connect("not a url", "BookService");
        assert!(matches!(result, Err(ClientError::Connect { .. })));
    }

    #[test]
    fn connect_rejects_non_base_endpoint() {
        let result = RpcChannel::connect("mailto:books@example.com", "BookService");
        assert!(matches!(result, Err(ClientError::Connect { .. })));
    }

    #[test]
    fn method_url_appends_service_and_method() {
        let channel = RpcChannel::connect("http://127.0.0.1:9000", "BookService").unwrap();
        let url = channel.method_url("Create").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/BookService/Create");
    }

    #[test]
    fn method_url_preserves_endpoint_path_prefix() {
        let channel = RpcChannel::connect("http://backend:9000/rpc", "CategoryService").unwrap();
        let url = channel.method_url("Delete").unwrap();
        assert_eq!(url.as_str(), "http://backend:9000/rpc/CategoryService/Delete");
    }
}
