//! Typed client for the backend book service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::channel::RpcChannel;
use crate::error::ClientError;

/// Create request sent to the backend; carries no identity. The backend
/// assigns the identity and returns it in its acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDraft {
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub pages: i32,
    pub year: String,
}

/// Full book record as the backend models it. Updates carry the whole
/// record; there are no partial-update semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub guid: String,
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub pages: i32,
    pub year: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetBookRequest {
    pub book_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListBooksRequest {
    pub limit: i32,
    pub page: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteBookRequest {
    pub book_id: String,
}

/// Handle exposing the book backend operations.
///
/// Inputs are typed request messages; outputs are the backend's raw JSON
/// payloads, forwarded without interpretation so passthrough responses stay
/// byte-faithful.
#[async_trait]
pub trait BookService: Send + Sync {
    async fn create(&self, draft: BookDraft) -> Result<Value, ClientError>;
    async fn get_by_id(&self, id: &str) -> Result<Value, ClientError>;
    async fn list(&self, limit: i32, page: i32) -> Result<Value, ClientError>;
    async fn update(&self, record: BookRecord) -> Result<Value, ClientError>;
    async fn delete(&self, id: &str) -> Result<Value, ClientError>;
}

/// RPC-backed implementation of [`BookService`].
pub struct BookServiceClient {
    channel: RpcChannel,
}

impl BookServiceClient {
    pub fn connect(endpoint: &str) -> Result<Self, ClientError> {
        let channel = RpcChannel::connect(endpoint, "BookService")?;
        Ok(Self { channel })
    }
}

#[async_trait]
impl BookService for BookServiceClient {
    async fn create(&self, draft: BookDraft) -> Result<Value, ClientError> {
        self.channel.call("Create", &draft).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Value, ClientError> {
        let request = GetBookRequest {
            book_id: id.to_string(),
        };
        self.channel.call("GetBookById", &request).await
    }

    async fn list(&self, limit: i32, page: i32) -> Result<Value, ClientError> {
        let request = ListBooksRequest { limit, page };
        self.channel.call("GetBooks", &request).await
    }

    async fn update(&self, record: BookRecord) -> Result<Value, ClientError> {
        self.channel.call("Update", &record).await
    }

    async fn delete(&self, id: &str) -> Result<Value, ClientError> {
        let request = DeleteBookRequest {
            book_id: id.to_string(),
        };
        self.channel.call("Delete", &request).await
    }
}
