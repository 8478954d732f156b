//! Typed client for the backend category service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::channel::RpcChannel;
use crate::error::ClientError;

/// Create request; identity is assigned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
}

/// Full category record; updates carry the whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub guid: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetCategoryRequest {
    pub category_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListCategoriesRequest {
    pub limit: i32,
    pub page: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteCategoryRequest {
    pub category_id: String,
}

/// Handle exposing the category backend operations; same shape and
/// forwarding rules as the book handle.
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create(&self, draft: CategoryDraft) -> Result<Value, ClientError>;
    async fn get_by_id(&self, id: &str) -> Result<Value, ClientError>;
    async fn list(&self, limit: i32, page: i32) -> Result<Value, ClientError>;
    async fn update(&self, record: CategoryRecord) -> Result<Value, ClientError>;
    async fn delete(&self, id: &str) -> Result<Value, ClientError>;
}

/// RPC-backed implementation of [`CategoryService`].
pub struct CategoryServiceClient {
    channel: RpcChannel,
}

impl CategoryServiceClient {
    pub fn connect(endpoint: &str) -> Result<Self, ClientError> {
        let channel = RpcChannel::connect(endpoint, "CategoryService")?;
        Ok(Self { channel })
    }
}

#[async_trait]
impl CategoryService for CategoryServiceClient {
    async fn create(&self, draft: CategoryDraft) -> Result<Value, ClientError> {
        self.channel.call("Create", &draft).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Value, ClientError> {
        let request = GetCategoryRequest {
            category_id: id.to_string(),
        };
        self.channel.call("GetCategoryById", &request).await
    }

    async fn list(&self, limit: i32, page: i32) -> Result<Value, ClientError> {
        let request = ListCategoriesRequest { limit, page };
        self.channel.call("GetCategories", &request).await
    }

    async fn update(&self, record: CategoryRecord) -> Result<Value, ClientError> {
        self.channel.call("Update", &record).await
    }

    async fn delete(&self, id: &str) -> Result<Value, ClientError> {
        let request = DeleteCategoryRequest {
            category_id: id.to_string(),
        };
        self.channel.call("Delete", &request).await
    }
}
