//! Service registry owning the backend channels.

use std::sync::Arc;

use bookgate_kernel::settings::BackendSettings;

use crate::book::{BookService, BookServiceClient};
use crate::category::{CategoryService, CategoryServiceClient};
use crate::error::ClientError;

/// Live handles to the backend services, one per resource family.
///
/// Constructed once at startup and shared read-only across all request
/// tasks. Each family gets its own channel even when both endpoints resolve
/// to the same address, so addressing can diverge later without touching
/// call sites.
pub struct ServiceRegistry {
    books: Arc<dyn BookService>,
    categories: Arc<dyn CategoryService>,
}

impl ServiceRegistry {
    /// Establish both backend channels. Any failure is fatal: no
    /// partial-registry state is ever exposed.
    pub fn connect(backend: &BackendSettings) -> Result<Self, ClientError> {
        let books = BookServiceClient::connect(&backend.book_endpoint)?;
        let categories = CategoryServiceClient::connect(&backend.category_endpoint)?;

        Ok(Self {
            books: Arc::new(books),
            categories: Arc::new(categories),
        })
    }

    /// Assemble a registry from pre-built service handles. Seam for tests
    /// and for swapping transports behind the same traits.
    pub fn from_parts(
        books: Arc<dyn BookService>,
        categories: Arc<dyn CategoryService>,
    ) -> Self {
        Self { books, categories }
    }

    /// Handle for the book service; never absent once construction succeeds.
    pub fn books(&self) -> &dyn BookService {
        self.books.as_ref()
    }

    /// Handle for the category service; never absent once construction
    /// succeeds.
    pub fn categories(&self) -> &dyn CategoryService {
        self.categories.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::book::{BookDraft, BookRecord};
    use crate::category::{CategoryDraft, CategoryRecord};

    struct StaticBookService;

    #[async_trait]
    impl BookService for StaticBookService {
        async fn create(&self, _draft: BookDraft) -> Result<Value, ClientError> {
            Ok(json!("created"))
        }
        async fn get_by_id(&self, _id: &str) -> Result<Value, ClientError> {
            Ok(json!({}))
        }
        async fn list(&self, _limit: i32, _page: i32) -> Result<Value, ClientError> {
            Ok(json!({"books": [], "count": 0}))
        }
        async fn update(&self, _record: BookRecord) -> Result<Value, ClientError> {
            Ok(json!("updated"))
        }
        async fn delete(&self, _id: &str) -> Result<Value, ClientError> {
            Ok(json!("deleted"))
        }
    }

    struct StaticCategoryService;

    #[async_trait]
    impl CategoryService for StaticCategoryService {
        async fn create(&self, _draft: CategoryDraft) -> Result<Value, ClientError> {
            Ok(json!("created"))
        }
        async fn get_by_id(&self, _id: &str) -> Result<Value, ClientError> {
            Ok(json!({}))
        }
        async fn list(&self, _limit: i32, _page: i32) -> Result<Value, ClientError> {
            Ok(json!({"categories": [], "count": 0}))
        }
        async fn update(&self, _record: CategoryRecord) -> Result<Value, ClientError> {
            Ok(json!("updated"))
        }
        async fn delete(&self, _id: &str) -> Result<Value, ClientError> {
            Ok(json!("deleted"))
        }
    }

    #[tokio::test]
    async fn from_parts_exposes_both_handles() {
        let registry = ServiceRegistry::from_parts(
            Arc::new(StaticBookService),
            Arc::new(StaticCategoryService),
        );

        let ack = registry.books().delete("any-id").await.unwrap();
        assert_eq!(ack, json!("deleted"));

        let ack = registry
            .categories()
            .create(CategoryDraft {
                name: "scifi".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ack, json!("created"));
    }

    #[test]
    fn connect_fails_on_malformed_endpoint() {
        let backend = BackendSettings {
            book_endpoint: "not a url".to_string(),
            category_endpoint: "http://127.0.0.1:9000".to_string(),
        };
        assert!(matches!(
            ServiceRegistry::connect(&backend),
            Err(ClientError::Connect { .. })
        ));
    }

    #[test]
    fn connect_builds_two_channels_from_one_address() {
        let backend = BackendSettings::default();
        assert!(ServiceRegistry::connect(&backend).is_ok());
    }
}
