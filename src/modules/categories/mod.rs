pub mod models;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post},
    Router,
};
use serde_json::json;

use bookgate_clients::{CategoryDraft, CategoryRecord, ServiceRegistry};
use bookgate_http::{reply, GatewayError};
use bookgate_kernel::{InitCtx, Module};

use crate::modules::pagination::{self, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::modules::policy::{self, Operation, Resource};

/// Category resource translator; structurally identical to the book module
/// with the category shapes.
pub struct CategoriesModule {
    services: Arc<ServiceRegistry>,
}

impl CategoriesModule {
    pub fn new(services: Arc<ServiceRegistry>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Module for CategoriesModule {
    fn name(&self) -> &'static str {
        "category"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "category module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", post(create_category).get(list_categories))
            .route(
                "/{category_id}",
                get(get_category)
                    .put(update_category)
                    .delete(delete_category),
            )
            .with_state(self.services.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Create category",
                        "tags": ["Categories"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/CategoryCreate" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Backend acknowledgment in the success envelope",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/SuccessEnvelope" }
                                    }
                                }
                            },
                            "400": {
                                "description": "Malformed JSON body",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorEnvelope" }
                                    }
                                }
                            }
                        }
                    },
                    "get": {
                        "summary": "List categories",
                        "tags": ["Categories"],
                        "parameters": [
                            { "name": "limit", "in": "query", "required": false, "schema": { "type": "string" } },
                            { "name": "page", "in": "query", "required": false, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Backend list payload, forwarded verbatim",
                                "content": {
                                    "application/json": { "schema": {} }
                                }
                            }
                        }
                    }
                },
                "/{category_id}": {
                    "get": {
                        "summary": "Get category by id",
                        "tags": ["Categories"],
                        "parameters": [
                            { "name": "category_id", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Backend category payload, forwarded verbatim",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Category" }
                                    }
                                }
                            },
                            "400": {
                                "description": "Identifier is not UUID-shaped",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorEnvelope" }
                                    }
                                }
                            }
                        }
                    },
                    "put": {
                        "summary": "Update category",
                        "tags": ["Categories"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Category" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Backend acknowledgment in the success envelope",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/SuccessEnvelope" }
                                    }
                                }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Delete category",
                        "tags": ["Categories"],
                        "parameters": [
                            { "name": "category_id", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Backend acknowledgment in the success envelope",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/SuccessEnvelope" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Category": {
                        "type": "object",
                        "properties": {
                            "guid": { "type": "string" },
                            "name": { "type": "string" }
                        },
                        "required": ["guid", "name"]
                    },
                    "CategoryCreate": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" }
                        },
                        "required": ["name"]
                    }
                }
            }
        }))
    }
}

/// POST /v1/category
async fn create_category(
    State(services): State<Arc<ServiceRegistry>>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let new_category: models::CategoryCreate = serde_json::from_slice(&body).map_err(|err| {
        GatewayError::validation("error while parsing json body", err.to_string())
    })?;

    let ack = services
        .categories()
        .create(CategoryDraft {
            name: new_category.name,
        })
        .await
        .map_err(|err| GatewayError::backend("error while creating category", err))?;

    Ok(reply::ok(ack))
}

/// GET /v1/category/{category_id}
async fn get_category(
    State(services): State<Arc<ServiceRegistry>>,
    Path(category_id): Path<String>,
) -> Result<Response, GatewayError> {
    policy::ensure_id(Resource::Category, Operation::GetById, &category_id)?;

    let payload = services
        .categories()
        .get_by_id(&category_id)
        .await
        .map_err(|err| GatewayError::backend("error while getting category", err))?;

    Ok(reply::passthrough(payload))
}

/// GET /v1/category
async fn list_categories(
    State(services): State<Arc<ServiceRegistry>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    let limit = pagination::parse_query_param(&params, "limit", DEFAULT_LIMIT)?;
    let page = pagination::parse_query_param(&params, "page", DEFAULT_PAGE)?;

    let payload = services
        .categories()
        .list(limit, page)
        .await
        .map_err(|err| GatewayError::backend("error while getting all categories", err))?;

    Ok(reply::passthrough(payload))
}

/// PUT /v1/category/{category_id}
async fn update_category(
    State(services): State<Arc<ServiceRegistry>>,
    Path(_category_id): Path<String>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let update: models::Category = serde_json::from_slice(&body).map_err(|err| {
        GatewayError::validation("error while parsing json body", err.to_string())
    })?;

    policy::ensure_id(Resource::Category, Operation::Update, &update.guid)?;

    let ack = services
        .categories()
        .update(CategoryRecord {
            guid: update.guid,
            name: update.name,
        })
        .await
        .map_err(|err| GatewayError::backend("error while updating category", err))?;

    Ok(reply::ok(ack))
}

/// DELETE /v1/category/{category_id}
async fn delete_category(
    State(services): State<Arc<ServiceRegistry>>,
    Path(category_id): Path<String>,
) -> Result<Response, GatewayError> {
    policy::ensure_id(Resource::Category, Operation::Delete, &category_id)?;

    let ack = services
        .categories()
        .delete(&category_id)
        .await
        .map_err(|err| GatewayError::backend("error while deleting category", err))?;

    Ok(reply::ok(ack))
}

/// Create a new instance of the category module
pub fn create_module(services: Arc<ServiceRegistry>) -> Arc<dyn Module> {
    Arc::new(CategoriesModule::new(services))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use bookgate_clients::{BookDraft, BookRecord, BookService, CategoryService, ClientError};

    const VALID_ID: &str = "9b2e88aa-3c34-4f4a-9d5c-0a6f6f2b1c11";

    #[derive(Default)]
    struct RecordingCategoryService {
        create_calls: AtomicUsize,
        get_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    #[async_trait]
    impl CategoryService for RecordingCategoryService {
        async fn create(&self, draft: CategoryDraft) -> Result<Value, ClientError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!({ "guid": VALID_ID, "name": draft.name }))
        }

        async fn get_by_id(&self, id: &str) -> Result<Value, ClientError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!({ "guid": id, "name": "scifi" }))
        }

        async fn list(&self, _limit: i32, _page: i32) -> Result<Value, ClientError> {
            Ok(json!({ "categories": [], "count": 0 }))
        }

        async fn update(&self, record: CategoryRecord) -> Result<Value, ClientError> {
            Ok(json!(record.guid))
        }

        async fn delete(&self, id: &str) -> Result<Value, ClientError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!(id))
        }
    }

    struct NoopBookService;

    #[async_trait]
    impl BookService for NoopBookService {
        async fn create(&self, _draft: BookDraft) -> Result<Value, ClientError> {
            Ok(Value::Null)
        }
        async fn get_by_id(&self, _id: &str) -> Result<Value, ClientError> {
            Ok(Value::Null)
        }
        async fn list(&self, _limit: i32, _page: i32) -> Result<Value, ClientError> {
            Ok(Value::Null)
        }
        async fn update(&self, _record: BookRecord) -> Result<Value, ClientError> {
            Ok(Value::Null)
        }
        async fn delete(&self, _id: &str) -> Result<Value, ClientError> {
            Ok(Value::Null)
        }
    }

    fn test_router(service: Arc<RecordingCategoryService>) -> Router {
        let registry = Arc::new(ServiceRegistry::from_parts(
            Arc::new(NoopBookService),
            service,
        ));
        CategoriesModule::new(registry).routes()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_wraps_backend_ack_in_envelope() {
        let service = Arc::new(RecordingCategoryService::default());
        let router = test_router(service.clone());

        let request = Request::post("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "name": "scifi" }).to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(service.create_calls.load(Ordering::SeqCst), 1);

        let body = body_json(response).await;
        assert_eq!(body["message"], "ok");
        assert_eq!(body["data"]["name"], "scifi");
    }

    #[tokio::test]
    async fn get_rejects_non_uuid_id_without_backend_call() {
        let service = Arc::new(RecordingCategoryService::default());
        let router = test_router(service.clone());

        let response = router
            .oneshot(Request::get("/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(service.get_calls.load(Ordering::SeqCst), 0);

        let body = body_json(response).await;
        assert_eq!(body["message"], "category id is not valid");
    }

    #[tokio::test]
    async fn delete_forwards_unvalidated_id() {
        let service = Arc::new(RecordingCategoryService::default());
        let router = test_router(service.clone());

        let response = router
            .oneshot(
                Request::delete("/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(service.delete_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_uses_identity_from_body() {
        let service = Arc::new(RecordingCategoryService::default());
        let router = test_router(service);

        // Path id and body id may differ; the body is authoritative.
        let request = Request::put("/ignored-path-id")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "guid": VALID_ID, "name": "fantasy" }).to_string(),
            ))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"], json!(VALID_ID));
    }
}
