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

use bookgate_clients::{BookDraft, BookRecord, ServiceRegistry};
use bookgate_http::{reply, GatewayError};
use bookgate_kernel::{InitCtx, Module};

use crate::modules::pagination::{self, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::modules::policy::{self, Operation, Resource};

/// Book resource translator: maps HTTP CRUD requests onto the backend book
/// service and normalizes the results.
pub struct BooksModule {
    services: Arc<ServiceRegistry>,
}

impl BooksModule {
    pub fn new(services: Arc<ServiceRegistry>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "book"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "book module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", post(create_book).get(list_books))
            .route(
                "/{book_id}",
                get(get_book).put(update_book).delete(delete_book),
            )
            .with_state(self.services.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Create book",
                        "tags": ["Books"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookCreate" }
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
                            },
                            "500": {
                                "description": "Backend error",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorEnvelope" }
                                    }
                                }
                            }
                        }
                    },
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "limit", "in": "query", "required": false, "schema": { "type": "string" } },
                            { "name": "page", "in": "query", "required": false, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Backend list payload, forwarded verbatim",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookList" }
                                    }
                                }
                            },
                            "400": {
                                "description": "Non-integer pagination parameter",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorEnvelope" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{book_id}": {
                    "get": {
                        "summary": "Get book by id",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "book_id", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Backend book payload, forwarded verbatim",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
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
                        "summary": "Update book",
                        "tags": ["Books"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Book" }
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
                        "summary": "Delete book",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "book_id", "in": "path", "required": true, "schema": { "type": "string" } }
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
                    "Book": {
                        "type": "object",
                        "properties": {
                            "guid": { "type": "string" },
                            "name": { "type": "string" },
                            "author": { "type": "string" },
                            "category": { "type": "string" },
                            "description": { "type": "string" },
                            "pages": { "type": "integer" },
                            "year": { "type": "string" }
                        },
                        "required": ["guid", "name", "author", "category", "description", "pages", "year"]
                    },
                    "BookCreate": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "author": { "type": "string" },
                            "category": { "type": "string" },
                            "description": { "type": "string" },
                            "pages": { "type": "integer" },
                            "year": { "type": "string" }
                        },
                        "required": ["name", "author", "category", "description", "pages", "year"]
                    },
                    "BookList": {
                        "type": "object",
                        "properties": {
                            "books": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Book" }
                            },
                            "count": { "type": "integer" }
                        },
                        "required": ["books", "count"]
                    }
                }
            }
        }))
    }
}

/// POST /v1/book
async fn create_book(
    State(services): State<Arc<ServiceRegistry>>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let new_book: models::BookCreate = serde_json::from_slice(&body).map_err(|err| {
        GatewayError::validation("error while parsing json body", err.to_string())
    })?;

    let ack = services
        .books()
        .create(BookDraft {
            name: new_book.name,
            author: new_book.author,
            category: new_book.category,
            description: new_book.description,
            pages: new_book.pages,
            year: new_book.year,
        })
        .await
        .map_err(|err| GatewayError::backend("error while creating book", err))?;

    Ok(reply::ok(ack))
}

/// GET /v1/book/{book_id}
async fn get_book(
    State(services): State<Arc<ServiceRegistry>>,
    Path(book_id): Path<String>,
) -> Result<Response, GatewayError> {
    policy::ensure_id(Resource::Book, Operation::GetById, &book_id)?;

    let payload = services
        .books()
        .get_by_id(&book_id)
        .await
        .map_err(|err| GatewayError::backend("error while getting book", err))?;

    Ok(reply::passthrough(payload))
}

/// GET /v1/book
async fn list_books(
    State(services): State<Arc<ServiceRegistry>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    let limit = pagination::parse_query_param(&params, "limit", DEFAULT_LIMIT)?;
    let page = pagination::parse_query_param(&params, "page", DEFAULT_PAGE)?;

    let payload = services
        .books()
        .list(limit, page)
        .await
        .map_err(|err| GatewayError::backend("error while getting all books", err))?;

    Ok(reply::passthrough(payload))
}

/// PUT /v1/book/{book_id}
///
/// The body carries the authoritative identity; the path segment is kept
/// for routing symmetry only.
async fn update_book(
    State(services): State<Arc<ServiceRegistry>>,
    Path(_book_id): Path<String>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let update: models::Book = serde_json::from_slice(&body).map_err(|err| {
        GatewayError::validation("error while parsing json body", err.to_string())
    })?;

    policy::ensure_id(Resource::Book, Operation::Update, &update.guid)?;

    let ack = services
        .books()
        .update(BookRecord {
            guid: update.guid,
            name: update.name,
            author: update.author,
            category: update.category,
            description: update.description,
            pages: update.pages,
            year: update.year,
        })
        .await
        .map_err(|err| GatewayError::backend("error while updating book", err))?;

    Ok(reply::ok(ack))
}

/// DELETE /v1/book/{book_id}
async fn delete_book(
    State(services): State<Arc<ServiceRegistry>>,
    Path(book_id): Path<String>,
) -> Result<Response, GatewayError> {
    policy::ensure_id(Resource::Book, Operation::Delete, &book_id)?;

    let ack = services
        .books()
        .delete(&book_id)
        .await
        .map_err(|err| GatewayError::backend("error while deleting book", err))?;

    Ok(reply::ok(ack))
}

/// Create a new instance of the book module
pub fn create_module(services: Arc<ServiceRegistry>) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(services))
}
