//! Router builder for the gateway HTTP server.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use bookgate_kernel::ModuleRegistry;

/// Versioned prefix every resource module mounts under.
const API_PREFIX: &str = "/v1";

/// Builder for constructing the main HTTP router
pub struct RouterBuilder {
    router: Router,
}

impl RouterBuilder {
    /// Create a new router builder
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Add a route to the router
    pub fn route(mut self, path: &str, route: axum::routing::MethodRouter) -> Self {
        self.router = self.router.route(path, route);
        self
    }

    /// Mount a module's router under `/v1/{module_name}`
    pub fn mount_module(mut self, module_name: &str, module_router: Router) -> Self {
        let api_path = format!("{API_PREFIX}/{module_name}");
        self.router = self.router.nest(&api_path, module_router);
        self
    }

    /// Add tracing middleware
    pub fn with_tracing(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        );
        self
    }

    /// Add CORS middleware (allow-all, matching the gateway's open surface)
    pub fn with_cors(mut self) -> Self {
        self.router = self.router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
        self
    }

    /// Add request ID middleware
    pub fn with_request_id(mut self) -> Self {
        self.router = self
            .router
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));
        self
    }

    /// Add OpenAPI documentation by collecting specs from all modules
    pub fn with_openapi(mut self, registry: &ModuleRegistry) -> Self {
        let mut openapi_spec = serde_json::json!({
            "openapi": "3.0.0",
            "info": {
                "title": "Bookgate API",
                "version": "1.0.0",
                "description": "Book and category CRUD gateway"
            },
            "paths": {},
            "components": {
                "schemas": {}
            }
        });

        // The two response shapes every operation produces.
        openapi_spec["components"]["schemas"]["SuccessEnvelope"] = serde_json::json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" },
                "data": {}
            },
            "required": ["message", "data"]
        });
        openapi_spec["components"]["schemas"]["ErrorEnvelope"] = serde_json::json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" },
                "error": { "type": "string" }
            },
            "required": ["message", "error"]
        });

        openapi_spec["paths"]["/healthz"] = serde_json::json!({
            "get": {
                "summary": "Health check",
                "responses": {
                    "200": {
                        "description": "OK",
                        "content": {
                            "text/plain": {
                                "schema": { "type": "string" }
                            }
                        }
                    }
                }
            }
        });

        // Collect OpenAPI specs from all modules
        for module in registry.modules() {
            if let Some(module_spec) = module.openapi() {
                // Merge paths from module, prefixed with /v1/{module_name}
                if let Some(paths) = module_spec.get("paths").and_then(|p| p.as_object()) {
                    for (path, path_item) in paths {
                        let suffix = if path == "/" { "" } else { path.as_str() };
                        let prefixed_path =
                            format!("{API_PREFIX}/{}{}", module.name(), suffix);
                        openapi_spec["paths"][prefixed_path] = path_item.clone();
                    }
                }

                // Merge schemas from module
                if let Some(schemas) = module_spec
                    .get("components")
                    .and_then(|c| c.get("schemas"))
                    .and_then(|s| s.as_object())
                {
                    for (schema_name, schema_def) in schemas {
                        openapi_spec["components"]["schemas"][schema_name] = schema_def.clone();
                    }
                }
            }
        }

        // Deserialize the merged JSON spec into a utoipa OpenApi object so
        // SwaggerUI can serve it.
        let openapi_obj: utoipa::openapi::OpenApi = serde_json::from_value(openapi_spec.clone())
            .unwrap_or_else(|_| {
                utoipa::openapi::OpenApiBuilder::new()
                    .info(
                        utoipa::openapi::InfoBuilder::new()
                            .title("Bookgate API")
                            .version("1.0.0")
                            .build(),
                    )
                    .build()
            });

        self.router = self.router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi_obj),
        );

        // Also serve the raw JSON spec for external consumers
        self.router = self.router.route(
            "/docs/openapi.json",
            get(move || async move { axum::Json(openapi_spec.clone()) }),
        );

        self
    }

    /// Build the final router
    pub fn build(self) -> Router {
        self.router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    #[tokio::test]
    async fn routes_and_middlewares_compose() {
        let router = RouterBuilder::new()
            .with_tracing()
            .with_cors()
            .with_request_id()
            .route("/healthz", get(|| async { "ok" }))
            .build();

        let response = router
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn modules_mount_under_versioned_prefix() {
        let module_router = Router::new().route("/", get(|| async { "books" }));

        let router = RouterBuilder::new()
            .mount_module("book", module_router)
            .build();

        let response = router
            .clone()
            .oneshot(Request::get("/v1/book").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(Request::get("/book").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
