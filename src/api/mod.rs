pub mod handlers;
pub mod models;
pub mod openapi;

use crate::core::services::UserService;
use crate::infrastructure::storage::Storage;
use axum::{Router, http::header, routing::get};
use http::Method;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub type DynUserService = UserService<Arc<dyn Storage>>;
pub type AppState = Arc<DynUserService>;

/// Full application router: health check, `/api` routes, Swagger UI and the
/// shared middleware stack.
pub fn app(service: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", handlers::api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}
