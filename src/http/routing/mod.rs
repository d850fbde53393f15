pub use super::routes::todos;

use std::path::Path;

use axum::{routing::get, Router};
use ::http::{header, Method};
use tower::ServiceBuilder;
use tower_http::{cors::{Any, CorsLayer}, services::ServeDir, trace::TraceLayer};

/// Wraps the API routes with the health check, request tracing and CORS.
/// With a `static_dir`, paths no route matches are served from it.
pub fn app(router: Router, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(router);
    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors()),
    )
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}
