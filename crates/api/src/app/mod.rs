//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared handles (store, renderer) injected into handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: workflow outcome → HTTP response mapping

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use stockroom_products::ProductStore;

use crate::middleware;
use crate::render::{HtmlRenderer, Renderer};

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with the built-in HTML renderer.
pub fn build_app(store: Arc<dyn ProductStore>) -> Router {
    build_app_with_renderer(store, Arc::new(HtmlRenderer))
}

/// Build the full HTTP router around an injected store and renderer.
pub fn build_app_with_renderer(store: Arc<dyn ProductStore>, renderer: Arc<dyn Renderer>) -> Router {
    let services = Arc::new(services::AppServices::new(store, renderer));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/", get(routes::products::list_products))
        .nest("/products", routes::products::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}
