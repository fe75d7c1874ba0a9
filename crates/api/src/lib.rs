//! HTTP API server for the product catalog.
//!
//! Provides REST endpoints for product management and order intake,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use catalog::{CatalogService, InMemoryProductRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use orders::{InMemoryEventChannel, OrderIntakeService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/api/v1/products",
            get(routes::products::list).post(routes::products::create),
        )
        .route(
            "/api/v1/products/{id}",
            get(routes::products::get)
                .put(routes::products::update)
                .delete(routes::products::delete),
        )
        .route(
            "/api/v1/products/{id}/stock/add",
            post(routes::products::add_stock),
        )
        .route(
            "/api/v1/products/{id}/stock/reduce",
            post(routes::products::reduce_stock),
        )
        .route("/api/v1/orders", post(routes::orders::place))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state around the given store and channel.
pub fn create_state(
    repository: InMemoryProductRepository,
    channel: InMemoryEventChannel,
    order_channel: &str,
) -> Arc<AppState> {
    Arc::new(AppState {
        catalog: CatalogService::new(repository),
        orders: OrderIntakeService::with_channel(channel, order_channel),
    })
}

/// Creates the default application state with an empty in-memory store.
pub fn create_default_state(config: &Config) -> Arc<AppState> {
    create_state(
        InMemoryProductRepository::new(),
        InMemoryEventChannel::new(),
        &config.order_channel,
    )
}
