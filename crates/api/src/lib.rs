//! HTTP API server with observability for the order service.
//!
//! Exposes order placement and lookup over REST, with structured logging
//! (tracing) and Prometheus metrics.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use application::OrderService;
use axum::Router;
use axum::routing::{get, post};
use domain::OrderRepository;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: OrderRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    let orders_router = Router::new()
        .route("/orders", post(routes::orders::create::<R>))
        .route("/orders/{order_number}", get(routes::orders::get::<R>))
        .with_state(state);

    Router::new()
        .route("/health", get(routes::health::check))
        .nest("/api/v1", orders_router)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around an order repository.
pub fn create_state<R: OrderRepository + 'static>(repository: R) -> Arc<AppState<R>> {
    Arc::new(AppState {
        order_service: OrderService::new(repository),
    })
}
