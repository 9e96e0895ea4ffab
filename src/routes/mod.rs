//! HTTP route handlers and router construction.
//!
//! The router is built once at startup and handed to the listener, so the
//! full route table is visible here rather than spread across registration
//! sites. The echo group carries the bearer-token gate and a no-store
//! cache policy; the health probe stays open for load balancers.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod echo;
pub mod health;

use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::{auth_layer, request_id_layer};
use crate::state::AppState;

/// Creates the Axum router with all routes, the auth gate, and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Echo - method-agnostic, bearer-gated, never cached (credentialed responses)
    let echo_routes = Router::new()
        .route("/echo", any(echo::echo))
        .layer(middleware::from_fn_with_state(state.clone(), auth_layer))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Health check - no auth, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(echo_routes)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
