//! Request middleware: bearer-token authentication and request ID tracing.
//!
//! The auth gate admits a request only when its `Authorization` header exactly
//! equals `"Bearer <token>"` for the configured token. The comparison is plain
//! string equality, matching the original service's behavior; it is not
//! timing-safe, which only matters if an attacker can measure comparison
//! latency against a network round-trip.
//!
//! The request ID layer generates a UUID v4 for each incoming request and
//! creates a tracing span that wraps the entire request lifecycle, so all logs
//! emitted while processing carry a request_id field for correlation.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Extension type for accessing request ID in handlers if needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Bearer-token gate for protected routes.
///
/// Rejects with 401 `Unauthorized` unless the raw `Authorization` header
/// value equals the expected `"Bearer <token>"` string. Missing headers,
/// non-UTF-8 values, wrong schemes, and wrong tokens are all equivalent
/// mismatches; the downstream handler never runs for any of them.
pub async fn auth_layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == state.expected_bearer.as_ref());

    if !authorized {
        return AppError::Unauthorized.into_response();
    }

    next.run(request).await
}

/// Middleware that generates a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including other middleware and handlers.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let path = uri.path();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    let mut request = request;
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
