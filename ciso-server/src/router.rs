//! Route table and middleware stack

use crate::error::panic_response;
use crate::handlers;
use crate::metrics::track_requests;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application: dashboard routes plus the middleware stack
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::dashboard))
        .route("/kpis", get(handlers::kpis))
        .route("/incidents", get(handlers::incidents))
        .route("/controls", get(handlers::controls))
        .route_layer(middleware::from_fn(track_requests))
        .fallback(handlers::not_found)
        .with_state(state);

    with_middleware(routes)
}

/// Wrap `router` in the shared middleware stack.
///
/// Panics are turned into the 500 fault envelope innermost, so the envelope
/// still gets CORS headers and request tracing.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
