//! HTTP API: routers, handlers and the middleware stack

pub mod extract;
pub mod health;
pub mod middleware;
pub mod reservations;
pub mod tables;

use axum::Router;
use axum::http::Uri;
use axum::middleware as axum_middleware;
use axum::routing::get;
use http::{HeaderName, HeaderValue};
use shared::error::AppError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, without middleware or state
pub fn build_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(reservations::router(state))
        .merge(tables::router(state))
        .fallback(not_found)
}

/// The full application: routes, middleware and state.
///
/// Used by the HTTP server and by integration tests.
pub fn build_app(state: AppState) -> Router {
    build_router(&state)
        // CORS - the front-end is served from another origin
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every layer below sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Path not found: {}", uri.path()))
}
