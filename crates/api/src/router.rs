//! Application router: route tree plus the HTTP middleware pipeline.
//!
//! Used by both the binary and the integration tests so they run the same
//! stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, HttpMakeClassifier, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the complete application: service routes at the root, the API under
/// [`routes::API_PREFIX`], wrapped in the middleware pipeline.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .merge(routes::service::router())
        .nest(routes::API_PREFIX, routes::api_routes());

    with_middleware(routes, config).with_state(state)
}

/// Wrap `router` in the request pipeline.
///
/// `Router::layer` wraps everything added before it, so the calls below go
/// from innermost to outermost. A request passes, in order: CORS, request-id
/// assignment, tracing, request-id echo on the response, timeout (408), and
/// the panic guard (500) closest to the handlers.
fn with_middleware(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let request_timeout = Duration::from_secs(config.request_timeout_secs);

    router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(request_trace_layer())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors_layer(&config.cors_origins))
}

/// One INFO span per request, closed with status and latency in ms.
fn request_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

/// CORS for the configured browser origins. The API only serves `GET` and
/// `POST` with JSON bodies.
///
/// Panics on an origin that is not a valid header value; this only runs at
/// startup.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins = origins.iter().map(|origin| {
        HeaderValue::from_str(origin)
            .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
    });

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
