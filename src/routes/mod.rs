use axum::{
    http::{header, Method, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    middleware::{make_span_with_request_id, request_id_middleware, REQUEST_ID_HEADER},
    services::{normalizer::OfferPolicy, providers::AvailabilityProvider},
};

pub mod countries;
pub mod live_search;
pub mod titles;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn AvailabilityProvider>,
    pub default_country: String,
    pub offer_policy: OfferPolicy,
    pub search_debounce: Duration,
}

impl AppState {
    pub fn new(provider: Arc<dyn AvailabilityProvider>, config: &Config) -> Self {
        let offer_policy = if config.include_purchase_options {
            OfferPolicy::with_purchase()
        } else {
            OfferPolicy::streaming_only()
        };

        Self {
            provider,
            default_country: config.default_country.to_ascii_lowercase(),
            offer_policy,
            search_debounce: config.search_debounce(),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Read-only JSON API, so any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            // Outermost first: the request ID must exist before the trace span is made
            ServiceBuilder::new()
                .layer(cors)
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(countries::list))
        .route("/search", get(titles::search))
        .route("/search/live", get(live_search::upgrade))
        .route("/shows/:id", get(titles::show))
}

async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
