//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    market::market_page,
    architect::{architect_page, architect_generate},
    api::{api_opportunities, api_risk_reward, api_market_projection, api_architect, api_generate},
};
use crate::sse::sse_handler;

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                   get(market_page))
        .route("/architect",          get(architect_page))
        .route("/architect/generate", post(architect_generate))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/opportunities",            get(api_opportunities))
        .route("/api/charts/risk-reward",       get(api_risk_reward))
        .route("/api/charts/market-projection", get(api_market_projection))
        .route("/api/architect",                get(api_architect))
        .route("/api/architect/generate",       post(api_generate))

        // Static files
        .nest_service("/static", ServeDir::new(STATIC_DIR))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
