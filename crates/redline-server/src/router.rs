//! Route registration for the Redline API.
//!
//! Each route is registered with an explicit method whitelist; other verbs
//! get `405 Method Not Allowed`. This is a non-browser JSON API without
//! cookie authentication, so there is no CSRF surface to defend; cross-origin
//! access is governed solely by the CORS layer attached here.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all Redline endpoints.
pub fn build_router(state: Arc<AppState>, permissive_cors: bool) -> Router {
    let mut router = Router::new()
        .route(
            "/api/compare-contracts/",
            post(handler::compare_contracts_handler),
        )
        .route(
            "/api/analyze-contract/",
            post(handler::analyze_contract_handler),
        )
        .route(
            "/api/advanced-search/",
            get(handler::advanced_search_handler),
        )
        .route("/api/health", get(handler::health_handler))
        .with_state(state);

    if permissive_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}
