pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Analysis routes, mounted both at the root and under `/api`.
/// Only the upload route lifts axum's 2 MiB default body limit.
fn analysis_routes(max_body_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/summary/generate",
            post(handlers::handle_generate_summary).layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .route("/features/extract", post(handlers::handle_extract_features))
        .route(
            "/features/re-evaluate",
            post(handlers::handle_re_evaluate_features),
        )
        .route("/risks/analyze", post(handlers::handle_analyze_risks))
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .merge(analysis_routes(max_body_bytes))
        .nest("/api", analysis_routes(max_body_bytes))
        .with_state(state)
}
