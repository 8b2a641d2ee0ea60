pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai_handlers;
use crate::reports::handlers as report_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI-assisted JD parsing
        .route(
            "/api/ai/jd-to-requirement",
            post(ai_handlers::jd_to_requirement),
        )
        // Reporting
        .route("/api/reports/clients", get(report_handlers::get_clients))
        .route(
            "/api/reports/client/:client_id/requirements",
            get(report_handlers::get_client_requirements),
        )
        .route(
            "/api/reports/requirement/:req_id/stats",
            get(report_handlers::get_requirement_stats),
        )
        .route("/api/reports/stats", get(report_handlers::get_general_stats))
        .with_state(state)
}
