pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/insights/kpis", get(handlers::get_kpis))
        .route("/insights/distribution", get(handlers::get_distribution))
        .route("/insights/trend", get(handlers::get_trend))
        .route("/insights/stuck", get(handlers::get_stuck_cases))
        .route("/insights/overview", get(handlers::get_overview))
}
