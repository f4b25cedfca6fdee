use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;
use wardwatch_insight::{InsightOverview, KpiSummary};

use crate::error::ApiError;
use crate::insights::requests::{FilterQuery, StuckQueryParams};
use crate::insights::responses::{DistributionResponse, StuckCasesResponse, TrendResponse};
use crate::AppState;

pub async fn get_kpis(State(state): State<AppState>) -> Result<Json<KpiSummary>, ApiError> {
    let data = state.insights.get_insight_kpis().await?;
    Ok(Json(data))
}

pub async fn get_distribution(
    State(state): State<AppState>,
    Query(filters): Query<FilterQuery>,
) -> Result<Json<DistributionResponse>, ApiError> {
    let data = state
        .insights
        .get_insight_distribution(&filters.to_params())
        .await?;
    let count = data.len();
    Ok(Json(DistributionResponse { data, count }))
}

pub async fn get_trend(
    State(state): State<AppState>,
    Query(filters): Query<FilterQuery>,
) -> Result<Json<TrendResponse>, ApiError> {
    let data = state.insights.get_insight_trend(&filters.to_params()).await?;
    let count = data.len();
    Ok(Json(TrendResponse { data, count }))
}

pub async fn get_stuck_cases(
    State(state): State<AppState>,
    Query(params): Query<StuckQueryParams>,
) -> Result<Json<StuckCasesResponse>, ApiError> {
    let threshold = params.days_threshold.map(Value::String);
    let data = state.insights.get_stuck_cases(threshold).await?;
    let count = data.len();
    Ok(Json(StuckCasesResponse { data, count }))
}

pub async fn get_overview(
    State(state): State<AppState>,
    Query(filters): Query<FilterQuery>,
) -> Result<Json<InsightOverview>, ApiError> {
    let overview = state
        .insights
        .load_overview(&filters.to_overview_params())
        .await?;
    Ok(Json(overview))
}
