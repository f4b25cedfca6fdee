use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use wardwatch_common::error::WardwatchError;

use crate::kpi::{adapt_kpi_summary, KpiSummary};
use crate::requests::{build_distribution_request, build_stuck_query, build_trend_request};
use crate::series::{adapt_distribution, adapt_trend, DistributionPoint, TrendPoint};
use crate::stuck::{adapt_stuck_cases, StuckCase};
use crate::transport::{InsightTransport, TransportError};
use crate::RawPayload;

pub const KPI_PATH: &str = "/insights/kpis";
pub const DISTRIBUTION_PATH: &str = "/insights/distribution";
pub const TREND_PATH: &str = "/insights/trend";
pub const STUCK_PATH: &str = "/insights/stuck";

#[derive(Debug, thiserror::Error)]
pub enum InsightClientError {
    #[error(transparent)]
    Invalid(#[from] WardwatchError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Inputs for [`InsightClient::load_overview`]. Each bag is handed to its
/// request builder unchanged.
#[derive(Debug, Clone, Default)]
pub struct OverviewParams {
    pub distribution: RawPayload,
    pub trend: RawPayload,
    pub days_threshold: Option<Value>,
}

/// Everything the insight page renders, loaded together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightOverview {
    pub kpis: KpiSummary,
    pub distribution: Vec<DistributionPoint>,
    pub trend: Vec<TrendPoint>,
    pub stuck_cases: Vec<StuckCase>,
}

/// Fetches insight aggregates and returns them normalized. Holds no state
/// besides the injected transport.
#[derive(Clone)]
pub struct InsightClient {
    transport: Arc<dyn InsightTransport>,
}

impl InsightClient {
    pub fn new(transport: Arc<dyn InsightTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_insight_kpis(&self) -> Result<KpiSummary, InsightClientError> {
        tracing::debug!(path = KPI_PATH, "fetching kpi summary");
        let raw = self
            .transport
            .get_json(KPI_PATH, &[])
            .await
            .inspect_err(|e| tracing::warn!(error = %e, path = KPI_PATH, "insight call failed"))?;
        Ok(adapt_kpi_summary(&raw))
    }

    pub async fn get_insight_distribution(
        &self,
        params: &RawPayload,
    ) -> Result<Vec<DistributionPoint>, InsightClientError> {
        let request = build_distribution_request(params)?;
        let body = serde_json::to_value(&request)
            .map_err(|e| WardwatchError::Internal(e.to_string()))?;

        tracing::debug!(path = DISTRIBUTION_PATH, dimension = %request.dimension, "fetching distribution");
        let raw = self
            .transport
            .post_json(DISTRIBUTION_PATH, &body)
            .await
            .inspect_err(|e| {
                tracing::warn!(error = %e, path = DISTRIBUTION_PATH, "insight call failed")
            })?;
        Ok(adapt_distribution(&raw))
    }

    pub async fn get_insight_trend(
        &self,
        params: &RawPayload,
    ) -> Result<Vec<TrendPoint>, InsightClientError> {
        let request = build_trend_request(params)?;
        let body = serde_json::to_value(&request)
            .map_err(|e| WardwatchError::Internal(e.to_string()))?;

        tracing::debug!(path = TREND_PATH, bucket = %request.bucket, "fetching trend");
        let raw = self
            .transport
            .post_json(TREND_PATH, &body)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, path = TREND_PATH, "insight call failed"))?;
        Ok(adapt_trend(&raw))
    }

    pub async fn get_stuck_cases(
        &self,
        days_threshold: Option<Value>,
    ) -> Result<Vec<StuckCase>, InsightClientError> {
        let query = build_stuck_query(days_threshold);
        let threshold = query.threshold_param();

        tracing::debug!(path = STUCK_PATH, days_threshold = %threshold, "fetching stuck cases");
        let raw = self
            .transport
            .get_json(STUCK_PATH, &[("days_threshold", threshold)])
            .await
            .inspect_err(|e| tracing::warn!(error = %e, path = STUCK_PATH, "insight call failed"))?;
        Ok(adapt_stuck_cases(&raw))
    }

    /// Issue all four calls concurrently and wait for every one to settle.
    ///
    /// On failure the first error in call order (kpis, distribution, trend,
    /// stuck) is returned; nothing is retried.
    pub async fn load_overview(
        &self,
        params: &OverviewParams,
    ) -> Result<InsightOverview, InsightClientError> {
        let (kpis, distribution, trend, stuck_cases) = tokio::join!(
            self.get_insight_kpis(),
            self.get_insight_distribution(&params.distribution),
            self.get_insight_trend(&params.trend),
            self.get_stuck_cases(params.days_threshold.clone()),
        );

        Ok(InsightOverview {
            kpis: kpis?,
            distribution: distribution?,
            trend: trend?,
            stuck_cases: stuck_cases?,
        })
    }
}
