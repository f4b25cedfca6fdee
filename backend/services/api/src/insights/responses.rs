use serde::Serialize;
use wardwatch_insight::{DistributionPoint, StuckCase, TrendPoint};

#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub data: Vec<DistributionPoint>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub data: Vec<TrendPoint>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StuckCasesResponse {
    pub data: Vec<StuckCase>,
    pub count: usize,
}
