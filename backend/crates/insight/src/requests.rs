use serde::Serialize;
use serde_json::Value;
use wardwatch_common::error::{WardwatchError, WardwatchResult};

use crate::RawPayload;

/// Threshold used when the caller does not pick one.
pub const DEFAULT_STUCK_DAYS_THRESHOLD: u64 = 7;

/// Body of the distribution aggregate call: the dimension and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionRequest {
    pub dimension: Value,
}

/// Body of the trend aggregate call. The caller's `interval` is sent as
/// `bucket`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRequest {
    pub bucket: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StuckQuery {
    pub days_threshold: Value,
}

impl StuckQuery {
    /// Render the threshold for a query string: strings bare, anything
    /// else as JSON text.
    pub fn threshold_param(&self) -> String {
        match &self.days_threshold {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Strip a parameter bag down to `{dimension}`.
///
/// Fails with `dimension required` when `params` is not an object or its
/// `dimension` is missing or `null`. Empty strings, `0` and `false` are
/// accepted.
pub fn build_distribution_request(params: &RawPayload) -> WardwatchResult<DistributionRequest> {
    let dimension = required_field(params, "dimension")?;
    Ok(DistributionRequest { dimension })
}

/// Strip a parameter bag down to `{bucket}` taken from its `interval`.
pub fn build_trend_request(params: &RawPayload) -> WardwatchResult<TrendRequest> {
    let bucket = required_field(params, "interval")?;
    Ok(TrendRequest { bucket })
}

/// `None` and `Some(Value::Null)` fall back to the default threshold; any
/// other value is echoed unchanged.
pub fn build_stuck_query(days_threshold: Option<Value>) -> StuckQuery {
    let days_threshold = match days_threshold {
        None | Some(Value::Null) => Value::from(DEFAULT_STUCK_DAYS_THRESHOLD),
        Some(value) => value,
    };
    StuckQuery { days_threshold }
}

fn required_field(params: &Value, field: &str) -> WardwatchResult<Value> {
    params
        .as_object()
        .and_then(|object| object.get(field))
        .filter(|value| !value.is_null())
        .cloned()
        .ok_or_else(|| WardwatchError::Validation(format!("{field} required")))
}
