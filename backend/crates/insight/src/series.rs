use serde::{Deserialize, Serialize};

use crate::coerce::{finite_or_zero, string_or_empty};
use crate::RawPayload;

/// One category of a distribution breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionPoint {
    pub label: String,
    pub value: f64,
}

/// One time bucket of a trend series. `period` is whatever the backend
/// sent for the bucket, never reparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: String,
    pub count: f64,
}

/// Map raw `[{key, count}]` rows to distribution points.
pub fn adapt_distribution(raw: &RawPayload) -> Vec<DistributionPoint> {
    map_points(raw, "key", |label, value| DistributionPoint { label, value })
}

/// Map raw `[{bucket, count}]` rows to trend points.
pub fn adapt_trend(raw: &RawPayload) -> Vec<TrendPoint> {
    map_points(raw, "bucket", |period, count| TrendPoint { period, count })
}

/// Shared walk for both series shapes: non-arrays become empty, `null`
/// rows are dropped, order is kept.
fn map_points<T>(raw: &RawPayload, name_field: &str, build: impl Fn(String, f64) -> T) -> Vec<T> {
    let Some(rows) = raw.as_array() else {
        return Vec::new();
    };

    rows.iter()
        .filter(|row| !row.is_null())
        .map(|row| {
            build(
                string_or_empty(row.get(name_field)),
                finite_or_zero(row.get("count")),
            )
        })
        .collect()
}
