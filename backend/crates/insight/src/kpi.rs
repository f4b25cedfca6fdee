use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::finite_or_zero;
use crate::status::{classify_status, StatusClass};
use crate::RawPayload;

/// Field holding the `[{status, count}]` bucket list.
pub const STATUS_BUCKETS_FIELD: &str = "by_status";

/// Field holding the `{open, overdue, total, completed}` counter object.
pub const ACTION_ITEMS_FIELD: &str = "action_items";

/// The four dashboard KPI counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub open_subcases: i64,
    pub pending_approvals: i64,
    pub active_action_items: i64,
    pub overdue_items: i64,
}

/// Reduce a raw KPI response to a [`KpiSummary`].
///
/// Anything other than a JSON object yields the all-zero summary. Buckets
/// without a `status` are skipped; counts go through [`finite_or_zero`] and
/// are truncated toward zero. Negative counts are not clamped.
pub fn adapt_kpi_summary(raw: &RawPayload) -> KpiSummary {
    let Some(object) = raw.as_object() else {
        return KpiSummary::default();
    };

    let mut open = 0.0;
    let mut pending = 0.0;

    let buckets = object
        .get(STATUS_BUCKETS_FIELD)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for bucket in buckets {
        let Some(status) = bucket.get("status").filter(|s| !s.is_null()) else {
            continue;
        };
        let Some(status) = status.as_str() else {
            continue;
        };
        let class = classify_status(status);
        if !class.is_open() {
            continue;
        }
        let count = finite_or_zero(bucket.get("count"));
        open += count;
        if class == StatusClass::PendingApproval {
            pending += count;
        }
    }

    let action_items = object.get(ACTION_ITEMS_FIELD).and_then(Value::as_object);
    let counter = |name: &str| finite_or_zero(action_items.and_then(|items| items.get(name)));

    KpiSummary {
        open_subcases: to_count(open),
        pending_approvals: to_count(pending),
        active_action_items: to_count(counter("open")),
        overdue_items: to_count(counter("overdue")),
    }
}

fn to_count(value: f64) -> i64 {
    value.trunc() as i64
}
