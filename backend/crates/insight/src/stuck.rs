use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce::finite_or_zero;
use crate::RawPayload;

/// Placeholder shown in the "assigned level" column until the backend
/// reports one.
pub const UNASSIGNED_LEVEL: &str = "\u{2014}";

/// A subcase that has sat in its current stage past the threshold.
///
/// Every field the backend sent is kept in `fields` (including `status`,
/// untouched). `stage` mirrors `status`; it is `None` when the record had
/// no `status` key and `Some(Value::Null)` when the key was `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StuckCase {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub days_in_stage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Value>,
    pub assigned_level: &'static str,
}

impl StuckCase {
    pub fn subcase_id(&self) -> Option<&Value> {
        self.fields.get("subcase_id")
    }

    pub fn status(&self) -> Option<&Value> {
        self.fields.get("status")
    }
}

/// Annotate raw stuck-case records for display.
pub fn adapt_stuck_cases(raw: &RawPayload) -> Vec<StuckCase> {
    let Some(rows) = raw.as_array() else {
        return Vec::new();
    };

    rows.iter()
        .filter(|row| !row.is_null())
        .map(annotate)
        .collect()
}

fn annotate(row: &Value) -> StuckCase {
    let mut fields = row.as_object().cloned().unwrap_or_default();

    let days_in_stage = finite_or_zero(fields.get("days_in_stage"));
    let stage = fields.get("status").cloned();

    // Derived keys live on the struct; drop any stale copies so the
    // flattened output has a single value for each.
    fields.remove("days_in_stage");
    fields.remove("stage");
    fields.remove("assigned_level");

    StuckCase {
        fields,
        days_in_stage,
        stage,
        assigned_level: UNASSIGNED_LEVEL,
    }
}
