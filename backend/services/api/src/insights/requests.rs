use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use wardwatch_insight::OverviewParams;

/// Query-string filters forwarded as a parameter bag. The request builders
/// pick out the one key the backend accepts.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct FilterQuery(pub HashMap<String, String>);

impl FilterQuery {
    pub fn to_params(&self) -> Value {
        let bag: Map<String, Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(bag)
    }

    pub fn days_threshold(&self) -> Option<Value> {
        self.0.get("days_threshold").cloned().map(Value::String)
    }

    pub fn to_overview_params(&self) -> OverviewParams {
        let params = self.to_params();
        OverviewParams {
            distribution: params.clone(),
            trend: params,
            days_threshold: self.days_threshold(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StuckQueryParams {
    pub days_threshold: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(pairs: &[(&str, &str)]) -> FilterQuery {
        FilterQuery(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn params_bag_keeps_every_key_as_string() {
        let q = query(&[("dimension", "status"), ("org_unit_id", "5")]);
        assert_eq!(
            q.to_params(),
            json!({"dimension": "status", "org_unit_id": "5"})
        );
    }

    #[test]
    fn empty_query_is_empty_object() {
        assert_eq!(FilterQuery::default().to_params(), json!({}));
    }

    #[test]
    fn overview_params_share_the_bag() {
        let q = query(&[("dimension", "category"), ("interval", "month"), ("days_threshold", "10")]);
        let params = q.to_overview_params();
        assert_eq!(params.distribution["dimension"], "category");
        assert_eq!(params.trend["interval"], "month");
        assert_eq!(params.days_threshold, Some(json!("10")));
    }

    #[test]
    fn missing_threshold_is_none() {
        assert!(query(&[("dimension", "status")]).days_threshold().is_none());
    }
}
