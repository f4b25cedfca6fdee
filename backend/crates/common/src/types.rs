use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity reported by a running service on `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
}

impl ServiceInfo {
    /// `version` should be the binary's own `CARGO_PKG_VERSION`, not this
    /// crate's.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: version.to_owned(),
            instance_id: Uuid::new_v4(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_name_and_version() {
        let info = ServiceInfo::new("wardwatch-api", "1.2.3");
        assert_eq!(info.name, "wardwatch-api");
        assert_eq!(info.version, "1.2.3");
    }

    #[test]
    fn each_instance_gets_distinct_id() {
        let a = ServiceInfo::new("x", "0.1.0");
        let b = ServiceInfo::new("x", "0.1.0");
        assert_ne!(a.instance_id, b.instance_id);
    }

    #[test]
    fn serializes_all_fields() {
        let info = ServiceInfo::new("wardwatch-api", "0.1.0");
        let json = serde_json::to_value(&info).expect("serialize");
        assert_eq!(json["name"], "wardwatch-api");
        assert_eq!(json["version"], "0.1.0");
        assert!(json.get("instance_id").is_some());
    }
}
