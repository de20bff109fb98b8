use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of one fetchable time series served by the metrics backend.
///
/// Serialized as the bare name, which is what the chart shell hands to the API.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricId(String);

impl MetricId {
    pub fn new(name: impl Into<String>) -> Self {
        MetricId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `block_size` + `sum` gives `block_size_sum`.
    pub fn suffixed(&self, suffix: &str) -> Self {
        if suffix.is_empty() {
            return self.clone();
        }
        MetricId(format!("{}_{}", self.0, suffix))
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MetricId {
    fn from(name: &str) -> Self {
        MetricId::new(name)
    }
}

/// Joins a cohort prefix and a metric stem. The `all` cohort has an empty prefix,
/// so its metrics carry the bare stem.
pub fn prefixed(prefix: &str, stem: &str) -> MetricId {
    if prefix.is_empty() {
        MetricId::new(stem)
    } else {
        MetricId::new(format!("{}_{}", prefix, stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_suffix() {
        assert_eq!(prefixed("", "supply").as_str(), "supply");
        assert_eq!(prefixed("sth", "supply").as_str(), "sth_supply");
        assert_eq!(MetricId::new("fee").suffixed("btc").as_str(), "fee_btc");
        assert_eq!(MetricId::new("fee").suffixed("").as_str(), "fee");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&MetricId::new("price_close")).unwrap();
        assert_eq!(json, "\"price_close\"");
    }
}
