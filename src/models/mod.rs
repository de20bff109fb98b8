// Metric-pattern source: what the backend serves and how it is named

pub mod catalog;
pub mod cohort;
pub mod metric;
pub mod patterns;
pub mod tree;

// Re-export key types for convenience
pub use catalog::MetricCatalog;
pub use cohort::{Cohort, CohortGroup, CohortVariant};
pub use metric::{MetricId, prefixed};
pub use patterns::{
    CoinbasePattern, RatioPattern, StatKey, StatsPattern, SupplyPattern, ValuePattern,
    ValueSumPattern,
};
pub use tree::MetricsTree;
