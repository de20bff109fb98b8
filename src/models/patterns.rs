//! Metric patterns: groups of related series under named sub-keys.
//!
//! Which keys a pattern carries is decided by the backend per metric, so the
//! statistical views are optional and the fan-out helpers skip what is absent.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::market::{RATIO_BANDS, ZSCORE_WINDOWS};
use crate::config::palette::Color;
use crate::models::MetricId;

/// A quantity served in the three denominations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuePattern {
    pub sats: MetricId,
    pub bitcoin: MetricId,
    pub dollars: MetricId,
}

impl ValuePattern {
    pub fn new(stem: &MetricId) -> Self {
        Self {
            sats: stem.clone(),
            bitcoin: stem.suffixed("btc"),
            dollars: stem.suffixed("usd"),
        }
    }
}

/// Statistical views of a per-block metric, in legend order.
///
/// Default-active views come first so they lead the legend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum StatKey {
    Base,
    Sum,
    Cumulative,
    Average,
    Max,
    Min,
    Median,
    Pct90,
    Pct75,
    Pct25,
    Pct10,
}

impl StatKey {
    /// Suffix appended to the stem by the backend.
    pub fn suffix(&self) -> &'static str {
        match self {
            StatKey::Base => "",
            StatKey::Sum => "sum",
            StatKey::Cumulative => "cumulative",
            StatKey::Average => "avg",
            StatKey::Max => "max",
            StatKey::Min => "min",
            StatKey::Median => "median",
            StatKey::Pct90 => "pct90",
            StatKey::Pct75 => "pct75",
            StatKey::Pct25 => "pct25",
            StatKey::Pct10 => "pct10",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Base => "",
            StatKey::Sum => "Sum",
            StatKey::Cumulative => "Cumulative",
            StatKey::Average => "Average",
            StatKey::Max => "Max",
            StatKey::Min => "Min",
            StatKey::Median => "Median",
            StatKey::Pct90 => "90th Percentile",
            StatKey::Pct75 => "75th Percentile",
            StatKey::Pct25 => "25th Percentile",
            StatKey::Pct10 => "10th Percentile",
        }
    }

    /// Fixed color of the view; `None` means the caller's color.
    pub fn color(&self) -> Option<Color> {
        match self {
            StatKey::Base | StatKey::Sum => None,
            StatKey::Cumulative => Some(Color::Blue),
            StatKey::Average => Some(Color::Orange),
            StatKey::Max => Some(Color::Green),
            StatKey::Min => Some(Color::Red),
            StatKey::Median => Some(Color::Purple),
            StatKey::Pct90 => Some(Color::Rose),
            StatKey::Pct75 => Some(Color::Pink),
            StatKey::Pct25 => Some(Color::Violet),
            StatKey::Pct10 => Some(Color::Fuchsia),
        }
    }

    pub fn default_active(&self) -> bool {
        matches!(self, StatKey::Base | StatKey::Sum)
    }
}

/// Key sets the backend computes, named after what they are used for.
pub mod keys {
    use super::StatKey::{self, *};

    pub const ALL: &[StatKey] = &[
        Base, Sum, Cumulative, Average, Max, Min, Median, Pct90, Pct75, Pct25, Pct10,
    ];
    /// Per-block distribution without totals (intervals, fee rates, sizes per tx)
    pub const DISTRIBUTION: &[StatKey] =
        &[Base, Average, Max, Min, Median, Pct90, Pct75, Pct25, Pct10];
    /// Totals and their distribution, no raw per-block value
    pub const FULL: &[StatKey] =
        &[Sum, Cumulative, Average, Max, Min, Median, Pct90, Pct75, Pct25, Pct10];
    pub const SUM_CUM: &[StatKey] = &[Sum, Cumulative];
    pub const BASE_CUM: &[StatKey] = &[Base, Cumulative];
    pub const BASE_SUM_CUM: &[StatKey] = &[Base, Sum, Cumulative];
    pub const BASE_AVG: &[StatKey] = &[Base, Average];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsPattern {
    pub base: Option<MetricId>,
    pub sum: Option<MetricId>,
    pub cumulative: Option<MetricId>,
    pub average: Option<MetricId>,
    pub min: Option<MetricId>,
    pub max: Option<MetricId>,
    pub median: Option<MetricId>,
    pub pct10: Option<MetricId>,
    pub pct25: Option<MetricId>,
    pub pct75: Option<MetricId>,
    pub pct90: Option<MetricId>,
}

impl StatsPattern {
    /// Pattern carrying exactly `keys`, named `<stem>_<suffix>`.
    pub fn with_keys(stem: &MetricId, keys: &[StatKey]) -> Self {
        let mut pattern = StatsPattern::default();
        for key in keys {
            pattern.set(*key, stem.suffixed(key.suffix()));
        }
        pattern
    }

    pub fn full(stem: &MetricId) -> Self {
        Self::with_keys(stem, keys::FULL)
    }

    pub fn distribution(stem: &MetricId) -> Self {
        Self::with_keys(stem, keys::DISTRIBUTION)
    }

    pub fn sum_cum(stem: &MetricId) -> Self {
        Self::with_keys(stem, keys::SUM_CUM)
    }

    pub fn get(&self, key: StatKey) -> Option<&MetricId> {
        match key {
            StatKey::Base => self.base.as_ref(),
            StatKey::Sum => self.sum.as_ref(),
            StatKey::Cumulative => self.cumulative.as_ref(),
            StatKey::Average => self.average.as_ref(),
            StatKey::Max => self.max.as_ref(),
            StatKey::Min => self.min.as_ref(),
            StatKey::Median => self.median.as_ref(),
            StatKey::Pct90 => self.pct90.as_ref(),
            StatKey::Pct75 => self.pct75.as_ref(),
            StatKey::Pct25 => self.pct25.as_ref(),
            StatKey::Pct10 => self.pct10.as_ref(),
        }
    }

    pub fn set(&mut self, key: StatKey, metric: MetricId) {
        let slot = match key {
            StatKey::Base => &mut self.base,
            StatKey::Sum => &mut self.sum,
            StatKey::Cumulative => &mut self.cumulative,
            StatKey::Average => &mut self.average,
            StatKey::Max => &mut self.max,
            StatKey::Min => &mut self.min,
            StatKey::Median => &mut self.median,
            StatKey::Pct90 => &mut self.pct90,
            StatKey::Pct75 => &mut self.pct75,
            StatKey::Pct25 => &mut self.pct25,
            StatKey::Pct10 => &mut self.pct10,
        };
        *slot = Some(metric);
    }

    /// Present views in legend order.
    pub fn present(&self) -> impl Iterator<Item = (StatKey, &MetricId)> {
        StatKey::iter().filter_map(move |key| self.get(key).map(|metric| (key, metric)))
    }

    /// The headline series: the raw value when served, else the sum.
    pub fn headline(&self) -> Option<&MetricId> {
        self.base.as_ref().or(self.sum.as_ref())
    }
}

/// A [`StatsPattern`] per denomination (block rewards, fees).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinbasePattern {
    pub sats: StatsPattern,
    pub bitcoin: StatsPattern,
    pub dollars: StatsPattern,
}

impl CoinbasePattern {
    pub fn new(stem: &MetricId, keys: &[StatKey]) -> Self {
        Self {
            sats: StatsPattern::with_keys(stem, keys),
            bitcoin: StatsPattern::with_keys(&stem.suffixed("btc"), keys),
            dollars: StatsPattern::with_keys(&stem.suffixed("usd"), keys),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumCum {
    pub sum: MetricId,
    pub cumulative: MetricId,
}

impl SumCum {
    pub fn new(stem: &MetricId) -> Self {
        Self {
            sum: stem.suffixed("sum"),
            cumulative: stem.suffixed("cumulative"),
        }
    }
}

/// Flows (sent, destroyed, mined) summed per day and accumulated, in the three denominations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSumPattern {
    pub sats: SumCum,
    pub bitcoin: SumCum,
    pub dollars: SumCum,
}

impl ValueSumPattern {
    pub fn new(stem: &MetricId) -> Self {
        Self {
            sats: SumCum::new(stem),
            bitcoin: SumCum::new(&stem.suffixed("btc")),
            dollars: SumCum::new(&stem.suffixed("usd")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplyPattern {
    pub total: ValuePattern,
    pub halved: ValuePattern,
}

impl SupplyPattern {
    pub fn new(stem: &MetricId) -> Self {
        Self {
            total: ValuePattern::new(stem),
            halved: ValuePattern::new(&stem.suffixed("half")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatioBand {
    pub label: &'static str,
    pub color: Color,
    pub ratio: MetricId,
    pub price: MetricId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZScore {
    pub label: &'static str,
    pub color: Color,
    pub metric: MetricId,
}

/// A price compared with the market price: the ratio, its smoothed versions,
/// percentile bands and z-scores over several windows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatioPattern {
    pub price: MetricId,
    pub ratio: MetricId,
    pub ratio_1w_sma: MetricId,
    pub ratio_1m_sma: MetricId,
    pub bands: Vec<RatioBand>,
    pub zscores: Vec<ZScore>,
}

impl RatioPattern {
    pub fn new(price: &MetricId) -> Self {
        let ratio = price.suffixed("ratio");
        let bands = RATIO_BANDS
            .iter()
            .map(|band| {
                let metric = ratio.suffixed(band.id);
                RatioBand {
                    label: band.label,
                    color: band.color,
                    price: metric.suffixed("usd"),
                    ratio: metric,
                }
            })
            .collect();
        let zscores = ZSCORE_WINDOWS
            .iter()
            .map(|window| ZScore {
                label: window.label,
                color: window.color,
                metric: ratio.suffixed(&join_nonempty(window.id, "zscore")),
            })
            .collect();
        Self {
            price: price.clone(),
            ratio_1w_sma: ratio.suffixed("1w_sma"),
            ratio_1m_sma: ratio.suffixed("1m_sma"),
            ratio,
            bands,
            zscores,
        }
    }
}

fn join_nonempty(head: &str, tail: &str) -> String {
    if head.is_empty() {
        tail.to_string()
    } else {
        format!("{}_{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_keys_sets_exactly_the_requested_views() {
        let pattern = StatsPattern::with_keys(&MetricId::new("fee_rate"), keys::BASE_AVG);
        let present: Vec<_> = pattern.present().map(|(k, m)| (k, m.to_string())).collect();
        assert_eq!(
            present,
            vec![
                (StatKey::Base, "fee_rate".to_string()),
                (StatKey::Average, "fee_rate_avg".to_string())
            ]
        );
    }

    #[test]
    fn present_follows_legend_order() {
        let mut pattern = StatsPattern::default();
        pattern.set(StatKey::Pct10, MetricId::new("a_pct10"));
        pattern.set(StatKey::Sum, MetricId::new("a_sum"));
        pattern.set(StatKey::Min, MetricId::new("a_min"));
        let order: Vec<_> = pattern.present().map(|(k, _)| k).collect();
        assert_eq!(order, vec![StatKey::Sum, StatKey::Min, StatKey::Pct10]);
    }

    #[test]
    fn headline_prefers_base() {
        let both = StatsPattern::with_keys(&MetricId::new("x"), keys::BASE_SUM_CUM);
        assert_eq!(both.headline().map(|m| m.as_str()), Some("x"));
        let sum_only = StatsPattern::sum_cum(&MetricId::new("x"));
        assert_eq!(sum_only.headline().map(|m| m.as_str()), Some("x_sum"));
    }

    #[test]
    fn ratio_pattern_names() {
        let ratio = RatioPattern::new(&MetricId::new("realized_price"));
        assert_eq!(ratio.ratio.as_str(), "realized_price_ratio");
        assert_eq!(ratio.ratio_1w_sma.as_str(), "realized_price_ratio_1w_sma");
        assert_eq!(ratio.bands[0].price.as_str(), "realized_price_ratio_pct99_usd");
        assert!(
            ratio
                .zscores
                .iter()
                .any(|z| z.metric.as_str() == "realized_price_ratio_zscore")
        );
    }

    #[test]
    fn value_sum_pattern_names() {
        let sent = ValueSumPattern::new(&MetricId::new("sth_sent"));
        assert_eq!(sent.bitcoin.sum.as_str(), "sth_sent_btc_sum");
        assert_eq!(sent.dollars.cumulative.as_str(), "sth_sent_usd_cumulative");
    }
}
