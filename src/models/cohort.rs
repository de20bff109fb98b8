//! Cohorts: named, colored slices of the UTXO or address set.
//!
//! What the backend computes for a cohort depends on its family, so the metric
//! bundle is a closed [`CohortVariant`]. Builders ask the variant for optional
//! bundles instead of probing for keys.

use itertools::Itertools;
use strum_macros::AsRefStr;

use crate::config::cohorts::{CohortShape, FULL_PERCENTILES, QUARTILE_PERCENTILES};
use crate::config::palette::Hue;
use crate::domain::{OptionsError, Result};
use crate::models::patterns::{RatioPattern, SumCum, SupplyPattern, ValuePattern, ValueSumPattern};
use crate::models::{MetricId, prefixed};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplyBundle {
    pub supply: SupplyPattern,
    pub in_profit: ValuePattern,
    pub in_loss: ValuePattern,
    pub rel_to_circulating: MetricId,
    pub in_profit_rel_to_own: MetricId,
    pub in_loss_rel_to_own: MetricId,
    pub change_30d: ValuePattern,
    pub utxo_count: MetricId,
    pub utxo_count_30d_change: MetricId,
}

impl SupplyBundle {
    fn new(prefix: &str) -> Self {
        let supply = prefixed(prefix, "supply");
        Self {
            in_profit: ValuePattern::new(&supply.suffixed("in_profit")),
            in_loss: ValuePattern::new(&supply.suffixed("in_loss")),
            rel_to_circulating: supply.suffixed("rel_to_circulating_supply"),
            in_profit_rel_to_own: supply.suffixed("in_profit_rel_to_own_supply"),
            in_loss_rel_to_own: supply.suffixed("in_loss_rel_to_own_supply"),
            change_30d: ValuePattern::new(&supply.suffixed("30d_change")),
            utxo_count: prefixed(prefix, "utxo_count"),
            utxo_count_30d_change: prefixed(prefix, "utxo_count_30d_change"),
            supply: SupplyPattern::new(&supply),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RealizedBundle {
    pub price: RatioPattern,
    pub cap: MetricId,
    pub cap_30d_delta: MetricId,
    pub cap_rel_to_own_market_cap: MetricId,
    pub profit: SumCum,
    pub loss: SumCum,
    pub neg_loss: MetricId,
    pub net_pnl: SumCum,
    pub net_pnl_rel_to_realized_cap: MetricId,
    pub value_created: MetricId,
    pub value_destroyed: MetricId,
    pub sopr: MetricId,
    pub sopr_7d_ema: MetricId,
    pub sopr_30d_ema: MetricId,
    pub sell_side_risk_ratio: MetricId,
}

impl RealizedBundle {
    fn new(prefix: &str) -> Self {
        let cap = prefixed(prefix, "realized_cap");
        let sopr = prefixed(prefix, "sopr");
        Self {
            price: RatioPattern::new(&prefixed(prefix, "realized_price")),
            cap_30d_delta: cap.suffixed("30d_delta"),
            cap_rel_to_own_market_cap: cap.suffixed("rel_to_own_market_cap"),
            cap,
            profit: SumCum::new(&prefixed(prefix, "realized_profit")),
            loss: SumCum::new(&prefixed(prefix, "realized_loss")),
            neg_loss: prefixed(prefix, "neg_realized_loss_sum"),
            net_pnl: SumCum::new(&prefixed(prefix, "net_realized_pnl")),
            net_pnl_rel_to_realized_cap: prefixed(prefix, "net_realized_pnl_rel_to_realized_cap"),
            value_created: prefixed(prefix, "value_created"),
            value_destroyed: prefixed(prefix, "value_destroyed"),
            sopr_7d_ema: sopr.suffixed("7d_ema"),
            sopr_30d_ema: sopr.suffixed("30d_ema"),
            sopr,
            sell_side_risk_ratio: prefixed(prefix, "sell_side_risk_ratio"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnrealizedBundle {
    pub profit: MetricId,
    pub loss: MetricId,
    pub neg_loss: MetricId,
    pub net_pnl: MetricId,
    pub nupl: MetricId,
    pub profit_rel_to_market_cap: MetricId,
    pub loss_rel_to_market_cap: MetricId,
}

impl UnrealizedBundle {
    fn new(prefix: &str) -> Self {
        let profit = prefixed(prefix, "unrealized_profit");
        let loss = prefixed(prefix, "unrealized_loss");
        Self {
            profit_rel_to_market_cap: profit.suffixed("rel_to_market_cap"),
            loss_rel_to_market_cap: loss.suffixed("rel_to_market_cap"),
            profit,
            loss,
            neg_loss: prefixed(prefix, "neg_unrealized_loss"),
            net_pnl: prefixed(prefix, "net_unrealized_pnl"),
            nupl: prefixed(prefix, "nupl"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostBasisBundle {
    pub min: MetricId,
    pub max: MetricId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityBundle {
    pub sent: ValueSumPattern,
    pub coinblocks_destroyed: SumCum,
    pub coindays_destroyed: SumCum,
    pub satblocks_destroyed: MetricId,
    pub satdays_destroyed: MetricId,
}

impl ActivityBundle {
    fn new(prefix: &str) -> Self {
        Self {
            sent: ValueSumPattern::new(&prefixed(prefix, "sent")),
            coinblocks_destroyed: SumCum::new(&prefixed(prefix, "coinblocks_destroyed")),
            coindays_destroyed: SumCum::new(&prefixed(prefix, "coindays_destroyed")),
            satblocks_destroyed: prefixed(prefix, "satblocks_destroyed"),
            satdays_destroyed: prefixed(prefix, "satdays_destroyed"),
        }
    }
}

/// SOPR computed without outputs spent within the hour they were created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjustedSopr {
    pub sopr: MetricId,
    pub sopr_7d_ema: MetricId,
    pub sopr_30d_ema: MetricId,
    pub value_created: MetricId,
    pub value_destroyed: MetricId,
}

impl AdjustedSopr {
    fn new(prefix: &str) -> Self {
        let sopr = prefixed(prefix, "adjusted_sopr");
        Self {
            sopr_7d_ema: sopr.suffixed("7d_ema"),
            sopr_30d_ema: sopr.suffixed("30d_ema"),
            sopr,
            value_created: prefixed(prefix, "adjusted_value_created"),
            value_destroyed: prefixed(prefix, "adjusted_value_destroyed"),
        }
    }
}

/// Cost basis percentiles (`<prefix>_cost_basis_pct05`...), ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostBasisPercentiles {
    pub list: Vec<(u8, MetricId)>,
}

impl CostBasisPercentiles {
    fn new(prefix: &str, percentiles: &[u8]) -> Self {
        let stem = prefixed(prefix, "cost_basis");
        Self {
            list: percentiles
                .iter()
                .map(|p| (*p, stem.suffixed(&format!("pct{:02}", p))))
                .collect(),
        }
    }

    pub fn median(&self) -> Option<&MetricId> {
        self.list.iter().find(|(p, _)| *p == 50).map(|(_, m)| m)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressCount {
    pub count: MetricId,
    pub count_30d_change: MetricId,
    pub empty: MetricId,
}

impl AddressCount {
    fn new(prefix: &str) -> Self {
        let count = prefixed(prefix, "addr_count");
        Self {
            count_30d_change: count.suffixed("30d_change"),
            count,
            empty: prefixed(prefix, "empty_addr_count"),
        }
    }
}

/// Bundles served for every cohort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CohortCore {
    pub supply: SupplyBundle,
    pub realized: RealizedBundle,
    pub unrealized: UnrealizedBundle,
    pub cost_basis: CostBasisBundle,
    pub activity: ActivityBundle,
}

impl CohortCore {
    pub fn new(prefix: &str) -> Self {
        Self {
            supply: SupplyBundle::new(prefix),
            realized: RealizedBundle::new(prefix),
            unrealized: UnrealizedBundle::new(prefix),
            cost_basis: CostBasisBundle {
                min: prefixed(prefix, "min_cost_basis"),
                max: prefixed(prefix, "max_cost_basis"),
            },
            activity: ActivityBundle::new(prefix),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CohortVariant {
    Full {
        core: CohortCore,
        adjusted: AdjustedSopr,
        percentiles: CostBasisPercentiles,
    },
    WithAdjusted {
        core: CohortCore,
        adjusted: AdjustedSopr,
    },
    WithPercentiles {
        core: CohortCore,
        percentiles: CostBasisPercentiles,
    },
    Basic {
        core: CohortCore,
    },
    WithAddresses {
        core: CohortCore,
        addresses: AddressCount,
    },
}

impl CohortVariant {
    pub fn new(shape: CohortShape, prefix: &str) -> Self {
        let core = CohortCore::new(prefix);
        match shape {
            CohortShape::Full => CohortVariant::Full {
                core,
                adjusted: AdjustedSopr::new(prefix),
                percentiles: CostBasisPercentiles::new(prefix, FULL_PERCENTILES),
            },
            CohortShape::WithAdjusted => CohortVariant::WithAdjusted {
                core,
                adjusted: AdjustedSopr::new(prefix),
            },
            CohortShape::WithPercentiles => CohortVariant::WithPercentiles {
                core,
                percentiles: CostBasisPercentiles::new(prefix, QUARTILE_PERCENTILES),
            },
            CohortShape::Basic => CohortVariant::Basic { core },
            CohortShape::WithAddresses => CohortVariant::WithAddresses {
                core,
                addresses: AddressCount::new(prefix),
            },
        }
    }

    pub fn core(&self) -> &CohortCore {
        match self {
            CohortVariant::Full { core, .. }
            | CohortVariant::WithAdjusted { core, .. }
            | CohortVariant::WithPercentiles { core, .. }
            | CohortVariant::Basic { core }
            | CohortVariant::WithAddresses { core, .. } => core,
        }
    }

    pub fn adjusted(&self) -> Option<&AdjustedSopr> {
        match self {
            CohortVariant::Full { adjusted, .. } | CohortVariant::WithAdjusted { adjusted, .. } => {
                Some(adjusted)
            }
            _ => None,
        }
    }

    pub fn percentiles(&self) -> Option<&CostBasisPercentiles> {
        match self {
            CohortVariant::Full { percentiles, .. }
            | CohortVariant::WithPercentiles { percentiles, .. } => Some(percentiles),
            _ => None,
        }
    }

    pub fn addresses(&self) -> Option<&AddressCount> {
        match self {
            CohortVariant::WithAddresses { addresses, .. } => Some(addresses),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cohort {
    /// Metric prefix, empty for the `all` cohort
    pub id: String,
    pub name: String,
    pub title: String,
    pub color: Hue,
    pub tree: CohortVariant,
}

impl Cohort {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        color: impl Into<Hue>,
        shape: CohortShape,
    ) -> Self {
        let id = id.into();
        let tree = CohortVariant::new(shape, &id);
        Self {
            id,
            name: name.into(),
            title: title.into(),
            color: color.into(),
            tree,
        }
    }
}

/// Cohorts overlaid on shared "Compare" charts.
#[derive(Clone, Debug)]
pub struct CohortGroup<'a> {
    pub name: String,
    pub title: String,
    pub list: Vec<&'a Cohort>,
}

impl<'a> CohortGroup<'a> {
    /// Members keep their first position when listed twice (e.g. `all` next to its own family).
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        list: impl IntoIterator<Item = &'a Cohort>,
    ) -> Result<Self> {
        let name = name.into();
        let list: Vec<&Cohort> = list.into_iter().unique_by(|cohort| cohort.id.clone()).collect();
        if list.is_empty() {
            return Err(OptionsError::EmptyGroup(name));
        }
        Ok(Self {
            name,
            title: title.into(),
            list,
        })
    }

    /// Every member's value of an optional bundle, or `None` as soon as one lacks it.
    pub fn all<T: 'a>(
        &self,
        pick: impl Fn(&'a CohortVariant) -> Option<&'a T>,
    ) -> Option<Vec<(&'a Cohort, &'a T)>> {
        self.list
            .iter()
            .copied()
            .map(|cohort| pick(&cohort.tree).map(|value| (cohort, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::palette::Color;

    #[test]
    fn all_cohort_uses_bare_stems() {
        let cohort = Cohort::new("", "All", "All UTXOs", Color::Orange, CohortShape::Full);
        let core = cohort.tree.core();
        assert_eq!(core.supply.supply.total.sats.as_str(), "supply");
        assert_eq!(core.realized.price.price.as_str(), "realized_price");
        assert_eq!(core.activity.sent.bitcoin.sum.as_str(), "sent_btc_sum");
    }

    #[test]
    fn variant_accessors_follow_shape() {
        let lth = CohortVariant::new(CohortShape::WithPercentiles, "lth");
        assert!(lth.adjusted().is_none());
        assert_eq!(lth.percentiles().map(|p| p.list.len()), Some(5));
        assert_eq!(
            lth.percentiles().and_then(|p| p.median()).map(|m| m.as_str()),
            Some("lth_cost_basis_pct50")
        );

        let sth = CohortVariant::new(CohortShape::Full, "sth");
        assert!(sth.adjusted().is_some());
        assert_eq!(sth.percentiles().map(|p| p.list.len()), Some(FULL_PERCENTILES.len()));
        assert_eq!(sth.as_ref(), "full");

        let addrs = CohortVariant::new(CohortShape::WithAddresses, "addrs_above_1btc");
        assert_eq!(
            addrs.addresses().map(|a| a.count.as_str()),
            Some("addrs_above_1btc_addr_count")
        );
        assert!(addrs.percentiles().is_none());
    }

    #[test]
    fn percentile_ids_are_zero_padded() {
        let full = CohortVariant::new(CohortShape::Full, "sth");
        let first = &full.percentiles().unwrap().list[0];
        assert_eq!(first.0, 5);
        assert_eq!(first.1.as_str(), "sth_cost_basis_pct05");
    }

    #[test]
    fn group_dedupes_and_rejects_empty() {
        let all = Cohort::new("", "All", "All", Color::Orange, CohortShape::Full);
        let sth = Cohort::new("sth", "STH", "STH", Color::Yellow, CohortShape::Full);
        let group = CohortGroup::new("Terms", "Terms", [&all, &sth, &all]).unwrap();
        assert_eq!(group.list.len(), 2);
        assert!(matches!(
            CohortGroup::new("None", "None", []),
            Err(OptionsError::EmptyGroup(_))
        ));
    }

    #[test]
    fn group_capability_requires_every_member() {
        let sth = Cohort::new("sth", "STH", "STH", Color::Yellow, CohortShape::Full);
        let lth = Cohort::new("lth", "LTH", "LTH", Color::Fuchsia, CohortShape::WithPercentiles);
        let terms = CohortGroup::new("Terms", "Terms", [&sth, &lth]).unwrap();
        assert!(terms.all(|tree| tree.adjusted()).is_none());
        assert_eq!(terms.all(|tree| tree.percentiles()).map(|v| v.len()), Some(2));
    }
}
