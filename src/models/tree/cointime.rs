//! Cointime economics: liveliness, vaulted/active splits and their prices.

use crate::models::MetricId;
use crate::models::patterns::{RatioPattern, StatsPattern, ValuePattern};

pub struct Cointime {
    pub liveliness: MetricId,
    pub vaultedness: MetricId,
    pub activity_to_vaultedness_ratio: MetricId,
    pub coinblocks_created: StatsPattern,
    pub coinblocks_destroyed: StatsPattern,
    pub coinblocks_stored: StatsPattern,
    pub vaulted_supply: ValuePattern,
    pub active_supply: ValuePattern,
    pub vaulted_price: RatioPattern,
    pub active_price: RatioPattern,
    pub true_market_mean: RatioPattern,
    pub cointime_price: RatioPattern,
    pub investor_cap: MetricId,
    pub thermo_cap: MetricId,
    pub vaulted_cap: MetricId,
    pub active_cap: MetricId,
    pub cointime_cap: MetricId,
    pub value_created: StatsPattern,
    pub value_destroyed: StatsPattern,
    pub value_stored: StatsPattern,
    pub adj_inflation_rate: MetricId,
    pub adj_tx_btc_velocity: MetricId,
    pub adj_tx_usd_velocity: MetricId,
}

impl Cointime {
    pub fn new() -> Self {
        let sum_cum = |stem: &str| StatsPattern::sum_cum(&MetricId::new(stem));
        let ratio = |stem: &str| RatioPattern::new(&MetricId::new(stem));
        Self {
            liveliness: MetricId::new("liveliness"),
            vaultedness: MetricId::new("vaultedness"),
            activity_to_vaultedness_ratio: MetricId::new("activity_to_vaultedness_ratio"),
            coinblocks_created: sum_cum("coinblocks_created"),
            coinblocks_destroyed: sum_cum("coinblocks_destroyed"),
            coinblocks_stored: sum_cum("coinblocks_stored"),
            vaulted_supply: ValuePattern::new(&MetricId::new("vaulted_supply")),
            active_supply: ValuePattern::new(&MetricId::new("active_supply")),
            vaulted_price: ratio("vaulted_price"),
            active_price: ratio("active_price"),
            true_market_mean: ratio("true_market_mean"),
            cointime_price: ratio("cointime_price"),
            investor_cap: MetricId::new("investor_cap"),
            thermo_cap: MetricId::new("thermo_cap"),
            vaulted_cap: MetricId::new("vaulted_cap"),
            active_cap: MetricId::new("active_cap"),
            cointime_cap: MetricId::new("cointime_cap"),
            value_created: sum_cum("cointime_value_created"),
            value_destroyed: sum_cum("cointime_value_destroyed"),
            value_stored: sum_cum("cointime_value_stored"),
            adj_inflation_rate: MetricId::new("cointime_adj_inflation_rate"),
            adj_tx_btc_velocity: MetricId::new("cointime_adj_tx_btc_velocity"),
            adj_tx_usd_velocity: MetricId::new("cointime_adj_tx_usd_velocity"),
        }
    }
}
