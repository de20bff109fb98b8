//! Hashrate, difficulty, halvings, miner economics and per-pool metrics.

use crate::config::pools::{POOLS, PoolDef};
use crate::domain::{OptionsError, Result};
use crate::models::MetricId;
use crate::models::patterns::{StatsPattern, ValueSumPattern, keys};

pub struct Hashrate {
    pub rate: MetricId,
    /// Smoothed hashrate, shortest window first
    pub smoothed: Vec<(&'static str, MetricId)>,
    pub difficulty_as_hash: MetricId,
}

pub struct Difficulty {
    pub value: MetricId,
    pub adjustment: MetricId,
    pub epoch: MetricId,
    pub blocks_before_next_adjustment: MetricId,
    pub days_before_next_adjustment: MetricId,
}

pub struct Halving {
    pub epoch: MetricId,
    pub blocks_before_next: MetricId,
    pub days_before_next: MetricId,
}

/// Revenue per unit of hashrate, per day.
pub struct HashPrice {
    pub ths: MetricId,
    pub phs: MetricId,
    pub ths_min: MetricId,
    pub phs_min: MetricId,
    pub rebound: MetricId,
    pub value_ths: MetricId,
    pub value_phs: MetricId,
    pub value_ths_min: MetricId,
    pub value_phs_min: MetricId,
    pub value_rebound: MetricId,
}

pub struct Mining {
    pub hashrate: Hashrate,
    pub difficulty: Difficulty,
    pub halving: Halving,
    pub hash_price: HashPrice,
    pub puell_multiple: MetricId,
}

impl Mining {
    pub fn new() -> Self {
        let rate = MetricId::new("hash_rate");
        Self {
            hashrate: Hashrate {
                smoothed: ["1w_sma", "1m_sma", "2m_sma", "1y_sma"]
                    .into_iter()
                    .map(|window| (window, rate.suffixed(window)))
                    .collect(),
                rate,
                difficulty_as_hash: MetricId::new("difficulty_as_hash"),
            },
            difficulty: Difficulty {
                value: MetricId::new("difficulty"),
                adjustment: MetricId::new("difficulty_adjustment"),
                epoch: MetricId::new("difficultyepoch"),
                blocks_before_next_adjustment: MetricId::new(
                    "blocks_before_next_difficulty_adjustment",
                ),
                days_before_next_adjustment: MetricId::new(
                    "days_before_next_difficulty_adjustment",
                ),
            },
            halving: Halving {
                epoch: MetricId::new("halvingepoch"),
                blocks_before_next: MetricId::new("blocks_before_next_halving"),
                days_before_next: MetricId::new("days_before_next_halving"),
            },
            hash_price: HashPrice {
                ths: MetricId::new("hash_price_ths"),
                phs: MetricId::new("hash_price_phs"),
                ths_min: MetricId::new("hash_price_ths_min"),
                phs_min: MetricId::new("hash_price_phs_min"),
                rebound: MetricId::new("hash_price_rebound"),
                value_ths: MetricId::new("hash_value_ths"),
                value_phs: MetricId::new("hash_value_phs"),
                value_ths_min: MetricId::new("hash_value_ths_min"),
                value_phs_min: MetricId::new("hash_value_phs_min"),
                value_rebound: MetricId::new("hash_value_rebound"),
            },
            puell_multiple: MetricId::new("puell_multiple"),
        }
    }
}

pub struct PoolMetrics {
    pub def: &'static PoolDef,
    /// Position in the pool table, used for rotation colors
    pub index: usize,
    pub blocks_mined: StatsPattern,
    pub dominance: MetricId,
    /// Dominance over trailing windows, shortest first
    pub dominance_windows: Vec<(&'static str, MetricId)>,
    pub rewards: ValueSumPattern,
    pub days_since_block: MetricId,
}

impl PoolMetrics {
    fn new(index: usize, def: &'static PoolDef) -> Self {
        let stem = |name: &str| MetricId::new(format!("{}_{}", def.id, name));
        let dominance = stem("dominance");
        Self {
            def,
            index,
            blocks_mined: StatsPattern::with_keys(&stem("blocks_mined"), keys::BASE_SUM_CUM),
            dominance_windows: ["1w", "1m", "1y"]
                .into_iter()
                .map(|window| (window, dominance.suffixed(window)))
                .collect(),
            dominance,
            rewards: ValueSumPattern::new(&stem("coinbase")),
            days_since_block: stem("days_since_block"),
        }
    }
}

pub struct Pools {
    pub list: Vec<PoolMetrics>,
}

impl Pools {
    pub fn new() -> Self {
        Self {
            list: POOLS
                .iter()
                .enumerate()
                .map(|(index, def)| PoolMetrics::new(index, def))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Result<&PoolMetrics> {
        self.list
            .iter()
            .find(|pool| pool.def.id == id)
            .ok_or_else(|| OptionsError::UnknownPool(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_metrics_are_prefixed_by_slug() {
        let pools = Pools::new();
        let foundry = pools.get("foundryusa").unwrap();
        assert_eq!(foundry.dominance.as_str(), "foundryusa_dominance");
        assert_eq!(foundry.dominance_windows[0].1.as_str(), "foundryusa_dominance_1w");
        assert_eq!(foundry.rewards.bitcoin.sum.as_str(), "foundryusa_coinbase_btc_sum");
    }

    #[test]
    fn unknown_pool_lookup_fails() {
        assert!(matches!(
            Pools::new().get("nopool"),
            Err(OptionsError::UnknownPool(_))
        ));
    }
}
