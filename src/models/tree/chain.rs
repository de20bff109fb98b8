//! On-chain bundles: blocks, transactions, inputs/outputs, rewards and supply.

use crate::config::cohorts::{OUTPUT_TYPES, OutputTypeDef};
use crate::models::MetricId;
use crate::models::patterns::{
    CoinbasePattern, StatsPattern, ValuePattern, ValueSumPattern, keys,
};

pub struct Blocks {
    pub height: MetricId,
    pub count: StatsPattern,
    /// Expected blocks per day (144)
    pub count_target: MetricId,
    pub interval: StatsPattern,
    pub size: StatsPattern,
    pub vbytes: StatsPattern,
    pub weight: StatsPattern,
    pub fullness: StatsPattern,
}

impl Blocks {
    fn new() -> Self {
        Self {
            height: MetricId::new("height"),
            count: StatsPattern::with_keys(&"block_count".into(), keys::BASE_SUM_CUM),
            count_target: MetricId::new("block_count_target"),
            interval: StatsPattern::distribution(&"block_interval".into()),
            size: StatsPattern::full(&"block_size".into()),
            vbytes: StatsPattern::full(&"block_vbytes".into()),
            weight: StatsPattern::full(&"block_weight".into()),
            fullness: StatsPattern::distribution(&"block_fullness".into()),
        }
    }
}

pub struct TxVersion {
    pub name: &'static str,
    pub count: StatsPattern,
}

pub struct Transactions {
    pub count: StatsPattern,
    pub per_sec: MetricId,
    pub vsize: StatsPattern,
    pub weight: StatsPattern,
    pub fee: CoinbasePattern,
    pub fee_rate: StatsPattern,
    pub versions: Vec<TxVersion>,
    pub volume: ValuePattern,
    pub annualized_volume: ValuePattern,
    /// Annualized volume over circulating supply, in coins and in dollars
    pub velocity_btc: MetricId,
    pub velocity_usd: MetricId,
}

impl Transactions {
    fn new() -> Self {
        Self {
            count: StatsPattern::full(&"tx_count".into()),
            per_sec: MetricId::new("tx_per_sec"),
            vsize: StatsPattern::distribution(&"tx_vsize".into()),
            weight: StatsPattern::distribution(&"tx_weight".into()),
            fee: CoinbasePattern::new(&"fee".into(), keys::FULL),
            fee_rate: StatsPattern::distribution(&"fee_rate".into()),
            versions: [("Version 1", "tx_v1"), ("Version 2", "tx_v2"), ("Version 3", "tx_v3")]
                .into_iter()
                .map(|(name, stem)| TxVersion {
                    name,
                    count: StatsPattern::sum_cum(&stem.into()),
                })
                .collect(),
            volume: ValuePattern::new(&"tx_volume".into()),
            annualized_volume: ValuePattern::new(&"annualized_volume".into()),
            velocity_btc: MetricId::new("tx_btc_velocity"),
            velocity_usd: MetricId::new("tx_usd_velocity"),
        }
    }
}

pub struct Inputs {
    pub count: StatsPattern,
    pub per_sec: MetricId,
}

pub struct OutputTypeCount {
    pub def: &'static OutputTypeDef,
    pub count: StatsPattern,
}

pub struct Outputs {
    pub count: StatsPattern,
    pub per_sec: MetricId,
    /// Size of the UTXO set
    pub utxo_count: MetricId,
    pub by_type: Vec<OutputTypeCount>,
}

impl Outputs {
    fn new() -> Self {
        Self {
            count: StatsPattern::full(&"output_count".into()),
            per_sec: MetricId::new("outputs_per_sec"),
            utxo_count: MetricId::new("exact_utxo_count"),
            by_type: OUTPUT_TYPES
                .iter()
                .map(|def| OutputTypeCount {
                    def,
                    count: StatsPattern::sum_cum(&MetricId::new(format!("{}_count", def.id))),
                })
                .collect(),
        }
    }
}

/// Coinbase split into subsidy and fees, plus what miners failed to claim.
pub struct Rewards {
    pub coinbase: CoinbasePattern,
    pub subsidy: CoinbasePattern,
    pub fee: CoinbasePattern,
    pub unclaimed: ValueSumPattern,
    pub fee_dominance: MetricId,
    pub subsidy_dominance: MetricId,
    pub subsidy_usd_1y_sma: MetricId,
}

impl Rewards {
    fn new(fee: &CoinbasePattern) -> Self {
        Self {
            coinbase: CoinbasePattern::new(&"coinbase".into(), keys::FULL),
            subsidy: CoinbasePattern::new(&"subsidy".into(), keys::FULL),
            fee: fee.clone(),
            unclaimed: ValueSumPattern::new(&"unclaimed_rewards".into()),
            fee_dominance: MetricId::new("fee_dominance"),
            subsidy_dominance: MetricId::new("subsidy_dominance"),
            subsidy_usd_1y_sma: MetricId::new("subsidy_usd_1y_sma"),
        }
    }
}

pub struct Supply {
    pub circulating: ValuePattern,
    pub inflation: MetricId,
    pub unspendable: ValuePattern,
    pub opreturn: ValuePattern,
    pub opreturn_count: StatsPattern,
}

impl Supply {
    fn new() -> Self {
        Self {
            circulating: ValuePattern::new(&"supply".into()),
            inflation: MetricId::new("inflation_rate"),
            unspendable: ValuePattern::new(&"unspendable_supply".into()),
            opreturn: ValuePattern::new(&"opreturn_supply".into()),
            opreturn_count: StatsPattern::with_keys(&"opreturn_count".into(), keys::BASE_SUM_CUM),
        }
    }
}

pub struct Chain {
    pub blocks: Blocks,
    pub transactions: Transactions,
    pub inputs: Inputs,
    pub outputs: Outputs,
    pub rewards: Rewards,
    pub supply: Supply,
}

impl Chain {
    pub fn new() -> Self {
        let transactions = Transactions::new();
        let rewards = Rewards::new(&transactions.fee);
        Self {
            blocks: Blocks::new(),
            transactions,
            inputs: Inputs {
                count: StatsPattern::full(&"input_count".into()),
                per_sec: MetricId::new("inputs_per_sec"),
            },
            outputs: Outputs::new(),
            rewards,
            supply: Supply::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_type_counts_follow_the_type_table() {
        let chain = Chain::new();
        assert_eq!(chain.outputs.by_type.len(), OUTPUT_TYPES.len());
        let p2tr = chain.outputs.by_type.iter().find(|o| o.def.id == "p2tr").unwrap();
        assert_eq!(p2tr.count.sum.as_ref().map(|m| m.as_str()), Some("p2tr_count_sum"));
        assert!(p2tr.count.base.is_none());
    }

    #[test]
    fn fee_is_shared_between_transactions_and_rewards() {
        let chain = Chain::new();
        assert_eq!(chain.transactions.fee, chain.rewards.fee);
        assert_eq!(
            chain.rewards.fee.bitcoin.sum.as_ref().map(|m| m.as_str()),
            Some("fee_btc_sum")
        );
    }
}
