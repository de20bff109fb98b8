//! The Chain section: blocks, transactions, inputs, outputs, rewards and supply.

use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsGroup, Result, Unit, dotted, line};
use crate::models::tree::chain::{Blocks, Inputs, Outputs, Rewards, Supply, Transactions};
use crate::options::OptionsContext;
use crate::options::helpers::{
    from_base_stats_pattern, from_coinbase_pattern, from_count_pattern, from_full_stats_pattern,
    from_stats_pattern, from_sum_stats_pattern, from_value_pattern, sats_btc_usd,
};

/// Seconds between blocks the difficulty targets
const TARGET_INTERVAL: f64 = 600.0;
const TARGET_BLOCKS_PER_DAY: f64 = 144.0;

fn blocks(ctx: &OptionsContext, blocks: &Blocks) -> Result<OptionsGroup> {
    Ok(OptionsGroup::new("Blocks")
        .with(
            ChartOption::new("Height", "Block Height")
                .bottom([line(&blocks.height, "Height", Unit::Blocks).color(Color::Orange)]),
        )
        .with(
            ChartOption::new("Count", "Block Count")
                .bottom(from_count_pattern(&blocks.count, "Count", Some(Color::Orange)))
                .bottom([
                    dotted(&blocks.count_target, "Target", Unit::Count).color(Color::Gray),
                    ctx.constant_line(TARGET_BLOCKS_PER_DAY, Unit::Count)?.hidden(),
                ]),
        )
        .with(
            ChartOption::new("Interval", "Block Interval")
                .bottom(from_base_stats_pattern(
                    &blocks.interval,
                    "Interval",
                    Unit::Secs,
                    Some(Color::Orange),
                ))
                .bottom([ctx.constant_line(TARGET_INTERVAL, Unit::Secs)?]),
        )
        .with(
            ChartOption::new("Size", "Block Size")
                .bottom(from_stats_pattern(&blocks.size, "Size", Unit::Bytes, Some(Color::Cyan))),
        )
        .with(ChartOption::new("Virtual Size", "Block Virtual Size").bottom(
            from_stats_pattern(&blocks.vbytes, "Virtual Size", Unit::VBytes, Some(Color::Sky)),
        ))
        .with(ChartOption::new("Weight", "Block Weight").bottom(from_stats_pattern(
            &blocks.weight,
            "Weight",
            Unit::WeightUnits,
            Some(Color::Blue),
        )))
        .with(
            ChartOption::new("Fullness", "Block Fullness")
                .bottom(from_base_stats_pattern(
                    &blocks.fullness,
                    "Fullness",
                    Unit::Percentage,
                    Some(Color::Emerald),
                ))
                .bottom([ctx.constant_line(100.0, Unit::Percentage)?]),
        ))
}

fn transactions(transactions: &Transactions) -> OptionsGroup {
    OptionsGroup::new("Transactions")
        .with(ChartOption::new("Count", "Transaction Count").bottom(from_stats_pattern(
            &transactions.count,
            "Count",
            Unit::Count,
            Some(Color::Orange),
        )))
        .with(
            ChartOption::new("Per Second", "Transactions Per Second").bottom([
                line(&transactions.per_sec, "Transactions", Unit::PerSec).color(Color::Orange),
            ]),
        )
        .with(
            ChartOption::new("Volume", "Transaction Volume")
                .bottom(sats_btc_usd(&transactions.volume, "Volume", Some(Color::Red)))
                .bottom(
                    sats_btc_usd(&transactions.annualized_volume, "Annualized", Some(Color::Amber))
                        .into_iter()
                        .map(|series| series.hidden()),
                ),
        )
        .with(
            ChartOption::new("Virtual Size", "Transaction Virtual Size").bottom(
                from_base_stats_pattern(
                    &transactions.vsize,
                    "Virtual Size",
                    Unit::VBytes,
                    Some(Color::Sky),
                ),
            ),
        )
        .with(
            ChartOption::new("Weight", "Transaction Weight").bottom(from_base_stats_pattern(
                &transactions.weight,
                "Weight",
                Unit::WeightUnits,
                Some(Color::Blue),
            )),
        )
        .with(
            ChartOption::new("Fee Rate", "Transaction Fee Rate").bottom(from_base_stats_pattern(
                &transactions.fee_rate,
                "Fee Rate",
                Unit::FeeRate,
                Some(Color::Orange),
            )),
        )
        .with(
            ChartOption::new("Versions", "Transaction Versions").bottom(
                transactions
                    .versions
                    .iter()
                    .zip([Color::Orange, Color::Cyan, Color::Lime])
                    .flat_map(|(version, color)| {
                        from_sum_stats_pattern(
                            &version.count,
                            version.name,
                            Unit::Count,
                            Some(color),
                        )
                    }),
            ),
        )
}

fn inputs(inputs: &Inputs) -> OptionsGroup {
    OptionsGroup::new("Inputs")
        .with(
            ChartOption::new("Count", "Input Count")
                .bottom(from_stats_pattern(&inputs.count, "Count", Unit::Count, Some(Color::Red))),
        )
        .with(
            ChartOption::new("Per Second", "Inputs Per Second")
                .bottom([line(&inputs.per_sec, "Inputs", Unit::PerSec).color(Color::Red)]),
        )
}

fn outputs(outputs: &Outputs) -> OptionsGroup {
    let mut by_type = OptionsGroup::new("By Type").with(
        ChartOption::new("Compare", "Outputs Per Type").bottom(outputs.by_type.iter().filter_map(
            |output| {
                output
                    .count
                    .sum
                    .as_ref()
                    .map(|sum| line(sum, output.def.name, Unit::Count).color(output.def.color))
            },
        )),
    );
    for output in &outputs.by_type {
        by_type.push(
            ChartOption::new(output.def.name, format!("{} Output Count", output.def.title))
                .bottom(from_count_pattern(&output.count, "Count", Some(output.def.color))),
        );
    }

    OptionsGroup::new("Outputs")
        .with(ChartOption::new("Count", "Output Count").bottom(from_stats_pattern(
            &outputs.count,
            "Count",
            Unit::Count,
            Some(Color::Green),
        )))
        .with(
            ChartOption::new("Per Second", "Outputs Per Second")
                .bottom([line(&outputs.per_sec, "Outputs", Unit::PerSec).color(Color::Green)]),
        )
        .with(
            ChartOption::new("UTXO Count", "Unspent Transaction Output Count")
                .bottom([line(&outputs.utxo_count, "UTXOs", Unit::Count).color(Color::Orange)]),
        )
        .with(by_type)
}

fn rewards(rewards: &Rewards) -> OptionsGroup {
    OptionsGroup::new("Rewards")
        .with(
            ChartOption::new("Coinbase", "Coinbase Rewards")
                .bottom(from_coinbase_pattern(&rewards.coinbase, "Coinbase", Some(Color::Orange))),
        )
        .with(
            ChartOption::new("Subsidy", "Block Subsidy")
                .bottom(from_coinbase_pattern(&rewards.subsidy, "Subsidy", Some(Color::Lime))),
        )
        .with(
            ChartOption::new("Fees", "Transaction Fees")
                .bottom(from_coinbase_pattern(&rewards.fee, "Fees", Some(Color::Cyan))),
        )
        .with(
            ChartOption::new("Fee Distribution", "Transaction Fees Distribution Per Block").bottom(
                from_full_stats_pattern(&rewards.fee.sats, "Fees", Unit::Sats, Some(Color::Cyan)),
            ),
        )
        .with(
            ChartOption::new("Unclaimed", "Unclaimed Rewards")
                .bottom(from_value_pattern(&rewards.unclaimed, "Unclaimed", Some(Color::Red))),
        )
}

fn supply(ctx: &OptionsContext, supply: &Supply) -> Result<OptionsGroup> {
    Ok(OptionsGroup::new("Supply")
        .with(
            ChartOption::new("Circulating", "Circulating Supply")
                .bottom(sats_btc_usd(&supply.circulating, "Supply", Some(Color::Orange))),
        )
        .with(
            ChartOption::new("Inflation", "Inflation Rate").bottom([
                line(&supply.inflation, "Inflation", Unit::Percentage).color(Color::Red),
                ctx.constant_line(0.0, Unit::Percentage)?,
            ]),
        )
        .with(
            ChartOption::new("Unspendable", "Unspendable Supply")
                .bottom(sats_btc_usd(&supply.unspendable, "Unspendable", Some(Color::Gray))),
        )
        .with(
            OptionsGroup::new("OP_RETURN")
                .with(
                    ChartOption::new("Supply", "OP_RETURN Supply")
                        .bottom(sats_btc_usd(&supply.opreturn, "OP_RETURN", Some(Color::Purple))),
                )
                .with(ChartOption::new("Count", "OP_RETURN Output Count").bottom(
                    from_count_pattern(&supply.opreturn_count, "Count", Some(Color::Purple)),
                )),
        ))
}

pub fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let chain = &ctx.metrics.chain;
    Ok(OptionsGroup::new("Chain")
        .with(blocks(ctx, &chain.blocks)?)
        .with(transactions(&chain.transactions))
        .with(inputs(&chain.inputs))
        .with(outputs(&chain.outputs))
        .with(rewards(&chain.rewards))
        .with(supply(ctx, &chain.supply)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::models::MetricsTree;

    #[test]
    fn chain_section_layout() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let chain = build(&ctx).unwrap();
        let names: Vec<_> = chain.tree.iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec!["Blocks", "Transactions", "Inputs", "Outputs", "Rewards", "Supply"]
        );
    }

    #[test]
    fn interval_has_target_guide() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let blocks = blocks(&ctx, &metrics.chain.blocks).unwrap();
        let interval = blocks
            .tree
            .iter()
            .find_map(|n| n.as_chart().filter(|c| c.name == "Interval"))
            .unwrap();
        assert!(interval.series().any(|s| s.metric.as_str() == "constant_600"));
        // the distribution has no totals
        assert!(interval.series().all(|s| !s.metric.as_str().ends_with("_sum")));
    }

    #[test]
    fn per_type_output_charts() {
        let metrics = MetricsTree::new();
        let outputs = outputs(&metrics.chain.outputs);
        let by_type = outputs.tree.last().and_then(|n| n.as_group()).unwrap();
        assert_eq!(by_type.tree.len(), metrics.chain.outputs.by_type.len() + 1);
    }
}
