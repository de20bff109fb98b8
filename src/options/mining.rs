//! The Mining section: hashrate, difficulty, halvings, miner revenue and pools.

use crate::config::palette::Color;
use crate::config::pools::{ANTPOOL_AND_FRIENDS, MAJOR_POOLS};
use crate::domain::{ChartOption, OptionsGroup, Result, Unit, line};
use crate::models::MetricId;
use crate::models::tree::chain::Rewards;
use crate::models::tree::mining::{Difficulty, Halving, HashPrice, Hashrate, PoolMetrics};
use crate::options::OptionsContext;
use crate::options::helpers::{from_count_pattern, from_sum_stats_pattern, from_value_pattern};

const SMOOTHING_COLORS: [Color; 4] = [Color::Lime, Color::Cyan, Color::Blue, Color::Violet];

/// Puell Multiple guide levels
const PUELL_LEVELS: &[f64] = &[0.0, 1.0, 4.0];

fn hashrate(hashrate: &Hashrate) -> ChartOption {
    ChartOption::new("Hashrate", "Network Hashrate")
        .bottom([line(&hashrate.rate, "Hashrate", Unit::HashRate).color(Color::Orange)])
        .bottom(
            hashrate
                .smoothed
                .iter()
                .zip(SMOOTHING_COLORS)
                .map(|((window, metric), color)| {
                    line(metric, window.replace('_', " ").to_uppercase(), Unit::HashRate)
                        .color(color)
                        .active(*window == "1m_sma")
                }),
        )
        .bottom([
            line(&hashrate.difficulty_as_hash, "Difficulty", Unit::HashRate)
                .color(Color::Gray)
                .hidden(),
        ])
}

fn dominance_chart(
    ctx: &OptionsContext,
    name: &str,
    title: &str,
    ids: &[&str],
) -> Result<ChartOption> {
    let pools = ids
        .iter()
        .map(|id| ctx.metrics.pools.get(id))
        .collect::<Result<Vec<_>>>()?;
    Ok(ChartOption::new(name, title).bottom(pools.into_iter().map(|pool| {
        let monthly = pool
            .dominance_windows
            .iter()
            .find(|(window, _)| *window == "1m")
            .map_or(&pool.dominance, |(_, metric)| metric);
        line(monthly, pool.def.name, Unit::Percentage).color(ctx.color(pool.def.hue(pool.index)))
    })))
}

fn pool_folder(ctx: &OptionsContext, pool: &PoolMetrics) -> Result<OptionsGroup> {
    let color = ctx.color(pool.def.hue(pool.index));
    let name = pool.def.name;
    Ok(OptionsGroup::new(name)
        .with(
            ChartOption::new("Dominance", format!("{} Dominance", name))
                .bottom([line(&pool.dominance, "Dominance", Unit::Percentage).color(color)])
                .bottom(pool.dominance_windows.iter().map(|(window, metric)| {
                    line(metric, window.to_uppercase(), Unit::Percentage)
                        .color(ctx.palette.rotating(pool.index + 1))
                        .hidden()
                })),
        )
        .with(
            ChartOption::new("Blocks Mined", format!("{} Blocks Mined", name))
                .bottom(from_count_pattern(&pool.blocks_mined, "Blocks", Some(color))),
        )
        .with(
            ChartOption::new("Rewards", format!("{} Rewards", name))
                .bottom(from_value_pattern(&pool.rewards, "Rewards", Some(color))),
        )
        .with(
            ChartOption::new("Days Since Block", format!("{} Days Since Last Block", name))
                .bottom([line(&pool.days_since_block, "Days", Unit::Days).color(color)]),
        ))
}

fn pools(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let mut folder = OptionsGroup::new("Pools")
        .with(dominance_chart(ctx, "Major Pools", "Major Pools 1 Month Dominance", MAJOR_POOLS)?)
        .with(dominance_chart(
            ctx,
            "AntPool & Friends",
            "AntPool & Friends 1 Month Dominance",
            ANTPOOL_AND_FRIENDS,
        )?);
    if ctx.settings.include_pool_folders {
        let mut all = OptionsGroup::new("All Pools");
        for pool in &ctx.metrics.pools.list {
            all.push(pool_folder(ctx, pool)?);
        }
        folder.push(all);
    }
    Ok(folder)
}

fn difficulty(ctx: &OptionsContext, difficulty: &Difficulty) -> Result<OptionsGroup> {
    Ok(OptionsGroup::new("Difficulty")
        .with(ChartOption::new("Difficulty", "Mining Difficulty").bottom([
            line(&difficulty.value, "Difficulty", Unit::Difficulty).color(Color::Orange),
        ]))
        .with(
            ChartOption::new("Adjustment", "Difficulty Adjustment").bottom([
                line(&difficulty.adjustment, "Adjustment", Unit::Percentage).color(Color::Orange),
                ctx.constant_line(0.0, Unit::Percentage)?,
            ]),
        )
        .with(
            ChartOption::new("Epoch", "Difficulty Epoch")
                .bottom([line(&difficulty.epoch, "Epoch", Unit::Epoch).color(Color::Orange)]),
        )
        .with(
            ChartOption::new("Next Adjustment", "Countdown To Next Difficulty Adjustment").bottom([
                line(&difficulty.blocks_before_next_adjustment, "Blocks", Unit::Blocks)
                    .color(Color::Indigo),
                line(&difficulty.days_before_next_adjustment, "Days", Unit::Days)
                    .color(Color::Purple),
            ]),
        ))
}

fn halving(halving: &Halving) -> OptionsGroup {
    OptionsGroup::new("Halving")
        .with(
            ChartOption::new("Epoch", "Halving Epoch")
                .bottom([line(&halving.epoch, "Epoch", Unit::Epoch).color(Color::Orange)]),
        )
        .with(
            ChartOption::new("Next Halving", "Countdown To Next Halving").bottom([
                line(&halving.blocks_before_next, "Blocks", Unit::Blocks).color(Color::Indigo),
                line(&halving.days_before_next, "Days", Unit::Days).color(Color::Purple),
            ]),
        )
}

fn hash_price(hash_price: &HashPrice) -> OptionsGroup {
    let min = |metric: &MetricId, name: &str, unit: Unit| {
        line(metric, name, unit).color(Color::Red).hidden()
    };
    OptionsGroup::new("Hash Price")
        .with(
            ChartOption::new("Price", "Hash Price").bottom([
                line(&hash_price.ths, "TH/s", Unit::UsdPerThsPerDay).color(Color::Emerald),
                min(&hash_price.ths_min, "TH/s Min", Unit::UsdPerThsPerDay),
                line(&hash_price.phs, "PH/s", Unit::UsdPerPhsPerDay).color(Color::Emerald),
                min(&hash_price.phs_min, "PH/s Min", Unit::UsdPerPhsPerDay),
            ]),
        )
        .with(
            ChartOption::new("Value", "Hash Value").bottom([
                line(&hash_price.value_ths, "TH/s", Unit::SatsPerThsPerDay).color(Color::Orange),
                min(&hash_price.value_ths_min, "TH/s Min", Unit::SatsPerThsPerDay),
                line(&hash_price.value_phs, "PH/s", Unit::SatsPerPhsPerDay).color(Color::Orange),
                min(&hash_price.value_phs_min, "PH/s Min", Unit::SatsPerPhsPerDay),
            ]),
        )
        .with(
            ChartOption::new("Rebound", "Hash Price And Value Rebound").bottom([
                line(&hash_price.rebound, "Price", Unit::Percentage).color(Color::Emerald),
                line(&hash_price.value_rebound, "Value", Unit::Percentage).color(Color::Orange),
            ]),
        )
}

fn revenue(rewards: &Rewards) -> OptionsGroup {
    OptionsGroup::new("Revenue")
        .with(
            ChartOption::new("Dominance", "Fee And Subsidy Share Of Revenue").bottom([
                line(&rewards.subsidy_dominance, "Subsidy", Unit::Percentage).color(Color::Lime),
                line(&rewards.fee_dominance, "Fees", Unit::Percentage).color(Color::Cyan),
            ]),
        )
        .with(
            ChartOption::new("Daily", "Daily Miner Revenue")
                .bottom(from_sum_stats_pattern(
                    &rewards.coinbase.dollars,
                    "Coinbase",
                    Unit::Usd,
                    Some(Color::Orange),
                ))
                .bottom([
                    line(&rewards.subsidy_usd_1y_sma, "Subsidy 1Y SMA", Unit::Usd)
                        .color(Color::Lime),
                ]),
        )
}

pub fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let mining = &ctx.metrics.mining;

    Ok(OptionsGroup::new("Mining")
        .with(hashrate(&mining.hashrate))
        .with(difficulty(ctx, &mining.difficulty)?)
        .with(halving(&mining.halving))
        .with(revenue(&ctx.metrics.chain.rewards))
        .with(hash_price(&mining.hash_price))
        .with(
            ChartOption::new("Puell Multiple", "Puell Multiple")
                .bottom([line(&mining.puell_multiple, "Puell", Unit::Ratio).color(Color::Green)])
                .bottom(ctx.constant_lines(PUELL_LEVELS, Unit::Ratio)?),
        )
        .with(pools(ctx)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::OptionsSettings;
    use crate::config::{DEFAULT_SETTINGS, PALETTE, Palette};
    use crate::models::MetricsTree;

    #[test]
    fn pool_compares_use_config_groupings() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let major = dominance_chart(&ctx, "Major", "Major", MAJOR_POOLS).unwrap();
        assert_eq!(major.bottom.len(), MAJOR_POOLS.len());
        assert_eq!(major.bottom[0].metric.as_str(), "foundryusa_dominance_1m");
    }

    #[test]
    fn unknown_pool_in_grouping_fails() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        assert!(dominance_chart(&ctx, "x", "x", &["antpool", "nopool"]).is_err());
    }

    #[test]
    fn pool_folders_follow_settings() {
        let metrics = MetricsTree::new();
        let settings = OptionsSettings {
            include_pool_folders: false,
            ..DEFAULT_SETTINGS
        };
        let ctx = OptionsContext::new(&metrics, &PALETTE, &settings);
        let folder = pools(&ctx).unwrap();
        assert_eq!(folder.tree.len(), 2);
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let folder = pools(&ctx).unwrap();
        let all = folder.tree[2].as_group().unwrap();
        assert_eq!(all.tree.len(), metrics.pools.list.len());
    }

    #[test]
    fn uncolored_pools_take_the_context_rotation() {
        let metrics = MetricsTree::new();
        let gray = Palette {
            rotation: &[Color::Gray],
            ..PALETTE
        };
        let ctx = OptionsContext::new(&metrics, &gray, &DEFAULT_SETTINGS);
        let chart = dominance_chart(&ctx, "x", "x", &["foundryusa", "sbicrypto"]).unwrap();
        assert_eq!(chart.bottom[0].color, Some(Color::Orange.into()));
        assert_eq!(chart.bottom[1].color, Some(Color::Gray.into()));

        let sbi = metrics.pools.get("sbicrypto").unwrap();
        let folder = pool_folder(&ctx, sbi).unwrap();
        let dominance = folder.tree[0].as_chart().unwrap();
        assert!(dominance.bottom.iter().all(|s| s.color == Some(Color::Gray.into())));
    }
}
