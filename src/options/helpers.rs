//! Fan-out helpers: one pattern in, the matching list of series out.
//!
//! Helpers never fail on a missing view; they emit one series per view the
//! pattern carries and skip the rest.

use crate::config::market::ZSCORE_LEVELS;
use crate::config::palette::Color;
use crate::domain::{
    ChartOption, OptionsGroup, OptionsNode, Result, SeriesBlueprint, Unit, baseline, dotted, line,
    price,
};
use crate::models::patterns::{RatioPattern, StatKey, SumCum};
use crate::models::{
    CoinbasePattern, MetricId, StatsPattern, SupplyPattern, ValuePattern, ValueSumPattern,
};
use crate::options::OptionsContext;

/// Same name and color, one line per denomination: sats, then BTC, then USD.
pub fn sats_btc_usd(
    pattern: &ValuePattern,
    name: &str,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    vec![
        line(&pattern.sats, name, Unit::Sats).maybe_color(color),
        line(&pattern.bitcoin, name, Unit::Btc).maybe_color(color),
        line(&pattern.dollars, name, Unit::Usd).maybe_color(color),
    ]
}

/// The headline view keeps the bare title; every other view is suffixed with its label.
fn stat_series(
    key: StatKey,
    metric: &MetricId,
    headline: bool,
    title: &str,
    unit: Unit,
    color: Option<Color>,
) -> SeriesBlueprint {
    let label = if headline {
        title.to_string()
    } else {
        format!("{} {}", title, key.label())
    };
    line(metric, label, unit)
        .maybe_color(key.color().or(color))
        .active(key.default_active())
}

fn stats_with(
    pattern: &StatsPattern,
    title: &str,
    unit: Unit,
    color: Option<Color>,
    keep: impl Fn(StatKey) -> bool,
) -> Vec<SeriesBlueprint> {
    let headline = pattern.headline();
    pattern
        .present()
        .filter(|(key, _)| keep(*key))
        .map(|(key, metric)| {
            stat_series(key, metric, Some(metric) == headline, title, unit, color)
        })
        .collect()
}

/// Every view the pattern carries; the raw value and the sum are drawn, the rest listed.
pub fn from_stats_pattern(
    pattern: &StatsPattern,
    title: &str,
    unit: Unit,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    stats_with(pattern, title, unit, color, |_| true)
}

/// The raw value with its distribution, without totals.
pub fn from_base_stats_pattern(
    pattern: &StatsPattern,
    title: &str,
    unit: Unit,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    stats_with(pattern, title, unit, color, |key| {
        !matches!(key, StatKey::Sum | StatKey::Cumulative)
    })
}

/// Sum and cumulative only.
pub fn from_sum_stats_pattern(
    pattern: &StatsPattern,
    title: &str,
    unit: Unit,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    stats_with(pattern, title, unit, color, |key| {
        matches!(key, StatKey::Sum | StatKey::Cumulative)
    })
}

/// All views but the cumulative total, all drawn at once.
pub fn from_full_stats_pattern(
    pattern: &StatsPattern,
    title: &str,
    unit: Unit,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    stats_with(pattern, title, unit, color, |key| key != StatKey::Cumulative)
        .into_iter()
        .map(|series| series.active(true))
        .collect()
}

pub fn from_count_pattern(
    pattern: &StatsPattern,
    title: &str,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    stats_with(pattern, title, Unit::Count, color, |key| {
        matches!(key, StatKey::Base | StatKey::Sum | StatKey::Cumulative)
    })
}

/// Sum and cumulative in each denomination.
pub fn from_coinbase_pattern(
    pattern: &CoinbasePattern,
    title: &str,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    [
        (&pattern.sats, Unit::Sats),
        (&pattern.bitcoin, Unit::Btc),
        (&pattern.dollars, Unit::Usd),
    ]
    .into_iter()
    .flat_map(|(stats, unit)| from_sum_stats_pattern(stats, title, unit, color))
    .collect()
}

fn sum_cum(
    pattern: &SumCum,
    title: &str,
    unit: Unit,
    color: Option<Color>,
) -> [SeriesBlueprint; 2] {
    [
        line(&pattern.sum, title, unit).maybe_color(color),
        line(&pattern.cumulative, format!("{} Cumulative", title), unit)
            .maybe_color(StatKey::Cumulative.color())
            .hidden(),
    ]
}

pub fn from_value_pattern(
    pattern: &ValueSumPattern,
    title: &str,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    [
        (&pattern.sats, Unit::Sats),
        (&pattern.bitcoin, Unit::Btc),
        (&pattern.dollars, Unit::Usd),
    ]
    .into_iter()
    .flat_map(|(pattern, unit)| sum_cum(pattern, title, unit, color))
    .collect()
}

/// Total supply per denomination, then its half as a dotted reference.
pub fn from_supply_pattern(
    pattern: &SupplyPattern,
    title: &str,
    color: Option<Color>,
) -> Vec<SeriesBlueprint> {
    let halved = format!("{} Halved", title);
    let mut series = sats_btc_usd(&pattern.total, title, color);
    series.extend([
        dotted(&pattern.halved.sats, halved.as_str(), Unit::Sats).maybe_color(color).hidden(),
        dotted(&pattern.halved.bitcoin, halved.as_str(), Unit::Btc).maybe_color(color).hidden(),
        dotted(&pattern.halved.dollars, halved.as_str(), Unit::Usd).maybe_color(color).hidden(),
    ]);
    series
}

/// Price, ratio and z-score charts for a price compared with the market price.
pub fn ratio_nodes(
    ctx: &OptionsContext,
    pattern: &RatioPattern,
    title: &str,
    color: Color,
) -> Result<Vec<OptionsNode>> {
    let price_chart = ChartOption::new("Price", format!("{} Price", title))
        .top([price(&pattern.price, title).color(color)])
        .top(
            pattern
                .bands
                .iter()
                .map(|band| price(&band.price, band.label).color(band.color).hidden()),
        );

    let mut ratio_bottom = vec![
        baseline(&pattern.ratio, "Ratio", Unit::Ratio)
            .base(1.0)
            .colors(ctx.palette.up, ctx.palette.down),
        line(&pattern.ratio_1w_sma, "1 Week SMA", Unit::Ratio).color(Color::Lime),
        line(&pattern.ratio_1m_sma, "1 Month SMA", Unit::Ratio).color(Color::Teal),
    ];
    ratio_bottom.extend(
        pattern
            .bands
            .iter()
            .map(|band| line(&band.ratio, band.label, Unit::Ratio).color(band.color).hidden()),
    );
    ratio_bottom.push(ctx.constant_line(1.0, Unit::Ratio)?);
    let ratio_chart = ChartOption::new("Ratio", format!("{} Price Ratio", title))
        .top([price(&pattern.price, title).color(color)])
        .bottom(ratio_bottom);

    let mut zscore_bottom: Vec<SeriesBlueprint> = pattern
        .zscores
        .iter()
        .enumerate()
        .map(|(index, zscore)| {
            baseline(&zscore.metric, zscore.label, Unit::StdDev)
                .colors(ctx.palette.up, ctx.palette.down)
                .active(index == 0)
        })
        .collect();
    zscore_bottom.extend(ctx.constant_lines(ZSCORE_LEVELS, Unit::StdDev)?);
    let zscore_chart = ChartOption::new("Z-Score", format!("{} Price Ratio Z-Score", title))
        .top([price(&pattern.price, title).color(color)])
        .bottom(zscore_bottom);

    Ok(vec![price_chart.into(), ratio_chart.into(), zscore_chart.into()])
}

/// [`ratio_nodes`] wrapped in a folder.
pub fn ratio_folder(
    ctx: &OptionsContext,
    name: &str,
    pattern: &RatioPattern,
    title: &str,
    color: Color,
) -> Result<OptionsGroup> {
    Ok(OptionsGroup::new(name).with_all(ratio_nodes(ctx, pattern, title, color)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::models::patterns::keys;
    use crate::models::MetricsTree;

    #[test]
    fn sats_btc_usd_is_three_lines_in_order() {
        let pattern = ValuePattern::new(&MetricId::new("sth_supply"));
        let series = sats_btc_usd(&pattern, "Supply", Some(Color::Yellow));
        let units: Vec<_> = series.iter().map(|s| s.unit).collect();
        assert_eq!(units, vec![Unit::Sats, Unit::Btc, Unit::Usd]);
        assert!(series.iter().all(|s| s.title == "Supply"));
        assert!(series.iter().all(|s| s.color == Some(Color::Yellow.into())));
    }

    #[test]
    fn stats_fan_out_skips_absent_views() {
        let mut pattern = StatsPattern::with_keys(&MetricId::new("fee_rate"), keys::DISTRIBUTION);
        pattern.median = None;
        pattern.pct10 = None;
        let series = from_stats_pattern(&pattern, "Fee Rate", Unit::FeeRate, None);
        assert_eq!(series.len(), pattern.present().count());
        assert_eq!(series.len(), keys::DISTRIBUTION.len() - 2);
        assert!(series.iter().all(|s| !s.metric.as_str().ends_with("median")));
    }

    #[test]
    fn sum_stats_on_partial_pattern() {
        let mut pattern = StatsPattern::default();
        pattern.sum = Some(MetricId::new("tx_count_sum"));
        pattern.cumulative = Some(MetricId::new("tx_count_cumulative"));
        pattern.average = Some(MetricId::new("tx_count_avg"));
        let series = from_sum_stats_pattern(&pattern, "Count", Unit::Count, None);
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| s.unit == Unit::Count));
        assert!(series[0].default_active);
        assert!(!series[1].default_active);
    }

    #[test]
    fn default_active_views_lead() {
        let pattern = StatsPattern::with_keys(&MetricId::new("block_size"), keys::ALL);
        let series = from_stats_pattern(&pattern, "Size", Unit::Bytes, Some(Color::Cyan));
        assert!(series[0].default_active && series[1].default_active);
        assert!(series[2..].iter().all(|s| !s.default_active));
        assert_eq!(series[0].color, Some(Color::Cyan.into()));
    }

    #[test]
    fn sum_next_to_base_gets_its_own_label() {
        let pattern = StatsPattern::with_keys(&MetricId::new("block_count"), keys::BASE_SUM_CUM);
        let series = from_count_pattern(&pattern, "Count", Some(Color::Amber));
        let titles: Vec<_> = series.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Count", "Count Sum", "Count Cumulative"]);

        let sum_only = StatsPattern::sum_cum(&MetricId::new("tx_count"));
        let series = from_count_pattern(&sum_only, "Count", None);
        assert_eq!(series[0].title, "Count");
    }

    #[test]
    fn coinbase_and_value_patterns_cover_denominations() {
        let coinbase = CoinbasePattern::new(&MetricId::new("subsidy"), keys::FULL);
        assert_eq!(from_coinbase_pattern(&coinbase, "Subsidy", None).len(), 6);
        let sent = ValueSumPattern::new(&MetricId::new("sent"));
        let series = from_value_pattern(&sent, "Sent", None);
        assert_eq!(series.len(), 6);
        assert_eq!(series[2].metric.as_str(), "sent_btc_sum");
    }

    #[test]
    fn supply_pattern_adds_hidden_halves() {
        let supply = SupplyPattern::new(&MetricId::new("supply"));
        let series = from_supply_pattern(&supply, "Supply", None);
        assert_eq!(series.len(), 6);
        assert!(series[3..].iter().all(|s| !s.default_active));
        assert_eq!(series[4].metric.as_str(), "supply_half_btc");
    }

    #[test]
    fn ratio_nodes_are_three_charts() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let pattern = RatioPattern::new(&MetricId::new("realized_price"));
        let nodes = ratio_nodes(&ctx, &pattern, "Realized", Color::Orange).unwrap();
        let names: Vec<_> = nodes.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["Price", "Ratio", "Z-Score"]);
    }
}
