//! Simple and exponential moving averages of the price.

use crate::domain::{ChartOption, OptionsGroup, Result, price};
use crate::models::tree::market::MovingAverage;
use crate::options::OptionsContext;
use crate::options::helpers::ratio_folder;

fn family(
    ctx: &OptionsContext,
    name: &str,
    kind: &str,
    averages: &[MovingAverage],
) -> Result<OptionsGroup> {
    let mut folder = OptionsGroup::new(name).with(
        ChartOption::new("Compare", format!("Price {} Moving Averages", kind)).top(
            averages.iter().map(|average| {
                price(&average.ratio.price, average.period.name).color(average.period.color)
            }),
        ),
    );
    for average in averages {
        let title = format!("{} {} Moving Average", average.period.name, kind);
        let period = average.period;
        folder.push(ratio_folder(ctx, period.name, &average.ratio, &title, period.color)?);
    }
    Ok(folder)
}

pub(super) fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let market = &ctx.metrics.market;
    Ok(OptionsGroup::new("Averages")
        .with(family(ctx, "Simple", "Simple", &market.sma)?)
        .with(family(ctx, "Exponential", "Exponential", &market.ema)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::models::MetricsTree;

    #[test]
    fn compare_then_one_ratio_folder_per_period() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let sma = family(&ctx, "Simple", "Simple", &metrics.market.sma).unwrap();
        assert_eq!(sma.tree.len(), metrics.market.sma.len() + 1);
        let week = sma.tree[1].as_group().unwrap();
        assert_eq!(week.name, "1 Week");
        let names: Vec<_> = week.tree.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["Price", "Ratio", "Z-Score"]);
    }
}
