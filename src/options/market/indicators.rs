//! Oscillators and valuation multiples computed from the price.

use crate::config::market::RSI_BOUNDS;
use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsGroup, Result, Unit, baseline, histogram, line, price};
use crate::options::OptionsContext;

/// Stochastic RSI oversold and overbought levels
const STOCH_BOUNDS: (f64, f64) = (20.0, 80.0);

pub(super) fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let indicators = &ctx.metrics.market.indicators;
    let close = &ctx.metrics.market.price.close;
    let (up, down) = (ctx.palette.up, ctx.palette.down);

    let bounds = |(low, high): (f64, f64)| ctx.constant_lines(&[low, 50.0, high], Unit::Index);

    Ok(OptionsGroup::new("Indicators")
        .with(
            ChartOption::new("RSI", "Relative Strength Index (14 Days)")
                .bottom([
                    line(&indicators.rsi, "RSI", Unit::Index).color(Color::Indigo),
                    line(&indicators.rsi_gains, "Average Gain", Unit::Usd)
                        .color(Color::Green)
                        .hidden(),
                    line(&indicators.rsi_losses, "Average Loss", Unit::Usd)
                        .color(Color::Red)
                        .hidden(),
                ])
                .bottom(bounds(RSI_BOUNDS)?),
        )
        .with(
            ChartOption::new("Stoch RSI", "Stochastic Relative Strength Index")
                .bottom([
                    line(&indicators.stoch_rsi, "Stoch RSI", Unit::Index)
                        .color(Color::Gray)
                        .hidden(),
                    line(&indicators.stoch_rsi_k, "K", Unit::Index).color(Color::Blue),
                    line(&indicators.stoch_rsi_d, "D", Unit::Index).color(Color::Orange),
                ])
                .bottom(bounds(STOCH_BOUNDS)?),
        )
        .with(
            ChartOption::new("MACD", "Moving Average Convergence Divergence").bottom([
                histogram(&indicators.macd_histogram, "Histogram", Unit::Usd).colors(up, down),
                line(&indicators.macd_line, "MACD", Unit::Usd).color(Color::Blue),
                line(&indicators.macd_signal, "Signal", Unit::Usd).color(Color::Orange),
            ]),
        )
        .with(
            ChartOption::new("Pi Cycle", "Pi Cycle Top Indicator")
                .top([
                    price(&indicators.pi_cycle_short, "111d SMA").color(Color::Green),
                    price(&indicators.pi_cycle_long_x2, "350d SMA x2").color(Color::Red),
                ])
                .bottom([
                    baseline(&indicators.pi_cycle, "Pi Cycle", Unit::Ratio)
                        .base(1.0)
                        .colors(up, down),
                    ctx.constant_line(1.0, Unit::Ratio)?,
                ]),
        )
        .with(
            ChartOption::new("Mayer Multiple", "Price Over Its 200 Day SMA")
                .top([price(close, "Price").color(Color::Default).hidden()])
                .bottom([
                    baseline(&indicators.mayer_multiple, "Mayer Multiple", Unit::Ratio)
                        .base(1.0)
                        .colors(up, down),
                    ctx.constant_line(1.0, Unit::Ratio)?,
                ]),
        )
        .with(
            ChartOption::new("NVT", "Network Value To Transactions")
                .bottom([line(&indicators.nvt, "NVT", Unit::Ratio).color(Color::Orange)]),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::models::MetricsTree;

    #[test]
    fn rsi_carries_its_bounds() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let indicators = build(&ctx).unwrap();
        let rsi = indicators.tree[0].as_chart().unwrap();
        let guides: Vec<_> = rsi
            .bottom
            .iter()
            .filter(|s| s.metric.as_str().starts_with("constant_"))
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(guides, vec!["30", "50", "70"]);
    }
}
