use crate::domain::{ChartOption, OptionsGroup, Result, Unit, line};
use crate::options::OptionsContext;

pub(super) fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let windows = &ctx.metrics.market.volatility;
    Ok(OptionsGroup::new("Volatility")
        .with(
            ChartOption::new("Volatility", "Price Volatility").bottom(windows.iter().map(|w| {
                line(&w.volatility, w.period.name, Unit::Percentage).color(w.period.color)
            })),
        )
        .with(
            ChartOption::new("Sharpe Ratio", "Sharpe Ratio")
                .bottom(windows.iter().map(|w| {
                    line(&w.sharpe, w.period.name, Unit::Ratio).color(w.period.color)
                }))
                .bottom([ctx.constant_line(0.0, Unit::Ratio)?]),
        )
        .with(
            ChartOption::new("Sortino Ratio", "Sortino Ratio")
                .bottom(windows.iter().map(|w| {
                    line(&w.sortino, w.period.name, Unit::Ratio).color(w.period.color)
                }))
                .bottom([ctx.constant_line(0.0, Unit::Ratio)?]),
        ))
}
