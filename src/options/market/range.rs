use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsGroup, Result, Unit, line, price};
use crate::options::OptionsContext;

/// Choppiness index Fibonacci guides
const CHOPPINESS_LEVELS: &[f64] = &[38.2, 61.8];

pub(super) fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let range = &ctx.metrics.market.range;
    let close = &ctx.metrics.market.price.close;

    Ok(OptionsGroup::new("Range")
        .with(
            ChartOption::new("Min/Max", "Price Minimum And Maximum")
                .top([price(close, "Price").color(Color::Default)])
                .top(range.windows.iter().flat_map(|window| {
                    let name = window.period.name;
                    [
                        price(&window.min, format!("{} Min", name)).color(window.period.color),
                        price(&window.max, format!("{} Max", name)).color(window.period.color),
                    ]
                })),
        )
        .with(
            ChartOption::new("True Range", "Price True Range").bottom([
                line(&range.true_range, "True Range", Unit::Usd).color(Color::Yellow),
                line(&range.true_range_2w_sum, "2 Week Sum", Unit::Usd)
                    .color(Color::Orange)
                    .hidden(),
            ]),
        )
        .with(
            ChartOption::new("Choppiness", "Choppiness Index (2 Weeks)")
                .bottom([line(&range.choppiness, "Choppiness", Unit::Index).color(Color::Red)])
                .bottom(ctx.constant_lines(CHOPPINESS_LEVELS, Unit::Index)?),
        ))
}
