use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsGroup, Result, Unit, baseline, line};
use crate::options::OptionsContext;

pub(super) fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let market = &ctx.metrics.market;
    let realized = &ctx.metrics.distribution.all.tree.core().realized;

    Ok(OptionsGroup::new("Capitalization")
        .with(
            ChartOption::new("Market Cap", "Market Capitalization").bottom([
                line(&market.cap, "Market Cap", Unit::Usd).color(Color::Default),
                line(&realized.cap, "Realized Cap", Unit::Usd).color(Color::Orange).hidden(),
            ]),
        )
        .with(
            // Market value to realized value
            ChartOption::new("MVRV", "Market Value To Realized Value").bottom([
                baseline(&realized.price.ratio, "MVRV", Unit::Ratio)
                    .base(1.0)
                    .colors(ctx.palette.up, ctx.palette.down),
                ctx.constant_line(1.0, Unit::Ratio)?,
            ]),
        ))
}
