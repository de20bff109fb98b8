use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsGroup, Result, Unit, line, price};
use crate::options::OptionsContext;

pub(super) fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let ath = &ctx.metrics.market.ath;
    Ok(OptionsGroup::new("All Time High")
        .with(
            ChartOption::new("Drawdown", "All Time High And Drawdown")
                .top([price(&ath.price, "ATH").color(Color::Emerald)])
                .bottom([
                    line(&ath.drawdown, "Drawdown", Unit::Percentage).color(Color::Red),
                    ctx.constant_line(0.0, Unit::Percentage)?,
                ]),
        )
        .with(
            ChartOption::new("Time", "Time Since And Between All Time Highs").bottom([
                line(&ath.days_since, "Days Since", Unit::Days).color(Color::Orange),
                line(&ath.max_days_between, "Max Days Between", Unit::Days).color(Color::Red),
                line(&ath.max_years_between, "Max Years Between", Unit::Years)
                    .color(Color::Red)
                    .hidden(),
            ]),
        ))
}
