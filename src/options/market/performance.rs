use crate::domain::{ChartOption, OptionsGroup, Result, Unit, baseline, line};
use crate::options::OptionsContext;

pub(super) fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let returns = &ctx.metrics.market.returns;
    let (up, down) = (ctx.palette.up, ctx.palette.down);
    let zero = ctx.constant_line(0.0, Unit::Percentage)?;

    let mut folder = OptionsGroup::new("Performance")
        .with(
            ChartOption::new("Compare Returns", "Price Returns By Period")
                .bottom(returns.iter().map(|r| {
                    line(&r.returns, r.period.name, Unit::Percentage).color(r.period.color)
                }))
                .bottom([zero.clone()]),
        )
        .with(
            ChartOption::new("Compare CAGR", "Compound Annual Growth Rate By Period")
                .bottom(returns.iter().filter_map(|r| {
                    let cagr = r.cagr.as_ref()?;
                    Some(line(cagr, r.period.name, Unit::Percentage).color(r.period.color))
                }))
                .bottom([zero.clone()]),
        );

    for r in returns {
        let mut series = vec![baseline(&r.returns, "Returns", Unit::Percentage).colors(up, down)];
        if let Some(cagr) = &r.cagr {
            series.push(baseline(cagr, "CAGR", Unit::Percentage).colors(up, down).hidden());
        }
        folder.push(
            ChartOption::new(r.period.name, format!("{} Price Returns", r.period.name))
                .bottom(series)
                .bottom([zero.clone()]),
        );
    }
    Ok(folder)
}
