//! The Investing section: DCA stacks, returns and the lump sum alternative.

use crate::config::palette::Color;
use crate::domain::{ChartOption, LineStyle, OptionsGroup, Result, Unit, baseline, line, price};
use crate::models::tree::investing::{DcaClass, DcaPeriod};
use crate::options::OptionsContext;
use crate::options::helpers::sats_btc_usd;

fn period_folder(ctx: &OptionsContext, dca: &DcaPeriod) -> Result<OptionsGroup> {
    let name = dca.period.name;
    let color = dca.period.color;
    let (up, down) = (ctx.palette.up, ctx.palette.down);
    let close = &ctx.metrics.market.price.close;

    let mut returns = vec![
        baseline(&dca.returns, "DCA", Unit::Percentage).colors(up, down),
        baseline(&dca.lump_sum_returns, "Lump Sum", Unit::Percentage)
            .colors(up, down)
            .hidden(),
    ];
    if let Some(cagr) = &dca.cagr {
        returns.push(baseline(cagr, "CAGR", Unit::Percentage).colors(up, down).hidden());
    }

    Ok(OptionsGroup::new(name)
        .with(
            ChartOption::new("Cost Basis", format!("{} DCA Average Price", name))
                .top([
                    price(close, "Price").color(Color::Default).hidden(),
                    price(&dca.avg_price, "Average Price").color(color),
                ]),
        )
        .with(
            ChartOption::new("Stack", format!("{} DCA Stack Against A Lump Sum", name))
                .bottom(sats_btc_usd(&dca.stack, "DCA", Some(color)))
                .bottom(
                    sats_btc_usd(&dca.lump_sum_stack, "Lump Sum", Some(Color::Gray))
                        .into_iter()
                        .map(|series| series.hidden()),
                ),
        )
        .with(
            ChartOption::new("Returns", format!("{} DCA Returns", name))
                .bottom(returns)
                .bottom([ctx.constant_line(0.0, Unit::Percentage)?]),
        ))
}

fn class_folder(ctx: &OptionsContext, class: &DcaClass) -> OptionsGroup {
    let name = class.year.to_string();
    let color = ctx.color(class.color);
    OptionsGroup::new(name.as_str())
        .with(
            ChartOption::new("Cost Basis", format!("DCA Class {} Average Price", name))
                .top([price(&class.avg_price, "Average Price").color(color)]),
        )
        .with(
            ChartOption::new("Stack", format!("DCA Class {} Stack", name))
                .bottom(sats_btc_usd(&class.stack, "Stack", Some(color))),
        )
        .with(
            ChartOption::new("Returns", format!("DCA Class {} Returns", name)).bottom([
                baseline(&class.returns, "Returns", Unit::Percentage)
                    .colors(ctx.palette.up, ctx.palette.down),
            ]),
        )
}

fn by_period(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let periods = &ctx.metrics.dca.periods;
    let mut folder = OptionsGroup::new("By Period")
        .with(
            ChartOption::new("Compare Prices", "DCA Average Price By Period")
                .top(periods.iter().map(|dca| {
                    price(&dca.avg_price, dca.period.name).color(dca.period.color)
                })),
        )
        .with(
            ChartOption::new("Compare Returns", "DCA Returns By Period").bottom(periods.iter().map(
                |dca| line(&dca.returns, dca.period.name, Unit::Percentage).color(dca.period.color),
            )),
        );
    for dca in periods {
        folder.push(period_folder(ctx, dca)?);
    }
    Ok(folder)
}

fn by_class(ctx: &OptionsContext) -> OptionsGroup {
    let classes = &ctx.metrics.dca.classes;
    let mut folder = OptionsGroup::new("By Year")
        .with(
            ChartOption::new("Compare Prices", "DCA Class Average Prices").top(classes.iter().map(
                |class| {
                    price(&class.avg_price, class.year.to_string()).color(ctx.color(class.color))
                },
            )),
        )
        .with(
            ChartOption::new("Compare Returns", "DCA Class Returns").bottom(classes.iter().map(
                |class| {
                    line(&class.returns, class.year.to_string(), Unit::Percentage)
                        .color(ctx.color(class.color))
                },
            )),
        )
        .with(
            ChartOption::new("Compare Stacks", "DCA Class Stacks").bottom(classes.iter().map(
                |class| {
                    line(&class.stack.bitcoin, class.year.to_string(), Unit::Btc)
                        .color(ctx.color(class.color))
                },
            )),
        );
    for class in classes {
        folder.push(class_folder(ctx, class));
    }
    folder
}

fn lump_sum(ctx: &OptionsContext) -> OptionsGroup {
    let periods = &ctx.metrics.dca.periods;
    OptionsGroup::new("Lump Sum")
        .with(
            ChartOption::new("Returns", "Lump Sum Returns By Period").bottom(periods.iter().map(
                |dca| {
                    line(&dca.lump_sum_returns, dca.period.name, Unit::Percentage)
                        .color(dca.period.color)
                },
            )),
        )
        .with(
            ChartOption::new("Against DCA", "DCA Against Lump Sum Returns").bottom(
                periods.iter().flat_map(|dca| {
                    [
                        line(&dca.returns, format!("{} DCA", dca.period.name), Unit::Percentage)
                            .color(dca.period.color),
                        line(
                            &dca.lump_sum_returns,
                            format!("{} Lump Sum", dca.period.name),
                            Unit::Percentage,
                        )
                        .color(dca.period.color)
                        .style(LineStyle::Dashed)
                        .hidden(),
                    ]
                }),
            ),
        )
}

pub fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    Ok(OptionsGroup::new("Investing")
        .with(by_period(ctx)?)
        .with(by_class(ctx))
        .with(lump_sum(ctx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SETTINGS, PALETTE, Palette};
    use crate::models::MetricsTree;

    #[test]
    fn cagr_only_on_annualized_periods() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let short = metrics.dca.periods.iter().find(|p| p.cagr.is_none()).unwrap();
        let long = metrics.dca.periods.iter().find(|p| p.cagr.is_some()).unwrap();

        let returns_len = |dca: &DcaPeriod| {
            let folder = period_folder(&ctx, dca).unwrap();
            folder.tree[2].as_chart().unwrap().bottom.len()
        };
        assert_eq!(returns_len(long), returns_len(short) + 1);
    }

    #[test]
    fn one_folder_per_class_after_compares() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let folder = by_class(&ctx);
        assert_eq!(folder.tree.len(), 3 + metrics.dca.classes.len());
        assert_eq!(folder.tree[3].name(), "2015");
    }

    #[test]
    fn class_colors_follow_the_context_palette() {
        let metrics = MetricsTree::new();
        let gray = Palette {
            rotation: &[Color::Gray],
            ..PALETTE
        };
        let ctx = OptionsContext::new(&metrics, &gray, &DEFAULT_SETTINGS);
        let folder = by_class(&ctx);
        let prices = folder.tree[0].as_chart().unwrap();
        assert!(prices.top.iter().all(|s| s.color == Some(Color::Gray.into())));
    }
}
