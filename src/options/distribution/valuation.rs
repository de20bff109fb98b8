//! Realized and unrealized capitalization and profit/loss.

use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsNode, Result, Unit, baseline, line};
use crate::models::{Cohort, CohortGroup};
use crate::options::OptionsContext;

use super::{CohortSubject, per_member};

pub(super) fn single(ctx: &OptionsContext, cohort: &Cohort) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Single(cohort);
    let realized = &cohort.tree.core().realized;
    let unrealized = &cohort.tree.core().unrealized;
    let (up, down) = (ctx.palette.up, ctx.palette.down);

    Ok(vec![
        ChartOption::new("Realized Cap", subject.title("Realized Capitalization"))
            .bottom([
                line(&realized.cap, "Realized Cap", Unit::Usd).color(ctx.color(cohort.color)),
                line(&realized.cap_rel_to_own_market_cap, "Share Of Market Cap", Unit::Percentage)
                    .color(Color::Gray)
                    .hidden(),
            ])
            .into(),
        ChartOption::new("Realized Cap 30d Change", subject.title("Realized Cap 30 Day Change"))
            .bottom([baseline(&realized.cap_30d_delta, "Change", Unit::Usd).colors(up, down)])
            .into(),
        ChartOption::new("Realized P&L", subject.title("Realized Profit And Loss"))
            .bottom([
                line(&realized.profit.sum, "Profit", Unit::Usd).color(Color::Green),
                line(&realized.loss.sum, "Loss", Unit::Usd).color(Color::Red),
                line(&realized.neg_loss, "Negative Loss", Unit::Usd)
                    .color(Color::Red)
                    .hidden(),
                line(&realized.profit.cumulative, "Cumulative Profit", Unit::Usd)
                    .color(Color::Emerald)
                    .hidden(),
                line(&realized.loss.cumulative, "Cumulative Loss", Unit::Usd)
                    .color(Color::Rose)
                    .hidden(),
            ])
            .into(),
        ChartOption::new("Net Realized P&L", subject.title("Net Realized Profit And Loss"))
            .bottom([
                baseline(&realized.net_pnl.sum, "Net", Unit::Usd).colors(up, down),
                baseline(&realized.net_pnl.cumulative, "Cumulative Net", Unit::Usd)
                    .colors(up, down)
                    .hidden(),
                baseline(
                    &realized.net_pnl_rel_to_realized_cap,
                    "Relative To Realized Cap",
                    Unit::Percentage,
                )
                .colors(up, down)
                .hidden(),
            ])
            .into(),
        ChartOption::new("Unrealized P&L", subject.title("Unrealized Profit And Loss"))
            .bottom([
                line(&unrealized.profit, "Profit", Unit::Usd).color(Color::Green),
                line(&unrealized.loss, "Loss", Unit::Usd).color(Color::Red),
                line(&unrealized.neg_loss, "Negative Loss", Unit::Usd)
                    .color(Color::Red)
                    .hidden(),
                baseline(&unrealized.net_pnl, "Net", Unit::Usd).colors(up, down).hidden(),
            ])
            .into(),
        ChartOption::new(
            "Relative Unrealized P&L",
            subject.title("Unrealized Profit And Loss Relative To Market Cap"),
        )
        .bottom([
            line(&unrealized.profit_rel_to_market_cap, "Profit", Unit::Percentage)
                .color(Color::Green),
            line(&unrealized.loss_rel_to_market_cap, "Loss", Unit::Percentage).color(Color::Red),
        ])
        .into(),
        ChartOption::new("NUPL", subject.title("Net Unrealized Profit And Loss"))
            .bottom([
                baseline(&unrealized.nupl, "NUPL", Unit::Ratio).colors(up, down),
                ctx.constant_line(0.0, Unit::Ratio)?,
            ])
            .into(),
    ])
}

pub(super) fn group(ctx: &OptionsContext, group: &CohortGroup) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Group(group);

    Ok(vec![
        ChartOption::new("Realized Cap", subject.title("Realized Capitalization"))
            .bottom(per_member(group, |member| {
                let cap = &member.tree.core().realized.cap;
                vec![line(cap, &member.name, Unit::Usd).color(ctx.color(member.color))]
            }))
            .into(),
        ChartOption::new("Net Realized P&L", subject.title("Net Realized Profit And Loss"))
            .bottom(per_member(group, |member| {
                vec![
                    line(&member.tree.core().realized.net_pnl.sum, &member.name, Unit::Usd)
                        .color(ctx.color(member.color)),
                ]
            }))
            .into(),
        ChartOption::new("Net Unrealized P&L", subject.title("Net Unrealized Profit And Loss"))
            .bottom(per_member(group, |member| {
                vec![
                    line(&member.tree.core().unrealized.net_pnl, &member.name, Unit::Usd)
                        .color(ctx.color(member.color)),
                ]
            }))
            .into(),
        ChartOption::new("NUPL", subject.title("Net Unrealized Profit And Loss"))
            .bottom(per_member(group, |member| {
                let nupl = &member.tree.core().unrealized.nupl;
                vec![line(nupl, &member.name, Unit::Ratio).color(ctx.color(member.color))]
            }))
            .bottom([ctx.constant_line(0.0, Unit::Ratio)?])
            .into(),
    ])
}
