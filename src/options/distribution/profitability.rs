//! SOPR, value created/destroyed and sell side risk.

use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsNode, Result, Unit, baseline, line};
use crate::models::cohort::AdjustedSopr;
use crate::models::{Cohort, CohortGroup, MetricId};
use crate::options::OptionsContext;

use super::{CohortSubject, per_member};

fn sopr_chart(
    ctx: &OptionsContext,
    name: &str,
    title: String,
    sopr: &MetricId,
    emas: [&MetricId; 2],
) -> Result<ChartOption> {
    let [ema_7d, ema_30d] = emas;
    Ok(ChartOption::new(name, title).bottom([
        baseline(sopr, "SOPR", Unit::Ratio)
            .base(1.0)
            .colors(ctx.palette.up, ctx.palette.down),
        line(ema_7d, "7 Day EMA", Unit::Ratio).color(Color::Lime),
        line(ema_30d, "30 Day EMA", Unit::Ratio).color(Color::Teal).hidden(),
        ctx.constant_line(1.0, Unit::Ratio)?,
    ]))
}

fn value_chart(name: &str, title: String, created: &MetricId, destroyed: &MetricId) -> ChartOption {
    ChartOption::new(name, title).bottom([
        line(created, "Created", Unit::Usd).color(Color::Green),
        line(destroyed, "Destroyed", Unit::Usd).color(Color::Red),
    ])
}

pub(super) fn single(ctx: &OptionsContext, cohort: &Cohort) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Single(cohort);
    let realized = &cohort.tree.core().realized;

    let mut tree: Vec<OptionsNode> = vec![
        sopr_chart(
            ctx,
            "SOPR",
            subject.title("Spent Output Profit Ratio"),
            &realized.sopr,
            [&realized.sopr_7d_ema, &realized.sopr_30d_ema],
        )?
        .into(),
        value_chart(
            "Value",
            subject.title("Value Created And Destroyed"),
            &realized.value_created,
            &realized.value_destroyed,
        )
        .into(),
    ];

    if let Some(AdjustedSopr {
        sopr,
        sopr_7d_ema,
        sopr_30d_ema,
        value_created,
        value_destroyed,
    }) = cohort.tree.adjusted()
    {
        tree.push(
            sopr_chart(
                ctx,
                "Adjusted SOPR",
                subject.title("Adjusted Spent Output Profit Ratio"),
                sopr,
                [sopr_7d_ema, sopr_30d_ema],
            )?
            .into(),
        );
        tree.push(
            value_chart(
                "Adjusted Value",
                subject.title("Adjusted Value Created And Destroyed"),
                value_created,
                value_destroyed,
            )
            .into(),
        );
    }

    tree.push(
        ChartOption::new("Sell Side Risk", subject.title("Sell Side Risk Ratio"))
            .bottom([
                line(&realized.sell_side_risk_ratio, "Risk", Unit::Ratio)
                    .color(ctx.color(cohort.color)),
            ])
            .into(),
    );
    Ok(tree)
}

pub(super) fn group(ctx: &OptionsContext, group: &CohortGroup) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Group(group);

    let mut tree: Vec<OptionsNode> = vec![
        ChartOption::new("SOPR", subject.title("Spent Output Profit Ratio"))
            .bottom(per_member(group, |member| {
                let sopr = &member.tree.core().realized.sopr;
                vec![line(sopr, &member.name, Unit::Ratio).color(ctx.color(member.color))]
            }))
            .bottom([ctx.constant_line(1.0, Unit::Ratio)?])
            .into(),
    ];

    if let Some(members) = group.all(|tree| tree.adjusted()) {
        tree.push(
            ChartOption::new("Adjusted SOPR", subject.title("Adjusted Spent Output Profit Ratio"))
                .bottom(members.iter().map(|(member, adjusted)| {
                    line(&adjusted.sopr, &member.name, Unit::Ratio).color(ctx.color(member.color))
                }))
                .bottom([ctx.constant_line(1.0, Unit::Ratio)?])
                .into(),
        );
    }

    tree.push(
        ChartOption::new("Sell Side Risk", subject.title("Sell Side Risk Ratio"))
            .bottom(per_member(group, |member| {
                let risk = &member.tree.core().realized.sell_side_risk_ratio;
                vec![line(risk, &member.name, Unit::Ratio).color(ctx.color(member.color))]
            }))
            .into(),
    );
    Ok(tree)
}
