//! Cost basis: the price range a cohort's coins last moved at.

use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsNode, Result, price};
use crate::models::cohort::CostBasisPercentiles;
use crate::models::{Cohort, CohortGroup};
use crate::options::OptionsContext;

use super::{CohortSubject, per_member};

/// Quartiles and the 10/90 tails are drawn; the in-between steps are listed.
fn drawn_by_default(percentile: u8) -> bool {
    matches!(percentile, 10 | 25 | 50 | 75 | 90)
}

fn percentile_chart(
    ctx: &OptionsContext,
    subject: CohortSubject,
    percentiles: &CostBasisPercentiles,
    color: Color,
) -> ChartOption {
    ChartOption::new("Percentiles", subject.title("Cost Basis Percentiles")).top(
        percentiles
            .list
            .iter()
            .enumerate()
            .map(|(index, (percentile, metric))| {
                let series = price(metric, format!("{}th Percentile", percentile))
                    .active(drawn_by_default(*percentile));
                if *percentile == 50 {
                    series.color(color)
                } else {
                    series.color(ctx.palette.rotating(index))
                }
            }),
    )
}

pub(super) fn single(ctx: &OptionsContext, cohort: &Cohort) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Single(cohort);
    let core = cohort.tree.core();

    let mut tree: Vec<OptionsNode> = vec![
        ChartOption::new("Range", subject.title("Cost Basis Range"))
            .top([
                price(&core.cost_basis.max, "Max").color(Color::Green),
                price(&core.realized.price.price, "Realized").color(ctx.color(cohort.color)),
                price(&core.cost_basis.min, "Min").color(Color::Red),
            ])
            .into(),
    ];
    if let Some(percentiles) = cohort.tree.percentiles() {
        tree.push(percentile_chart(ctx, subject, percentiles, ctx.color(cohort.color)).into());
    }
    Ok(tree)
}

pub(super) fn group(ctx: &OptionsContext, group: &CohortGroup) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Group(group);

    let mut tree: Vec<OptionsNode> = vec![
        ChartOption::new("Min", subject.title("Minimum Cost Basis"))
            .top(per_member(group, |member| {
                let min = &member.tree.core().cost_basis.min;
                vec![price(min, &member.name).color(ctx.color(member.color))]
            }))
            .into(),
        ChartOption::new("Max", subject.title("Maximum Cost Basis"))
            .top(per_member(group, |member| {
                let max = &member.tree.core().cost_basis.max;
                vec![price(max, &member.name).color(ctx.color(member.color))]
            }))
            .into(),
    ];

    let medians = group.all(|tree| tree.percentiles().and_then(CostBasisPercentiles::median));
    if let Some(medians) = medians {
        tree.push(
            ChartOption::new("Median", subject.title("Median Cost Basis"))
                .top(medians.iter().map(|(member, median)| {
                    price(median, &member.name).color(ctx.color(member.color))
                }))
                .into(),
        );
    }
    Ok(tree)
}
