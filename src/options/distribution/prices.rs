//! Realized price, with its ratio and z-score folders for single cohorts.

use crate::domain::{ChartOption, OptionsNode, Result, Unit, line, price};
use crate::models::{Cohort, CohortGroup};
use crate::options::OptionsContext;
use crate::options::helpers::ratio_nodes;

use super::{CohortSubject, per_member};

pub(super) fn single(ctx: &OptionsContext, cohort: &Cohort) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Single(cohort);
    ratio_nodes(
        ctx,
        &cohort.tree.core().realized.price,
        &subject.title("Realized"),
        ctx.color(cohort.color),
    )
}

pub(super) fn group(ctx: &OptionsContext, group: &CohortGroup) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Group(group);
    Ok(vec![
        ChartOption::new("Realized Price", subject.title("Realized Price"))
            .top(per_member(group, |member| {
                let realized = &member.tree.core().realized.price.price;
                vec![price(realized, &member.name).color(ctx.color(member.color))]
            }))
            .into(),
        ChartOption::new("Ratio", subject.title("Realized Price Ratio"))
            .bottom(per_member(group, |member| {
                vec![
                    line(&member.tree.core().realized.price.ratio, &member.name, Unit::Ratio)
                        .color(ctx.color(member.color)),
                ]
            }))
            .bottom([ctx.constant_line(1.0, Unit::Ratio)?])
            .into(),
    ])
}
