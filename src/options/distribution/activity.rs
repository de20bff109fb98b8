//! Coins moved by a cohort and the coin age they destroyed.

use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsNode, Result, Unit, line};
use crate::models::{Cohort, CohortGroup};
use crate::options::OptionsContext;
use crate::options::helpers::from_value_pattern;

use super::{CohortSubject, per_member};

pub(super) fn single(ctx: &OptionsContext, cohort: &Cohort) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Single(cohort);
    let activity = &cohort.tree.core().activity;
    let color = ctx.color(cohort.color);

    Ok(vec![
        ChartOption::new("Sent", subject.title("Sent"))
            .bottom(from_value_pattern(&activity.sent, "Sent", Some(color)))
            .into(),
        ChartOption::new("Coinblocks Destroyed", subject.title("Coinblocks Destroyed"))
            .bottom([
                line(&activity.coinblocks_destroyed.sum, "Sum", Unit::Coinblocks).color(color),
                line(&activity.coinblocks_destroyed.cumulative, "Cumulative", Unit::Coinblocks)
                    .color(Color::Blue)
                    .hidden(),
            ])
            .into(),
        ChartOption::new("Coindays Destroyed", subject.title("Coindays Destroyed"))
            .bottom([
                line(&activity.coindays_destroyed.sum, "Sum", Unit::Coindays).color(color),
                line(&activity.coindays_destroyed.cumulative, "Cumulative", Unit::Coindays)
                    .color(Color::Blue)
                    .hidden(),
            ])
            .into(),
        ChartOption::new("Sat Age Destroyed", subject.title("Satblocks And Satdays Destroyed"))
            .bottom([
                line(&activity.satblocks_destroyed, "Satblocks", Unit::Satblocks)
                    .color(Color::Orange),
                line(&activity.satdays_destroyed, "Satdays", Unit::Satdays).color(Color::Cyan),
            ])
            .into(),
    ])
}

pub(super) fn group(ctx: &OptionsContext, group: &CohortGroup) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Group(group);

    Ok(vec![
        ChartOption::new("Sent", subject.title("Sent"))
            .bottom(per_member(group, |member| {
                let sent = &member.tree.core().activity.sent;
                vec![
                    line(&sent.bitcoin.sum, &member.name, Unit::Btc).color(ctx.color(member.color)),
                    line(&sent.dollars.sum, &member.name, Unit::Usd).color(ctx.color(member.color)),
                ]
            }))
            .into(),
        ChartOption::new("Coindays Destroyed", subject.title("Coindays Destroyed"))
            .bottom(per_member(group, |member| {
                let destroyed = &member.tree.core().activity.coindays_destroyed.sum;
                vec![line(destroyed, &member.name, Unit::Coindays).color(ctx.color(member.color))]
            }))
            .into(),
    ])
}
