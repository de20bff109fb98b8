//! Supply, UTXO count and address count of a cohort.

use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsNode, Result, Unit, baseline, line};
use crate::models::{Cohort, CohortGroup};
use crate::options::OptionsContext;
use crate::options::helpers::{from_supply_pattern, sats_btc_usd};

use super::{CohortSubject, per_member};

pub(super) fn single(ctx: &OptionsContext, cohort: &Cohort) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Single(cohort);
    let supply = &cohort.tree.core().supply;
    let color = ctx.color(cohort.color);

    let mut tree: Vec<OptionsNode> = vec![
        ChartOption::new("Supply", subject.title("Supply"))
            .bottom(from_supply_pattern(&supply.supply, "Supply", Some(color)))
            .into(),
        ChartOption::new("Profit & Loss", subject.title("Supply In Profit And Loss"))
            .bottom(sats_btc_usd(&supply.in_profit, "In Profit", Some(Color::Green)))
            .bottom(sats_btc_usd(&supply.in_loss, "In Loss", Some(Color::Red)))
            .into(),
        ChartOption::new("Profit & Loss Share", subject.title("Share Of Supply In Profit And Loss"))
            .bottom([
                line(&supply.in_profit_rel_to_own, "In Profit", Unit::Percentage)
                    .color(Color::Green),
                line(&supply.in_loss_rel_to_own, "In Loss", Unit::Percentage).color(Color::Red),
                ctx.constant_line(50.0, Unit::Percentage)?,
            ])
            .into(),
        ChartOption::new("Dominance", subject.title("Share Of Circulating Supply"))
            .bottom([line(&supply.rel_to_circulating, "Dominance", Unit::Percentage).color(color)])
            .into(),
        ChartOption::new("30d Change", subject.title("Supply 30 Day Change"))
            .bottom([
                baseline(&supply.change_30d.sats, "Change", Unit::Sats),
                baseline(&supply.change_30d.bitcoin, "Change", Unit::Btc),
                baseline(&supply.change_30d.dollars, "Change", Unit::Usd),
            ])
            .into(),
        ChartOption::new("UTXO Count", subject.title("UTXO Count"))
            .bottom([line(&supply.utxo_count, "Count", Unit::Count).color(color)])
            .into(),
        ChartOption::new("UTXO Count 30d Change", subject.title("UTXO Count 30 Day Change"))
            .bottom([baseline(&supply.utxo_count_30d_change, "Change", Unit::Count)])
            .into(),
    ];

    if let Some(addresses) = cohort.tree.addresses() {
        tree.push(
            ChartOption::new("Address Count", subject.title("Address Count"))
                .bottom([
                    line(&addresses.count, "Count", Unit::Count).color(color),
                    line(&addresses.empty, "Empty", Unit::Count).color(Color::Gray).hidden(),
                ])
                .into(),
        );
        tree.push(
            ChartOption::new(
                "Address Count 30d Change",
                subject.title("Address Count 30 Day Change"),
            )
            .bottom([baseline(&addresses.count_30d_change, "Change", Unit::Count)])
            .into(),
        );
    }

    Ok(tree)
}

pub(super) fn group(ctx: &OptionsContext, group: &CohortGroup) -> Result<Vec<OptionsNode>> {
    let subject = CohortSubject::Group(group);

    let mut tree: Vec<OptionsNode> = vec![
        ChartOption::new("Supply", subject.title("Supply"))
            .bottom(per_member(group, |member| {
                let total = &member.tree.core().supply.supply.total;
                sats_btc_usd(total, &member.name, Some(ctx.color(member.color)))
            }))
            .into(),
        ChartOption::new("Dominance", subject.title("Share Of Circulating Supply"))
            .bottom(per_member(group, |member| {
                let dominance = &member.tree.core().supply.rel_to_circulating;
                vec![line(dominance, &member.name, Unit::Percentage).color(ctx.color(member.color))]
            }))
            .into(),
        ChartOption::new("UTXO Count", subject.title("UTXO Count"))
            .bottom(per_member(group, |member| {
                let count = &member.tree.core().supply.utxo_count;
                vec![line(count, &member.name, Unit::Count).color(ctx.color(member.color))]
            }))
            .into(),
    ];

    if let Some(members) = group.all(|tree| tree.addresses()) {
        tree.push(
            ChartOption::new("Address Count", subject.title("Address Count"))
                .bottom(members.iter().map(|(member, addresses)| {
                    line(&addresses.count, &member.name, Unit::Count).color(ctx.color(member.color))
                }))
                .into(),
        );
    }

    Ok(tree)
}
