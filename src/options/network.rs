//! The Network section: address counts, throughput and velocity.

use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsGroup, OptionsNode, Result, Unit, line};
use crate::models::tree::network::AddressCounts;
use crate::options::OptionsContext;
use crate::options::helpers::from_count_pattern;

fn address_charts(title: &str, counts: &AddressCounts, color: Color) -> [ChartOption; 3] {
    [
        ChartOption::new("Total", format!("{} Address Count", title))
            .bottom([line(&counts.total, "Addresses", Unit::Count).color(color)]),
        ChartOption::new("Empty", format!("{} Empty Address Count", title))
            .bottom([line(&counts.empty, "Empty", Unit::Count).color(Color::Gray)]),
        ChartOption::new("New", format!("{} New Addresses", title))
            .bottom(from_count_pattern(&counts.new, "New", Some(color))),
    ]
}

fn addresses(ctx: &OptionsContext) -> OptionsGroup {
    let addresses = &ctx.metrics.addresses;
    let mut folder = OptionsGroup::new("Addresses")
        .with_all(address_charts("All", &addresses.all, Color::Orange).map(OptionsNode::from));

    if ctx.settings.include_address_cohorts {
        folder.push(
            ChartOption::new("Compare", "Address Count By Type").bottom(
                addresses
                    .by_type
                    .iter()
                    .map(|t| line(&t.counts.total, t.def.name, Unit::Count).color(t.def.color)),
            ),
        );
        for by_type in &addresses.by_type {
            let charts = address_charts(by_type.def.name, &by_type.counts, by_type.def.color)
                .map(OptionsNode::from);
            folder.push(OptionsGroup::new(by_type.def.name).with_all(charts));
        }
    }
    folder
}

pub fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let transactions = &ctx.metrics.chain.transactions;
    let inputs = &ctx.metrics.chain.inputs;
    let outputs = &ctx.metrics.chain.outputs;
    let market = &ctx.metrics.market;
    let supply = &ctx.metrics.chain.supply;
    let cointime = &ctx.metrics.cointime;

    Ok(OptionsGroup::new("Network")
        .with(addresses(ctx))
        .with(
            ChartOption::new("Throughput", "Transactions, Inputs And Outputs Per Second").bottom([
                line(&transactions.per_sec, "Transactions", Unit::PerSec).color(Color::Orange),
                line(&inputs.per_sec, "Inputs", Unit::PerSec).color(Color::Red),
                line(&outputs.per_sec, "Outputs", Unit::PerSec).color(Color::Green),
            ]),
        )
        .with(
            ChartOption::new("Velocity", "Transaction Velocity")
                .top([line(&market.price.close, "Price", Unit::Usd).color(Color::Default).hidden()])
                .bottom([
                    line(&transactions.velocity_btc, "BTC", Unit::Ratio).color(Color::Orange),
                    line(&transactions.velocity_usd, "USD", Unit::Ratio).color(Color::Emerald),
                    line(&cointime.adj_tx_btc_velocity, "Cointime Adjusted", Unit::Ratio)
                        .color(Color::Purple)
                        .hidden(),
                    line(&transactions.annualized_volume.bitcoin, "Annualized Volume", Unit::Btc)
                        .color(Color::Amber)
                        .hidden(),
                    line(&supply.circulating.bitcoin, "Supply", Unit::Btc)
                        .color(Color::Gray)
                        .hidden(),
                ]),
        ))
}
