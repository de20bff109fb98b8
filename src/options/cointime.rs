//! The Cointime section.

use crate::config::palette::Color;
use crate::domain::{ChartOption, OptionsGroup, Result, Unit, line, price};
use crate::models::StatsPattern;
use crate::options::OptionsContext;
use crate::options::helpers::{from_sum_stats_pattern, ratio_folder, sats_btc_usd};

/// Created, destroyed and stored totals of one quantity.
fn flows(name: &str, title: &str, patterns: [&StatsPattern; 3], unit: Unit) -> ChartOption {
    let [created, destroyed, stored] = patterns;
    ChartOption::new(name, title)
        .bottom(from_sum_stats_pattern(created, "Created", unit, Some(Color::Purple)))
        .bottom(from_sum_stats_pattern(destroyed, "Destroyed", unit, Some(Color::Red)))
        .bottom(from_sum_stats_pattern(stored, "Stored", unit, Some(Color::Green)))
}

pub fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let cointime = &ctx.metrics.cointime;
    let market = &ctx.metrics.market;
    let supply = &ctx.metrics.chain.supply;
    let realized = &ctx.metrics.distribution.all.tree.core().realized;

    let prices = [
        ("Vaulted", &cointime.vaulted_price, Color::Lime),
        ("Active", &cointime.active_price, Color::Rose),
        ("True Market Mean", &cointime.true_market_mean, Color::Blue),
        ("Cointime", &cointime.cointime_price, Color::Yellow),
    ];
    let mut price_folder = OptionsGroup::new("Prices").with(
        ChartOption::new("Compare", "Cointime Prices")
            .top([price(&realized.price.price, "Realized").color(Color::Orange)])
            .top(
                prices
                    .iter()
                    .map(|(name, pattern, color)| price(&pattern.price, *name).color(*color)),
            ),
    );
    for (name, pattern, color) in prices {
        price_folder.push(ratio_folder(ctx, name, pattern, &format!("{} Price", name), color)?);
    }

    Ok(OptionsGroup::new("Cointime")
        .with(price_folder)
        .with(
            ChartOption::new("Capitalization", "Cointime Capitalizations").bottom([
                line(&market.cap, "Market", Unit::Usd).color(Color::Default),
                line(&realized.cap, "Realized", Unit::Usd).color(Color::Orange),
                line(&cointime.investor_cap, "Investor", Unit::Usd).color(Color::Fuchsia),
                line(&cointime.thermo_cap, "Thermo", Unit::Usd).color(Color::Emerald),
                line(&cointime.vaulted_cap, "Vaulted", Unit::Usd).color(Color::Lime),
                line(&cointime.active_cap, "Active", Unit::Usd).color(Color::Rose),
                line(&cointime.cointime_cap, "Cointime", Unit::Usd).color(Color::Yellow),
            ]),
        )
        .with(
            ChartOption::new("Supply", "Cointime Supply")
                .bottom(sats_btc_usd(&supply.circulating, "All", Some(Color::Orange)))
                .bottom(sats_btc_usd(&cointime.vaulted_supply, "Vaulted", Some(Color::Lime)))
                .bottom(sats_btc_usd(&cointime.active_supply, "Active", Some(Color::Rose))),
        )
        .with(
            ChartOption::new("Liveliness", "Liveliness And Vaultedness").bottom([
                line(&cointime.liveliness, "Liveliness", Unit::Ratio).color(Color::Rose),
                line(&cointime.vaultedness, "Vaultedness", Unit::Ratio).color(Color::Lime),
                line(
                    &cointime.activity_to_vaultedness_ratio,
                    "Activity To Vaultedness",
                    Unit::Ratio,
                )
                .color(Color::Purple)
                .hidden(),
            ]),
        )
        .with(flows(
            "Coinblocks",
            "Coinblocks Created, Destroyed And Stored",
            [
                &cointime.coinblocks_created,
                &cointime.coinblocks_destroyed,
                &cointime.coinblocks_stored,
            ],
            Unit::Coinblocks,
        ))
        .with(flows(
            "Value",
            "Cointime Value Created, Destroyed And Stored",
            [&cointime.value_created, &cointime.value_destroyed, &cointime.value_stored],
            Unit::Usd,
        ))
        .with(
            OptionsGroup::new("Adjusted")
                .with(
                    ChartOption::new("Inflation", "Cointime Adjusted Inflation Rate").bottom([
                        line(&supply.inflation, "Base", Unit::Percentage).color(Color::Orange),
                        line(&cointime.adj_inflation_rate, "Adjusted", Unit::Percentage)
                            .color(Color::Purple),
                    ]),
                )
                .with(
                    ChartOption::new("Velocity", "Cointime Adjusted Transaction Velocity").bottom([
                        line(&cointime.adj_tx_btc_velocity, "BTC", Unit::Ratio)
                            .color(Color::Orange),
                        line(&cointime.adj_tx_usd_velocity, "USD", Unit::Ratio)
                            .color(Color::Emerald),
                    ]),
                ),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::models::MetricsTree;

    #[test]
    fn cointime_section_layout() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let section = build(&ctx).unwrap();
        let names: Vec<_> = section.tree.iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec![
                "Prices",
                "Capitalization",
                "Supply",
                "Liveliness",
                "Coinblocks",
                "Value",
                "Adjusted"
            ]
        );
        let prices = section.tree[0].as_group().unwrap();
        assert_eq!(prices.tree.len(), 5);
    }
}
