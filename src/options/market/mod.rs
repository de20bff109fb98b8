//! The Market section, one sub-module per folder.

mod ath;
mod averages;
mod capitalization;
mod indicators;
mod performance;
mod price;
mod range;
mod volatility;

use crate::domain::{OptionsGroup, Result};
use crate::options::OptionsContext;

pub fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    Ok(OptionsGroup::new("Market")
        .with(price::build(ctx))
        .with(capitalization::build(ctx)?)
        .with(ath::build(ctx)?)
        .with(averages::build(ctx)?)
        .with(performance::build(ctx)?)
        .with(indicators::build(ctx)?)
        .with(volatility::build(ctx)?)
        .with(range::build(ctx)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::models::MetricsTree;

    #[test]
    fn market_folders_in_order() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let market = build(&ctx).unwrap();
        let names: Vec<_> = market.tree.iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec![
                "Price",
                "Capitalization",
                "All Time High",
                "Averages",
                "Performance",
                "Indicators",
                "Volatility",
                "Range"
            ]
        );
    }
}
