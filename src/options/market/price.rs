use crate::domain::{ChartOption, OptionsGroup, Unit, candlestick};
use crate::options::OptionsContext;

pub(super) fn build(ctx: &OptionsContext) -> OptionsGroup {
    let price = &ctx.metrics.market.price;
    OptionsGroup::new("Price")
        .with(
            ChartOption::new("Dollars", "Bitcoin Price In US Dollars")
                .top([candlestick(&price.ohlc, "Price", Unit::Usd)]),
        )
        .with(
            ChartOption::new("Sats", "Bitcoin Price In Satoshis Per Dollar")
                .top([candlestick(&price.ohlc_sats, "Price", Unit::Sats)]),
        )
}
