//! Market bundles: price, all time high, moving averages, returns,
//! volatility, range and technical indicators.

use crate::config::market::{
    AVERAGES, MAYER_PERIOD, PI_CYCLE_LONG, PI_CYCLE_SHORT, Period, RANGES, RETURNS, VOLATILITY,
};
use crate::models::MetricId;
use crate::models::patterns::RatioPattern;

pub struct Price {
    pub ohlc: MetricId,
    pub ohlc_sats: MetricId,
    pub close: MetricId,
    pub close_sats: MetricId,
}

pub struct Ath {
    pub price: MetricId,
    pub drawdown: MetricId,
    pub days_since: MetricId,
    pub max_days_between: MetricId,
    pub max_years_between: MetricId,
}

/// One moving average of the price, compared with the price.
pub struct MovingAverage {
    pub period: &'static Period,
    pub ratio: RatioPattern,
}

pub struct Return {
    pub period: &'static Period,
    pub returns: MetricId,
    pub cagr: Option<MetricId>,
}

pub struct Volatility {
    pub period: &'static Period,
    pub volatility: MetricId,
    pub sharpe: MetricId,
    pub sortino: MetricId,
}

pub struct Range {
    pub period: &'static Period,
    pub min: MetricId,
    pub max: MetricId,
}

pub struct RangeBundle {
    pub windows: Vec<Range>,
    pub true_range: MetricId,
    pub true_range_2w_sum: MetricId,
    pub choppiness: MetricId,
}

pub struct Indicators {
    pub rsi: MetricId,
    pub rsi_gains: MetricId,
    pub rsi_losses: MetricId,
    pub stoch_rsi: MetricId,
    pub stoch_rsi_k: MetricId,
    pub stoch_rsi_d: MetricId,
    pub macd_line: MetricId,
    pub macd_signal: MetricId,
    pub macd_histogram: MetricId,
    pub pi_cycle_short: MetricId,
    pub pi_cycle_long_x2: MetricId,
    pub pi_cycle: MetricId,
    pub mayer_multiple: MetricId,
    pub nvt: MetricId,
}

pub struct Market {
    pub price: Price,
    pub cap: MetricId,
    pub ath: Ath,
    pub sma: Vec<MovingAverage>,
    pub ema: Vec<MovingAverage>,
    pub returns: Vec<Return>,
    pub volatility: Vec<Volatility>,
    pub range: RangeBundle,
    pub indicators: Indicators,
}

fn averages(kind: &str) -> Vec<MovingAverage> {
    AVERAGES
        .iter()
        .map(|period| MovingAverage {
            period,
            ratio: RatioPattern::new(&MetricId::new(format!("price_{}_{}", period.id, kind))),
        })
        .collect()
}

impl Market {
    pub fn new() -> Self {
        Self {
            price: Price {
                ohlc: MetricId::new("price_ohlc"),
                ohlc_sats: MetricId::new("price_ohlc_sats"),
                close: MetricId::new("price_close"),
                close_sats: MetricId::new("price_close_sats"),
            },
            cap: MetricId::new("market_cap"),
            ath: Ath {
                price: MetricId::new("price_ath"),
                drawdown: MetricId::new("price_drawdown"),
                days_since: MetricId::new("days_since_price_ath"),
                max_days_between: MetricId::new("max_days_between_price_aths"),
                max_years_between: MetricId::new("max_years_between_price_aths"),
            },
            sma: averages("sma"),
            ema: averages("ema"),
            returns: RETURNS
                .iter()
                .map(|(period, annualized)| Return {
                    period,
                    returns: MetricId::new(format!("{}_price_returns", period.id)),
                    cagr: annualized.then(|| MetricId::new(format!("{}_cagr", period.id))),
                })
                .collect(),
            volatility: VOLATILITY
                .iter()
                .map(|period| Volatility {
                    period,
                    volatility: MetricId::new(format!("price_{}_volatility", period.id)),
                    sharpe: MetricId::new(format!("{}_sharpe_ratio", period.id)),
                    sortino: MetricId::new(format!("{}_sortino_ratio", period.id)),
                })
                .collect(),
            range: RangeBundle {
                windows: RANGES
                    .iter()
                    .map(|period| Range {
                        period,
                        min: MetricId::new(format!("price_{}_min", period.id)),
                        max: MetricId::new(format!("price_{}_max", period.id)),
                    })
                    .collect(),
                true_range: MetricId::new("price_true_range"),
                true_range_2w_sum: MetricId::new("price_true_range_2w_sum"),
                choppiness: MetricId::new("price_2w_choppiness_index"),
            },
            indicators: Indicators {
                rsi: MetricId::new("rsi_14d"),
                rsi_gains: MetricId::new("rsi_avg_gain_14d"),
                rsi_losses: MetricId::new("rsi_avg_loss_14d"),
                stoch_rsi: MetricId::new("stoch_rsi"),
                stoch_rsi_k: MetricId::new("stoch_rsi_k"),
                stoch_rsi_d: MetricId::new("stoch_rsi_d"),
                macd_line: MetricId::new("macd_line"),
                macd_signal: MetricId::new("macd_signal"),
                macd_histogram: MetricId::new("macd_histogram"),
                pi_cycle_short: MetricId::new(format!("price_{}_sma", PI_CYCLE_SHORT)),
                pi_cycle_long_x2: MetricId::new(format!("price_{}_sma_x2", PI_CYCLE_LONG)),
                pi_cycle: MetricId::new("pi_cycle"),
                mayer_multiple: MetricId::new(format!("price_{}_sma_ratio", MAYER_PERIOD)),
                nvt: MetricId::new("nvt"),
            },
        }
    }

    pub fn sma(&self, id: &str) -> Option<&MovingAverage> {
        self.sma.iter().find(|average| average.period.id == id)
    }
}
