//! Display units attached to every series.
//!
//! Units carry no arithmetic. The chart shell uses them to pick a price scale and
//! a number formatter, and to decide which series may share a pane axis.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Unit {
    Usd,
    Btc,
    Sats,
    Percentage,
    Ratio,
    Count,
    Bytes,
    #[serde(rename = "vb")]
    #[strum(serialize = "vb")]
    VBytes,
    #[serde(rename = "wu")]
    #[strum(serialize = "wu")]
    WeightUnits,
    Secs,
    Days,
    Years,
    Blocks,
    #[serde(rename = "h/s")]
    #[strum(serialize = "h/s")]
    HashRate,
    Difficulty,
    #[serde(rename = "sat/vb")]
    #[strum(serialize = "sat/vb")]
    FeeRate,
    #[serde(rename = "usd/th/s/day")]
    #[strum(serialize = "usd/th/s/day")]
    UsdPerThsPerDay,
    #[serde(rename = "usd/ph/s/day")]
    #[strum(serialize = "usd/ph/s/day")]
    UsdPerPhsPerDay,
    #[serde(rename = "sats/th/s/day")]
    #[strum(serialize = "sats/th/s/day")]
    SatsPerThsPerDay,
    #[serde(rename = "sats/ph/s/day")]
    #[strum(serialize = "sats/ph/s/day")]
    SatsPerPhsPerDay,
    Coinblocks,
    Coindays,
    Satblocks,
    Satdays,
    PerSec,
    /// Oscillators bounded to 0..100 (RSI and friends)
    Index,
    /// Standard deviations from a mean
    #[serde(rename = "sd")]
    #[strum(serialize = "sd")]
    StdDev,
    Epoch,
}

impl Unit {
    /// Units plotted against the price scale of the top pane.
    pub fn is_price(&self) -> bool {
        matches!(self, Unit::Usd | Unit::Sats)
    }

    /// Units whose series read naturally around a neutral line.
    pub fn neutral_value(&self) -> Option<f64> {
        match self {
            Unit::Percentage | Unit::StdDev => Some(0.0),
            Unit::Ratio => Some(1.0),
            Unit::Index => Some(50.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_and_serde_agree() {
        for unit in Unit::iter() {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit), "unit {:?}", unit);
        }
    }

    #[test]
    fn parses_slash_units() {
        assert_eq!(Unit::from_str("sat/vb").unwrap(), Unit::FeeRate);
        assert_eq!(Unit::from_str("usd").unwrap(), Unit::Usd);
        assert!(Unit::from_str("furlongs").is_err());
    }

    #[test]
    fn neutral_values() {
        assert_eq!(Unit::Ratio.neutral_value(), Some(1.0));
        assert_eq!(Unit::Usd.neutral_value(), None);
    }
}
