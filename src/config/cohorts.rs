//! Cohort definitions: every slice of the UTXO and address sets the backend tracks.
//!
//! `id` is the metric prefix the backend uses for the cohort (empty for `all`).
//! Output types are shared by the chain, network and cohort sections.

use strum_macros::{Display, EnumIter};

use crate::config::palette::Color;

/// Which optional pattern bundles the backend computes for a cohort.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum CohortShape {
    Full,
    WithAdjusted,
    WithPercentiles,
    Basic,
    WithAddresses,
}

pub struct CohortDef {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub color: Color,
    pub shape: CohortShape,
}

/// Age bounded cohort; the shape is set by the family it belongs to
pub struct AgeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub color: Color,
}

/// Amount bounded cohort; `id` is prefixed with `utxos_` or `addrs_`
pub struct AmountDef {
    pub id: &'static str,
    pub name: &'static str,
    pub color: Color,
}

pub const ALL: CohortDef = CohortDef {
    id: "",
    name: "All",
    title: "All UTXOs",
    color: Color::Orange,
    shape: CohortShape::Full,
};

pub const TERMS: &[CohortDef] = &[
    CohortDef {
        id: "sth",
        name: "Short-Term",
        title: "Short-Term Holders",
        color: Color::Yellow,
        shape: CohortShape::Full,
    },
    CohortDef {
        id: "lth",
        name: "Long-Term",
        title: "Long-Term Holders",
        color: Color::Fuchsia,
        shape: CohortShape::WithPercentiles,
    },
];

pub const MAX_AGE_SHAPE: CohortShape = CohortShape::WithAdjusted;
pub const MIN_AGE_SHAPE: CohortShape = CohortShape::Basic;
pub const AGE_RANGE_SHAPE: CohortShape = CohortShape::WithPercentiles;

pub const MAX_AGE: &[AgeDef] = &[
    AgeDef {
        id: "utxos_up_to_1w_old",
        name: "1 Week",
        title: "UTXOs Up To 1 Week Old",
        color: Color::Red,
    },
    AgeDef {
        id: "utxos_up_to_1m_old",
        name: "1 Month",
        title: "UTXOs Up To 1 Month Old",
        color: Color::Orange,
    },
    AgeDef {
        id: "utxos_up_to_2m_old",
        name: "2 Months",
        title: "UTXOs Up To 2 Months Old",
        color: Color::Amber,
    },
    AgeDef {
        id: "utxos_up_to_3m_old",
        name: "3 Months",
        title: "UTXOs Up To 3 Months Old",
        color: Color::Yellow,
    },
    AgeDef {
        id: "utxos_up_to_4m_old",
        name: "4 Months",
        title: "UTXOs Up To 4 Months Old",
        color: Color::Avocado,
    },
    AgeDef {
        id: "utxos_up_to_5m_old",
        name: "5 Months",
        title: "UTXOs Up To 5 Months Old",
        color: Color::Lime,
    },
    AgeDef {
        id: "utxos_up_to_6m_old",
        name: "6 Months",
        title: "UTXOs Up To 6 Months Old",
        color: Color::Green,
    },
    AgeDef {
        id: "utxos_up_to_1y_old",
        name: "1 Year",
        title: "UTXOs Up To 1 Year Old",
        color: Color::Emerald,
    },
    AgeDef {
        id: "utxos_up_to_2y_old",
        name: "2 Years",
        title: "UTXOs Up To 2 Years Old",
        color: Color::Teal,
    },
    AgeDef {
        id: "utxos_up_to_3y_old",
        name: "3 Years",
        title: "UTXOs Up To 3 Years Old",
        color: Color::Cyan,
    },
    AgeDef {
        id: "utxos_up_to_4y_old",
        name: "4 Years",
        title: "UTXOs Up To 4 Years Old",
        color: Color::Sky,
    },
    AgeDef {
        id: "utxos_up_to_5y_old",
        name: "5 Years",
        title: "UTXOs Up To 5 Years Old",
        color: Color::Blue,
    },
    AgeDef {
        id: "utxos_up_to_6y_old",
        name: "6 Years",
        title: "UTXOs Up To 6 Years Old",
        color: Color::Indigo,
    },
    AgeDef {
        id: "utxos_up_to_7y_old",
        name: "7 Years",
        title: "UTXOs Up To 7 Years Old",
        color: Color::Violet,
    },
    AgeDef {
        id: "utxos_up_to_8y_old",
        name: "8 Years",
        title: "UTXOs Up To 8 Years Old",
        color: Color::Purple,
    },
    AgeDef {
        id: "utxos_up_to_10y_old",
        name: "10 Years",
        title: "UTXOs Up To 10 Years Old",
        color: Color::Fuchsia,
    },
    AgeDef {
        id: "utxos_up_to_12y_old",
        name: "12 Years",
        title: "UTXOs Up To 12 Years Old",
        color: Color::Pink,
    },
    AgeDef {
        id: "utxos_up_to_15y_old",
        name: "15 Years",
        title: "UTXOs Up To 15 Years Old",
        color: Color::Rose,
    },
];

pub const MIN_AGE: &[AgeDef] = &[
    AgeDef {
        id: "utxos_at_least_1d_old",
        name: "1 Day",
        title: "UTXOs At Least 1 Day Old",
        color: Color::Red,
    },
    AgeDef {
        id: "utxos_at_least_1w_old",
        name: "1 Week",
        title: "UTXOs At Least 1 Week Old",
        color: Color::Orange,
    },
    AgeDef {
        id: "utxos_at_least_1m_old",
        name: "1 Month",
        title: "UTXOs At Least 1 Month Old",
        color: Color::Amber,
    },
    AgeDef {
        id: "utxos_at_least_2m_old",
        name: "2 Months",
        title: "UTXOs At Least 2 Months Old",
        color: Color::Yellow,
    },
    AgeDef {
        id: "utxos_at_least_3m_old",
        name: "3 Months",
        title: "UTXOs At Least 3 Months Old",
        color: Color::Avocado,
    },
    AgeDef {
        id: "utxos_at_least_4m_old",
        name: "4 Months",
        title: "UTXOs At Least 4 Months Old",
        color: Color::Lime,
    },
    AgeDef {
        id: "utxos_at_least_5m_old",
        name: "5 Months",
        title: "UTXOs At Least 5 Months Old",
        color: Color::Green,
    },
    AgeDef {
        id: "utxos_at_least_6m_old",
        name: "6 Months",
        title: "UTXOs At Least 6 Months Old",
        color: Color::Emerald,
    },
    AgeDef {
        id: "utxos_at_least_1y_old",
        name: "1 Year",
        title: "UTXOs At Least 1 Year Old",
        color: Color::Teal,
    },
    AgeDef {
        id: "utxos_at_least_2y_old",
        name: "2 Years",
        title: "UTXOs At Least 2 Years Old",
        color: Color::Cyan,
    },
    AgeDef {
        id: "utxos_at_least_3y_old",
        name: "3 Years",
        title: "UTXOs At Least 3 Years Old",
        color: Color::Sky,
    },
    AgeDef {
        id: "utxos_at_least_4y_old",
        name: "4 Years",
        title: "UTXOs At Least 4 Years Old",
        color: Color::Blue,
    },
    AgeDef {
        id: "utxos_at_least_5y_old",
        name: "5 Years",
        title: "UTXOs At Least 5 Years Old",
        color: Color::Indigo,
    },
    AgeDef {
        id: "utxos_at_least_6y_old",
        name: "6 Years",
        title: "UTXOs At Least 6 Years Old",
        color: Color::Violet,
    },
    AgeDef {
        id: "utxos_at_least_7y_old",
        name: "7 Years",
        title: "UTXOs At Least 7 Years Old",
        color: Color::Purple,
    },
    AgeDef {
        id: "utxos_at_least_8y_old",
        name: "8 Years",
        title: "UTXOs At Least 8 Years Old",
        color: Color::Fuchsia,
    },
    AgeDef {
        id: "utxos_at_least_10y_old",
        name: "10 Years",
        title: "UTXOs At Least 10 Years Old",
        color: Color::Pink,
    },
    AgeDef {
        id: "utxos_at_least_12y_old",
        name: "12 Years",
        title: "UTXOs At Least 12 Years Old",
        color: Color::Rose,
    },
];

pub const AGE_RANGE: &[AgeDef] = &[
    AgeDef {
        id: "utxos_up_to_1d_old",
        name: "Up To 1 Day",
        title: "UTXOs Up To 1 Day Old",
        color: Color::Red,
    },
    AgeDef {
        id: "utxos_at_least_1d_up_to_1w_old",
        name: "1 Day - 1 Week",
        title: "UTXOs 1 Day To 1 Week Old",
        color: Color::Orange,
    },
    AgeDef {
        id: "utxos_at_least_1w_up_to_1m_old",
        name: "1 Week - 1 Month",
        title: "UTXOs 1 Week To 1 Month Old",
        color: Color::Amber,
    },
    AgeDef {
        id: "utxos_at_least_1m_up_to_2m_old",
        name: "1 Month - 2 Months",
        title: "UTXOs 1 Month To 2 Months Old",
        color: Color::Yellow,
    },
    AgeDef {
        id: "utxos_at_least_2m_up_to_3m_old",
        name: "2 Months - 3 Months",
        title: "UTXOs 2 Months To 3 Months Old",
        color: Color::Avocado,
    },
    AgeDef {
        id: "utxos_at_least_3m_up_to_4m_old",
        name: "3 Months - 4 Months",
        title: "UTXOs 3 Months To 4 Months Old",
        color: Color::Lime,
    },
    AgeDef {
        id: "utxos_at_least_4m_up_to_5m_old",
        name: "4 Months - 5 Months",
        title: "UTXOs 4 Months To 5 Months Old",
        color: Color::Green,
    },
    AgeDef {
        id: "utxos_at_least_5m_up_to_6m_old",
        name: "5 Months - 6 Months",
        title: "UTXOs 5 Months To 6 Months Old",
        color: Color::Emerald,
    },
    AgeDef {
        id: "utxos_at_least_6m_up_to_1y_old",
        name: "6 Months - 1 Year",
        title: "UTXOs 6 Months To 1 Year Old",
        color: Color::Teal,
    },
    AgeDef {
        id: "utxos_at_least_1y_up_to_2y_old",
        name: "1 Year - 2 Years",
        title: "UTXOs 1 Year To 2 Years Old",
        color: Color::Cyan,
    },
    AgeDef {
        id: "utxos_at_least_2y_up_to_3y_old",
        name: "2 Years - 3 Years",
        title: "UTXOs 2 Years To 3 Years Old",
        color: Color::Sky,
    },
    AgeDef {
        id: "utxos_at_least_3y_up_to_4y_old",
        name: "3 Years - 4 Years",
        title: "UTXOs 3 Years To 4 Years Old",
        color: Color::Blue,
    },
    AgeDef {
        id: "utxos_at_least_4y_up_to_5y_old",
        name: "4 Years - 5 Years",
        title: "UTXOs 4 Years To 5 Years Old",
        color: Color::Indigo,
    },
    AgeDef {
        id: "utxos_at_least_5y_up_to_6y_old",
        name: "5 Years - 6 Years",
        title: "UTXOs 5 Years To 6 Years Old",
        color: Color::Violet,
    },
    AgeDef {
        id: "utxos_at_least_6y_up_to_7y_old",
        name: "6 Years - 7 Years",
        title: "UTXOs 6 Years To 7 Years Old",
        color: Color::Purple,
    },
    AgeDef {
        id: "utxos_at_least_7y_up_to_8y_old",
        name: "7 Years - 8 Years",
        title: "UTXOs 7 Years To 8 Years Old",
        color: Color::Fuchsia,
    },
    AgeDef {
        id: "utxos_at_least_8y_up_to_10y_old",
        name: "8 Years - 10 Years",
        title: "UTXOs 8 Years To 10 Years Old",
        color: Color::Pink,
    },
    AgeDef {
        id: "utxos_at_least_10y_up_to_12y_old",
        name: "10 Years - 12 Years",
        title: "UTXOs 10 Years To 12 Years Old",
        color: Color::Rose,
    },
    AgeDef {
        id: "utxos_at_least_12y_up_to_15y_old",
        name: "12 Years - 15 Years",
        title: "UTXOs 12 Years To 15 Years Old",
        color: Color::Red,
    },
    AgeDef {
        id: "utxos_at_least_15y_old",
        name: "15+ Years",
        title: "UTXOs At Least 15 Years Old",
        color: Color::Orange,
    },
];

pub const EPOCHS: &[AgeDef] = &[
    AgeDef {
        id: "epoch_0",
        name: "Epoch 0",
        title: "UTXOs Created In Epoch 0 (2009-2012)",
        color: Color::Red,
    },
    AgeDef {
        id: "epoch_1",
        name: "Epoch 1",
        title: "UTXOs Created In Epoch 1 (2012-2016)",
        color: Color::Yellow,
    },
    AgeDef {
        id: "epoch_2",
        name: "Epoch 2",
        title: "UTXOs Created In Epoch 2 (2016-2020)",
        color: Color::Green,
    },
    AgeDef {
        id: "epoch_3",
        name: "Epoch 3",
        title: "UTXOs Created In Epoch 3 (2020-2024)",
        color: Color::Blue,
    },
    AgeDef {
        id: "epoch_4",
        name: "Epoch 4",
        title: "UTXOs Created In Epoch 4 (2024-)",
        color: Color::Purple,
    },
];

/// Year cohorts (`year_<yyyy>`), colored by rotation
pub const YEARS: (u16, u16) = (2009, 2025);

/// Shared by min-age, epoch, year, amount and type families
pub const PLAIN_SHAPE: CohortShape = CohortShape::Basic;

pub const AMOUNT_RANGE: &[AmountDef] = &[
    AmountDef { id: "with_0sats", name: "0 sats", color: Color::Red },
    AmountDef { id: "with_1sat_to_10sats", name: "1 - 10 sats", color: Color::Orange },
    AmountDef { id: "with_10sats_to_100sats", name: "10 - 100 sats", color: Color::Amber },
    AmountDef { id: "with_100sats_to_1k_sats", name: "100 - 1k sats", color: Color::Avocado },
    AmountDef { id: "with_1k_sats_to_10k_sats", name: "1k - 10k sats", color: Color::Lime },
    AmountDef { id: "with_10k_sats_to_100k_sats", name: "10k - 100k sats", color: Color::Green },
    AmountDef { id: "with_100k_sats_to_1m_sats", name: "100k - 1M sats", color: Color::Emerald },
    AmountDef { id: "with_1m_sats_to_10m_sats", name: "1M - 10M sats", color: Color::Teal },
    AmountDef { id: "with_10m_sats_to_1btc", name: "0.1 - 1 BTC", color: Color::Sky },
    AmountDef { id: "with_1btc_to_10btc", name: "1 - 10 BTC", color: Color::Blue },
    AmountDef { id: "with_10btc_to_100btc", name: "10 - 100 BTC", color: Color::Indigo },
    AmountDef { id: "with_100btc_to_1k_btc", name: "100 - 1k BTC", color: Color::Violet },
    AmountDef { id: "with_1k_btc_to_10k_btc", name: "1k - 10k BTC", color: Color::Fuchsia },
    AmountDef { id: "with_10k_btc_to_100k_btc", name: "10k - 100k BTC", color: Color::Pink },
    AmountDef { id: "with_100k_btc_or_more", name: "100k+ BTC", color: Color::Rose },
];

pub const GE_AMOUNT: &[AmountDef] = &[
    AmountDef { id: "above_1sat", name: "≥ 1 sat", color: Color::Red },
    AmountDef { id: "above_10sats", name: "≥ 10 sats", color: Color::Orange },
    AmountDef { id: "above_100sats", name: "≥ 100 sats", color: Color::Yellow },
    AmountDef { id: "above_1k_sats", name: "≥ 1k sats", color: Color::Avocado },
    AmountDef { id: "above_10k_sats", name: "≥ 10k sats", color: Color::Green },
    AmountDef { id: "above_100k_sats", name: "≥ 100k sats", color: Color::Emerald },
    AmountDef { id: "above_1m_sats", name: "≥ 1M sats", color: Color::Teal },
    AmountDef { id: "above_10m_sats", name: "≥ 0.1 BTC", color: Color::Sky },
    AmountDef { id: "above_1btc", name: "≥ 1 BTC", color: Color::Blue },
    AmountDef { id: "above_10btc", name: "≥ 10 BTC", color: Color::Violet },
    AmountDef { id: "above_100btc", name: "≥ 100 BTC", color: Color::Purple },
    AmountDef { id: "above_1k_btc", name: "≥ 1k BTC", color: Color::Pink },
    AmountDef { id: "above_10k_btc", name: "≥ 10k BTC", color: Color::Rose },
];

pub const LT_AMOUNT: &[AmountDef] = &[
    AmountDef { id: "under_10sats", name: "< 10 sats", color: Color::Red },
    AmountDef { id: "under_100sats", name: "< 100 sats", color: Color::Orange },
    AmountDef { id: "under_1k_sats", name: "< 1k sats", color: Color::Yellow },
    AmountDef { id: "under_10k_sats", name: "< 10k sats", color: Color::Avocado },
    AmountDef { id: "under_100k_sats", name: "< 100k sats", color: Color::Green },
    AmountDef { id: "under_1m_sats", name: "< 1M sats", color: Color::Emerald },
    AmountDef { id: "under_10m_sats", name: "< 0.1 BTC", color: Color::Teal },
    AmountDef { id: "under_1btc", name: "< 1 BTC", color: Color::Sky },
    AmountDef { id: "under_10btc", name: "< 10 BTC", color: Color::Blue },
    AmountDef { id: "under_100btc", name: "< 100 BTC", color: Color::Violet },
    AmountDef { id: "under_1k_btc", name: "< 1k BTC", color: Color::Purple },
    AmountDef { id: "under_10k_btc", name: "< 10k BTC", color: Color::Pink },
    AmountDef { id: "under_100k_btc", name: "< 100k BTC", color: Color::Rose },
];

/// Cost basis percentiles served for `Full` cohorts
pub const FULL_PERCENTILES: &[u8] = &[
    5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95,
];

/// Cost basis percentiles served for `WithPercentiles` cohorts
pub const QUARTILE_PERCENTILES: &[u8] = &[10, 25, 50, 75, 90];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum OutputType {
    P2pk65,
    P2pk33,
    P2pkh,
    P2ms,
    P2sh,
    P2wpkh,
    P2wsh,
    P2tr,
    P2a,
    Unknown,
    Empty,
}

pub struct OutputTypeDef {
    pub kind: OutputType,
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub color: Color,
    /// Outputs of this type pay to an address (and have address metrics)
    pub addressable: bool,
}

pub const OUTPUT_TYPES: &[OutputTypeDef] = &[
    OutputTypeDef {
        kind: OutputType::P2pk65,
        id: "p2pk65",
        name: "P2PK65",
        title: "Pay To Uncompressed Public Key",
        color: Color::Red,
        addressable: true,
    },
    OutputTypeDef {
        kind: OutputType::P2pk33,
        id: "p2pk33",
        name: "P2PK33",
        title: "Pay To Compressed Public Key",
        color: Color::Orange,
        addressable: true,
    },
    OutputTypeDef {
        kind: OutputType::P2pkh,
        id: "p2pkh",
        name: "P2PKH",
        title: "Pay To Public Key Hash",
        color: Color::Yellow,
        addressable: true,
    },
    OutputTypeDef {
        kind: OutputType::P2ms,
        id: "p2ms",
        name: "P2MS",
        title: "Pay To Bare Multisig",
        color: Color::Lime,
        addressable: false,
    },
    OutputTypeDef {
        kind: OutputType::P2sh,
        id: "p2sh",
        name: "P2SH",
        title: "Pay To Script Hash",
        color: Color::Green,
        addressable: true,
    },
    OutputTypeDef {
        kind: OutputType::P2wpkh,
        id: "p2wpkh",
        name: "P2WPKH",
        title: "Pay To Witness Public Key Hash",
        color: Color::Teal,
        addressable: true,
    },
    OutputTypeDef {
        kind: OutputType::P2wsh,
        id: "p2wsh",
        name: "P2WSH",
        title: "Pay To Witness Script Hash",
        color: Color::Blue,
        addressable: true,
    },
    OutputTypeDef {
        kind: OutputType::P2tr,
        id: "p2tr",
        name: "P2TR",
        title: "Pay To Taproot",
        color: Color::Indigo,
        addressable: true,
    },
    OutputTypeDef {
        kind: OutputType::P2a,
        id: "p2a",
        name: "P2A",
        title: "Pay To Anchor",
        color: Color::Pink,
        addressable: true,
    },
    OutputTypeDef {
        kind: OutputType::Unknown,
        id: "unknown",
        name: "Unknown",
        title: "Unknown Output Script",
        color: Color::Violet,
        addressable: false,
    },
    OutputTypeDef {
        kind: OutputType::Empty,
        id: "empty",
        name: "Empty",
        title: "Empty Output Script",
        color: Color::Fuchsia,
        addressable: false,
    },
];

impl OutputType {
    pub fn def(&self) -> &'static OutputTypeDef {
        OUTPUT_TYPES
            .iter()
            .find(|def| def.kind == *self)
            .unwrap_or(&OUTPUT_TYPES[0])
    }
}

pub fn addressable_types() -> impl Iterator<Item = &'static OutputTypeDef> {
    OUTPUT_TYPES.iter().filter(|def| def.addressable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    #[test]
    fn every_output_type_has_a_def() {
        for kind in OutputType::iter() {
            assert_eq!(kind.def().kind, kind);
        }
        assert_eq!(OUTPUT_TYPES.len(), OutputType::iter().count());
    }

    #[test]
    fn cohort_ids_are_unique_across_utxo_families() {
        let ids = TERMS
            .iter()
            .map(|d| d.id)
            .chain(MAX_AGE.iter().map(|d| d.id))
            .chain(MIN_AGE.iter().map(|d| d.id))
            .chain(AGE_RANGE.iter().map(|d| d.id))
            .chain(EPOCHS.iter().map(|d| d.id))
            .chain(AMOUNT_RANGE.iter().map(|d| d.id))
            .chain(GE_AMOUNT.iter().map(|d| d.id))
            .chain(LT_AMOUNT.iter().map(|d| d.id))
            .chain(OUTPUT_TYPES.iter().map(|d| d.id));
        let duplicates: Vec<_> = ids.duplicates().collect();
        assert!(duplicates.is_empty(), "duplicate cohort ids: {:?}", duplicates);
    }

    #[test]
    fn quartiles_are_a_subset_of_full_percentiles() {
        assert!(
            QUARTILE_PERCENTILES
                .iter()
                .all(|p| FULL_PERCENTILES.contains(p))
        );
        assert!(QUARTILE_PERCENTILES.contains(&50));
    }

    #[test]
    fn some_types_are_not_addressable() {
        let addressable = addressable_types().count();
        assert!(addressable > 0 && addressable < OUTPUT_TYPES.len());
    }
}
