//! Address counts, total and per output type.

use crate::config::cohorts::{OutputTypeDef, addressable_types};
use crate::models::{MetricId, prefixed};
use crate::models::patterns::{StatsPattern, keys};

pub struct AddressCounts {
    pub total: MetricId,
    pub empty: MetricId,
    pub new: StatsPattern,
}

impl AddressCounts {
    fn new(prefix: &str) -> Self {
        let name = |stem: &str| prefixed(prefix, stem);
        Self {
            total: name("addr_count"),
            empty: name("empty_addr_count"),
            new: StatsPattern::with_keys(&name("new_addr_count"), keys::BASE_SUM_CUM),
        }
    }
}

pub struct AddressTypeCounts {
    pub def: &'static OutputTypeDef,
    pub counts: AddressCounts,
}

pub struct Addresses {
    pub all: AddressCounts,
    pub by_type: Vec<AddressTypeCounts>,
}

impl Addresses {
    pub fn new() -> Self {
        Self {
            all: AddressCounts::new(""),
            by_type: addressable_types()
                .map(|def| AddressTypeCounts {
                    def,
                    counts: AddressCounts::new(def.id),
                })
                .collect(),
        }
    }
}
