//! UTXO and address cohorts, grouped by the family they are listed under.

use crate::config::cohorts::{
    AGE_RANGE, AGE_RANGE_SHAPE, ALL, AMOUNT_RANGE, AgeDef, AmountDef, CohortShape, EPOCHS,
    GE_AMOUNT, LT_AMOUNT, MAX_AGE, MAX_AGE_SHAPE, MIN_AGE, MIN_AGE_SHAPE, OUTPUT_TYPES,
    PLAIN_SHAPE, TERMS, YEARS,
};
use crate::config::palette::Hue;
use crate::models::cohort::Cohort;

/// Amount cohorts of one set (UTXOs or addresses).
pub struct AmountFamilies {
    pub ranges: Vec<Cohort>,
    pub above: Vec<Cohort>,
    pub under: Vec<Cohort>,
}

pub struct Distribution {
    pub all: Cohort,
    pub terms: Vec<Cohort>,
    pub max_age: Vec<Cohort>,
    pub min_age: Vec<Cohort>,
    pub age_range: Vec<Cohort>,
    pub epochs: Vec<Cohort>,
    pub years: Vec<Cohort>,
    pub utxo_amounts: AmountFamilies,
    pub types: Vec<Cohort>,
    pub addr_amounts: AmountFamilies,
}

fn ages(defs: &[AgeDef], shape: CohortShape) -> Vec<Cohort> {
    defs.iter()
        .map(|def| Cohort::new(def.id, def.name, def.title, def.color, shape))
        .collect()
}

fn amounts(defs: &[AmountDef], set: &str, title: &str, shape: CohortShape) -> Vec<Cohort> {
    defs.iter()
        .map(|def| {
            Cohort::new(
                format!("{}_{}", set, def.id),
                def.name,
                format!("{} {}", title, def.name),
                def.color,
                shape,
            )
        })
        .collect()
}

impl AmountFamilies {
    fn new(set: &str, title: &str, shape: CohortShape) -> Self {
        Self {
            ranges: amounts(AMOUNT_RANGE, set, title, shape),
            above: amounts(GE_AMOUNT, set, title, shape),
            under: amounts(LT_AMOUNT, set, title, shape),
        }
    }
}

impl Distribution {
    pub fn new() -> Self {
        let (first_year, last_year) = YEARS;
        Self {
            all: Cohort::new(ALL.id, ALL.name, ALL.title, ALL.color, ALL.shape),
            terms: TERMS
                .iter()
                .map(|def| Cohort::new(def.id, def.name, def.title, def.color, def.shape))
                .collect(),
            max_age: ages(MAX_AGE, MAX_AGE_SHAPE),
            min_age: ages(MIN_AGE, MIN_AGE_SHAPE),
            age_range: ages(AGE_RANGE, AGE_RANGE_SHAPE),
            epochs: ages(EPOCHS, PLAIN_SHAPE),
            years: (first_year..=last_year)
                .enumerate()
                .map(|(index, year)| {
                    Cohort::new(
                        format!("year_{}", year),
                        year.to_string(),
                        format!("UTXOs Created In {}", year),
                        Hue::Rotating(index),
                        PLAIN_SHAPE,
                    )
                })
                .collect(),
            utxo_amounts: AmountFamilies::new("utxos", "UTXOs", PLAIN_SHAPE),
            types: OUTPUT_TYPES
                .iter()
                .map(|def| Cohort::new(def.id, def.name, def.title, def.color, PLAIN_SHAPE))
                .collect(),
            addr_amounts: AmountFamilies::new("addrs", "Addresses", CohortShape::WithAddresses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_get_their_variant() {
        let distribution = Distribution::new();
        assert_eq!(distribution.all.tree.as_ref(), "full");
        assert!(distribution.max_age.iter().all(|c| c.tree.adjusted().is_some()));
        assert!(distribution.min_age.iter().all(|c| c.tree.adjusted().is_none()));
        assert!(distribution.age_range.iter().all(|c| c.tree.percentiles().is_some()));
        assert!(distribution.addr_amounts.above.iter().all(|c| c.tree.addresses().is_some()));
        assert!(distribution.utxo_amounts.ranges.iter().all(|c| c.tree.addresses().is_none()));
    }

    #[test]
    fn amount_cohorts_are_prefixed_by_set() {
        let distribution = Distribution::new();
        assert_eq!(distribution.utxo_amounts.ranges[0].id, "utxos_with_0sats");
        assert_eq!(distribution.addr_amounts.under[0].id, "addrs_under_10sats");
        assert_eq!(
            distribution.addr_amounts.under[0].tree.core().supply.supply.total.sats.as_str(),
            "addrs_under_10sats_supply"
        );
    }

    #[test]
    fn years_are_named_by_year() {
        let distribution = Distribution::new();
        assert_eq!(distribution.years[0].name, "2009");
        assert_eq!(distribution.years[0].id, "year_2009");
        assert_eq!(distribution.years[1].color, Hue::Rotating(1));
    }
}
