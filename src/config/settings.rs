//! Builder settings: which optional parts of the tree get emitted.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::domain::{OptionsError, Result};

/// The sub-trees a cohort folder can carry, in menu order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum CohortSection {
    Holdings,
    Valuation,
    Prices,
    CostBasis,
    Profitability,
    Activity,
}

impl CohortSection {
    /// Menu name of the section folder
    pub fn name(&self) -> &'static str {
        match self {
            CohortSection::Holdings => "Holdings",
            CohortSection::Valuation => "Valuation",
            CohortSection::Prices => "Prices",
            CohortSection::CostBasis => "Cost Basis",
            CohortSection::Profitability => "Profitability",
            CohortSection::Activity => "Activity",
        }
    }
}

/// Which cohort sections are emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CohortSections {
    pub holdings: bool,
    pub valuation: bool,
    pub prices: bool,
    pub cost_basis: bool,
    pub profitability: bool,
    pub activity: bool,
}

impl CohortSections {
    pub const ALL: CohortSections = CohortSections {
        holdings: true,
        valuation: true,
        prices: true,
        cost_basis: true,
        profitability: true,
        activity: true,
    };

    pub const NONE: CohortSections = CohortSections {
        holdings: false,
        valuation: false,
        prices: false,
        cost_basis: false,
        profitability: false,
        activity: false,
    };

    pub fn contains(&self, section: CohortSection) -> bool {
        match section {
            CohortSection::Holdings => self.holdings,
            CohortSection::Valuation => self.valuation,
            CohortSection::Prices => self.prices,
            CohortSection::CostBasis => self.cost_basis,
            CohortSection::Profitability => self.profitability,
            CohortSection::Activity => self.activity,
        }
    }

    pub fn with(mut self, section: CohortSection) -> Self {
        let flag = match section {
            CohortSection::Holdings => &mut self.holdings,
            CohortSection::Valuation => &mut self.valuation,
            CohortSection::Prices => &mut self.prices,
            CohortSection::CostBasis => &mut self.cost_basis,
            CohortSection::Profitability => &mut self.profitability,
            CohortSection::Activity => &mut self.activity,
        };
        *flag = true;
        self
    }

    /// Enabled sections in menu order
    pub fn enabled(&self) -> impl Iterator<Item = CohortSection> + '_ {
        CohortSection::iter().filter(|section| self.contains(*section))
    }

    /// Parses a comma separated list such as `holdings,cost-basis`.
    /// A list naming no section at all is rejected.
    pub fn parse_list(list: &str) -> Result<Self> {
        let sections = list
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .try_fold(CohortSections::NONE, |sections, item| {
                CohortSection::from_str(item)
                    .map(|section| sections.with(section))
                    .map_err(|_| OptionsError::UnknownSection(item.to_string()))
            })?;
        if sections == CohortSections::NONE {
            return Err(OptionsError::UnknownSection(list.to_string()));
        }
        Ok(sections)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionsSettings {
    /// One cohort folder per calendar year of creation
    pub include_year_cohorts: bool,
    /// Address balance cohorts and per type address counts
    pub include_address_cohorts: bool,
    /// One folder per mining pool (there are dozens)
    pub include_pool_folders: bool,
    /// Explorer, table, simulations and outbound links in the root menu
    pub include_non_chart_entries: bool,
    pub cohort_sections: CohortSections,
}

pub const DEFAULT_SETTINGS: OptionsSettings = OptionsSettings {
    include_year_cohorts: true,
    include_address_cohorts: true,
    include_pool_folders: true,
    include_non_chart_entries: true,
    cohort_sections: CohortSections::ALL,
};

impl Default for OptionsSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_accepts_kebab_case() {
        let sections = CohortSections::parse_list("holdings, cost-basis").unwrap();
        assert_eq!(
            sections.enabled().collect::<Vec<_>>(),
            vec![CohortSection::Holdings, CohortSection::CostBasis]
        );
    }

    #[test]
    fn parse_list_rejects_unknown_section() {
        assert_eq!(
            CohortSections::parse_list("holdings,whales"),
            Err(OptionsError::UnknownSection("whales".to_string()))
        );
    }

    #[test]
    fn parse_list_rejects_empty_lists() {
        for list in ["", ",", " , "] {
            assert_eq!(
                CohortSections::parse_list(list),
                Err(OptionsError::UnknownSection(list.to_string()))
            );
        }
    }

    #[test]
    fn default_enables_everything() {
        let settings = OptionsSettings::default();
        assert_eq!(settings.cohort_sections.enabled().count(), 6);
        assert!(settings.include_pool_folders);
    }
}
