//! Cohort section builders.
//!
//! One builder serves every cohort family. The subject is either a single cohort,
//! which gets the derived extras (30 day changes, profit/loss splits, ratio folders,
//! EMAs), or a group overlaid on "Compare" charts in each member's color.
//! Optional charts come from the cohort variant; a group only gets one when
//! every member has the bundle.

mod activity;
mod cost_basis;
mod holdings;
mod prices;
mod profitability;
mod valuation;

use crate::config::PRINT_COHORT_WIRING;
use crate::config::settings::CohortSection;
use crate::domain::{OptionsGroup, Result, SeriesBlueprint};
use crate::models::{Cohort, CohortGroup};
use crate::options::OptionsContext;

#[derive(Clone, Copy, Debug)]
pub enum CohortSubject<'a> {
    Single(&'a Cohort),
    Group(&'a CohortGroup<'a>),
}

impl<'a> CohortSubject<'a> {
    pub fn name(&self) -> &str {
        match self {
            CohortSubject::Single(cohort) => &cohort.name,
            CohortSubject::Group(group) => &group.name,
        }
    }

    /// Chart title: `"Short-Term Holders Realized Price"`.
    pub fn title(&self, what: &str) -> String {
        let title = match self {
            CohortSubject::Single(cohort) => &cohort.title,
            CohortSubject::Group(group) => &group.title,
        };
        format!("{} {}", title, what)
    }
}

/// The folder of a cohort (or of a group's compare charts), with one sub-folder
/// per enabled section.
pub fn cohort_folder(ctx: &OptionsContext, subject: CohortSubject) -> Result<OptionsGroup> {
    let mut folder = OptionsGroup::new(subject.name());
    for section in ctx.settings.cohort_sections.enabled() {
        folder.push(section_folder(ctx, subject, section)?);
    }
    if PRINT_COHORT_WIRING {
        match subject {
            CohortSubject::Single(cohort) => log::debug!(
                "cohort '{}' ({}) built as {} with {} sections",
                cohort.name,
                cohort.id,
                cohort.tree.as_ref(),
                folder.tree.len()
            ),
            CohortSubject::Group(group) => log::debug!(
                "group '{}' of {} cohorts built with {} sections",
                group.name,
                group.list.len(),
                folder.tree.len()
            ),
        }
    }
    Ok(folder)
}

pub fn section_folder(
    ctx: &OptionsContext,
    subject: CohortSubject,
    section: CohortSection,
) -> Result<OptionsGroup> {
    let tree = match (section, subject) {
        (CohortSection::Holdings, CohortSubject::Single(c)) => holdings::single(ctx, c)?,
        (CohortSection::Holdings, CohortSubject::Group(g)) => holdings::group(ctx, g)?,
        (CohortSection::Valuation, CohortSubject::Single(c)) => valuation::single(ctx, c)?,
        (CohortSection::Valuation, CohortSubject::Group(g)) => valuation::group(ctx, g)?,
        (CohortSection::Prices, CohortSubject::Single(c)) => prices::single(ctx, c)?,
        (CohortSection::Prices, CohortSubject::Group(g)) => prices::group(ctx, g)?,
        (CohortSection::CostBasis, CohortSubject::Single(c)) => cost_basis::single(ctx, c)?,
        (CohortSection::CostBasis, CohortSubject::Group(g)) => cost_basis::group(ctx, g)?,
        (CohortSection::Profitability, CohortSubject::Single(c)) => profitability::single(ctx, c)?,
        (CohortSection::Profitability, CohortSubject::Group(g)) => profitability::group(ctx, g)?,
        (CohortSection::Activity, CohortSubject::Single(c)) => activity::single(ctx, c)?,
        (CohortSection::Activity, CohortSubject::Group(g)) => activity::group(ctx, g)?,
    };
    Ok(OptionsGroup::new(section.name()).with_all(tree))
}

/// One or more series per member, in member order.
fn per_member<'a>(
    group: &CohortGroup<'a>,
    series: impl Fn(&'a Cohort) -> Vec<SeriesBlueprint>,
) -> Vec<SeriesBlueprint> {
    group.list.iter().copied().flat_map(series).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{CohortSections, OptionsSettings};
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::domain::{ChartOption, OptionsNode};
    use crate::models::MetricsTree;
    use crate::utils::tree_walk::walk;

    fn charts(group: &OptionsGroup) -> Vec<(String, ChartOption)> {
        let node = OptionsNode::Group(group.clone());
        let mut charts = Vec::new();
        walk(&node, &mut |path, node| {
            if let Some(chart) = node.as_chart() {
                charts.push((path.join("/"), chart.clone()));
            }
        });
        charts
    }

    fn has_metric(group: &OptionsGroup, metric: &str) -> bool {
        charts(group)
            .iter()
            .any(|(_, chart)| chart.series().any(|s| s.metric.as_str() == metric))
    }

    #[test]
    fn single_folder_has_every_section() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let sth = &metrics.distribution.terms[0];
        let folder = cohort_folder(&ctx, CohortSubject::Single(sth)).unwrap();
        let names: Vec<_> = folder.tree.iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec!["Holdings", "Valuation", "Prices", "Cost Basis", "Profitability", "Activity"]
        );
    }

    #[test]
    fn single_gets_extras_group_does_not() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let all = &metrics.distribution.all;
        let sth = &metrics.distribution.terms[0];
        let single = cohort_folder(&ctx, CohortSubject::Single(sth)).unwrap();
        assert!(has_metric(&single, "sth_supply_30d_change"));
        assert!(has_metric(&single, "sth_sopr_7d_ema"));
        assert!(has_metric(&single, "sth_supply_in_profit"));

        let group = CohortGroup::new("Compare", "Terms", [all, sth]).unwrap();
        let compare = cohort_folder(&ctx, CohortSubject::Group(&group)).unwrap();
        assert!(!has_metric(&compare, "sth_supply_30d_change"));
        assert!(!has_metric(&compare, "sth_sopr_7d_ema"));
        assert!(has_metric(&compare, "sth_supply"));
        assert!(has_metric(&compare, "supply"));
    }

    #[test]
    fn group_lists_each_member_once() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let all = &metrics.distribution.all;
        let group = CohortGroup::new("Compare", "Terms", [all, all, &metrics.distribution.terms[1]])
            .unwrap();
        let compare = cohort_folder(&ctx, CohortSubject::Group(&group)).unwrap();
        for (path, chart) in charts(&compare) {
            let ids: Vec<_> = chart.series().map(|s| s.metric.clone()).collect();
            let mut distinct = ids.clone();
            distinct.sort();
            distinct.dedup();
            assert_eq!(ids.len(), distinct.len(), "repeated series in {}", path);
        }
    }

    #[test]
    fn optional_charts_need_every_member() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let terms: Vec<&Cohort> = metrics.distribution.terms.iter().collect();
        let group = CohortGroup::new("Compare", "Terms", terms).unwrap();
        let compare = cohort_folder(&ctx, CohortSubject::Group(&group)).unwrap();
        // long-term holders have no adjusted SOPR
        assert!(!has_metric(&compare, "sth_adjusted_sopr"));
        // both carry cost basis percentiles
        assert!(has_metric(&compare, "lth_cost_basis_pct50"));

        let sth = &metrics.distribution.terms[0];
        let sth = cohort_folder(&ctx, CohortSubject::Single(sth)).unwrap();
        assert!(has_metric(&sth, "sth_adjusted_sopr"));
    }

    #[test]
    fn address_cohorts_carry_address_counts() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let cohort = &metrics.distribution.addr_amounts.above[0];
        let folder = cohort_folder(&ctx, CohortSubject::Single(cohort)).unwrap();
        assert!(has_metric(&folder, &format!("{}_addr_count", cohort.id)));
        let utxo = &metrics.distribution.utxo_amounts.above[0];
        let folder = cohort_folder(&ctx, CohortSubject::Single(utxo)).unwrap();
        assert!(!has_metric(&folder, &format!("{}_addr_count", utxo.id)));
    }

    #[test]
    fn disabled_sections_are_skipped() {
        let metrics = MetricsTree::new();
        let settings = OptionsSettings {
            cohort_sections: CohortSections::NONE.with(CohortSection::Prices),
            ..DEFAULT_SETTINGS
        };
        let ctx = OptionsContext::new(&metrics, &PALETTE, &settings);
        let folder =
            cohort_folder(&ctx, CohortSubject::Single(&metrics.distribution.all)).unwrap();
        assert_eq!(folder.tree.len(), 1);
        assert_eq!(folder.tree[0].name(), "Prices");
    }
}
