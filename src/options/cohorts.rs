//! The Cohorts section: every cohort family as a "Compare" folder plus one
//! folder per cohort.

use crate::domain::{OptionsGroup, Result};
use crate::models::tree::AmountFamilies;
use crate::models::{Cohort, CohortGroup};
use crate::options::OptionsContext;
use crate::options::distribution::{CohortSubject, cohort_folder};

/// `Compare` overlays the whole family; `with_all` puts the `all` cohort first as a reference.
fn family(
    ctx: &OptionsContext,
    name: &str,
    title: &str,
    cohorts: &[Cohort],
    with_all: bool,
) -> Result<OptionsGroup> {
    let all = &ctx.metrics.distribution.all;
    let members = with_all.then_some(all).into_iter().chain(cohorts);
    let compare = CohortGroup::new("Compare", title, members)?;

    let mut folder =
        OptionsGroup::new(name).with(cohort_folder(ctx, CohortSubject::Group(&compare))?);
    for cohort in cohorts {
        folder.push(cohort_folder(ctx, CohortSubject::Single(cohort))?);
    }
    Ok(folder)
}

/// Ranges, lower bounds and upper bounds of one amount family.
fn amounts(
    ctx: &OptionsContext,
    name: &str,
    set: &str,
    families: &AmountFamilies,
) -> Result<OptionsGroup> {
    Ok(OptionsGroup::new(name)
        .with(family(ctx, "Ranges", &format!("{} By Amount Range", set), &families.ranges, false)?)
        .with(family(ctx, "At Least", &format!("{} Above An Amount", set), &families.above, false)?)
        .with(family(ctx, "Under", &format!("{} Under An Amount", set), &families.under, false)?))
}

pub fn build(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let distribution = &ctx.metrics.distribution;

    let mut section = OptionsGroup::new("Cohorts")
        .with(cohort_folder(ctx, CohortSubject::Single(&distribution.all))?)
        .with(family(ctx, "Terms", "Holders By Term", &distribution.terms, true)?)
        .with(family(ctx, "Up To", "UTXOs Up To An Age", &distribution.max_age, false)?)
        .with(family(ctx, "From", "UTXOs At Least An Age", &distribution.min_age, false)?)
        .with(family(ctx, "Age Ranges", "UTXOs By Age Range", &distribution.age_range, false)?)
        .with(family(ctx, "Epochs", "UTXOs By Halving Epoch", &distribution.epochs, false)?);

    if ctx.settings.include_year_cohorts {
        let years = &distribution.years;
        section.push(family(ctx, "Years", "UTXOs By Year Of Creation", years, false)?);
    }

    section.push(amounts(ctx, "UTXO Sizes", "UTXOs", &distribution.utxo_amounts)?);
    section.push(family(ctx, "Types", "UTXOs By Output Type", &distribution.types, false)?);

    if ctx.settings.include_address_cohorts {
        section.push(amounts(ctx, "Address Balances", "Addresses", &distribution.addr_amounts)?);
    }

    Ok(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::OptionsSettings;
    use crate::config::{Color, DEFAULT_SETTINGS, PALETTE, Palette};
    use crate::domain::{ChartOption, OptionsNode};
    use crate::models::MetricsTree;
    use crate::utils::tree_walk::walk;

    fn names(group: &OptionsGroup) -> Vec<&str> {
        group.tree.iter().map(|n| n.name()).collect()
    }

    #[test]
    fn families_in_menu_order() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let section = build(&ctx).unwrap();
        assert_eq!(
            names(&section),
            vec![
                "All",
                "Terms",
                "Up To",
                "From",
                "Age Ranges",
                "Epochs",
                "Years",
                "UTXO Sizes",
                "Types",
                "Address Balances"
            ]
        );
    }

    #[test]
    fn family_starts_with_compare() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let terms = family(&ctx, "Terms", "Terms", &metrics.distribution.terms, true).unwrap();
        assert_eq!(names(&terms), vec!["Compare", "Short-Term", "Long-Term"]);
    }

    #[test]
    fn settings_drop_years_and_addresses() {
        let metrics = MetricsTree::new();
        let settings = OptionsSettings {
            include_year_cohorts: false,
            include_address_cohorts: false,
            ..DEFAULT_SETTINGS
        };
        let ctx = OptionsContext::new(&metrics, &PALETTE, &settings);
        let section = build(&ctx).unwrap();
        assert!(!names(&section).contains(&"Years"));
        assert!(!names(&section).contains(&"Address Balances"));
    }

    fn chart_at(group: &OptionsGroup, wanted: &str) -> ChartOption {
        let mut found = None;
        walk(&OptionsNode::Group(group.clone()), &mut |path, node| {
            if path.join("/") == wanted {
                found = node.as_chart().cloned();
            }
        });
        found.unwrap()
    }

    #[test]
    fn year_colors_follow_the_context_palette() {
        let metrics = MetricsTree::new();
        let gray = Palette {
            rotation: &[Color::Gray],
            ..PALETTE
        };
        let ctx = OptionsContext::new(&metrics, &gray, &DEFAULT_SETTINGS);
        let years = family(&ctx, "Years", "Years", &metrics.distribution.years, false).unwrap();

        let compare = chart_at(&years, "Years/Compare/Holdings/UTXO Count");
        assert_eq!(compare.bottom.len(), metrics.distribution.years.len());
        assert!(compare.bottom.iter().all(|s| s.color == Some(Color::Gray.into())));
        let single = chart_at(&years, "Years/2010/Holdings/Dominance");
        assert_eq!(single.bottom[0].color, Some(Color::Gray.into()));
    }
}
