//! Whole-tree properties of the generated menu.

use bitview_options::config::Color;
use bitview_options::config::settings::{CohortSections, OptionsSettings};
use bitview_options::domain::{OptionsNode, Unit};
use bitview_options::models::patterns::{StatKey, keys};
use bitview_options::models::{MetricId, StatsPattern, ValuePattern};
use bitview_options::options::helpers::{from_stats_pattern, from_sum_stats_pattern, sats_btc_usd};
use bitview_options::utils::{metric_ids, validate_tree, walk_all};
use bitview_options::{DEFAULT_SETTINGS, build_options};

fn default_tree() -> Vec<OptionsNode> {
    build_options(&DEFAULT_SETTINGS).unwrap()
}

fn paths(tree: &[OptionsNode]) -> Vec<(String, String)> {
    let mut paths = Vec::new();
    walk_all(tree, &mut |path, node| {
        let title = match node {
            OptionsNode::Chart(chart) => chart.title.clone(),
            _ => String::new(),
        };
        paths.push((path.join("/"), title));
    });
    paths
}

#[test]
fn every_leaf_is_a_chart_or_a_known_entry() {
    let tree = default_tree();
    validate_tree(&tree).unwrap();

    walk_all(&tree, &mut |path, node| match node {
        OptionsNode::Chart(chart) => {
            assert!(!chart.is_empty(), "empty chart at {}", path.join("/"))
        }
        OptionsNode::Group(group) => {
            assert!(!group.tree.is_empty(), "empty group at {}", path.join("/"))
        }
        OptionsNode::Explorer(_)
        | OptionsNode::Table(_)
        | OptionsNode::Simulation(_)
        | OptionsNode::Url(_) => {}
    });
}

#[test]
fn trimmed_settings_still_give_a_valid_tree() {
    let settings = OptionsSettings {
        include_year_cohorts: false,
        include_address_cohorts: false,
        include_pool_folders: false,
        include_non_chart_entries: false,
        cohort_sections: CohortSections::parse_list("holdings,prices").unwrap(),
    };
    let tree = build_options(&settings).unwrap();
    validate_tree(&tree).unwrap();
    assert!(paths(&tree).len() < paths(&default_tree()).len());
}

#[test]
fn rebuilds_are_identical() {
    let first = default_tree();
    let second = default_tree();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(paths(&first), paths(&second));
}

#[test]
fn serialized_tree_has_no_nulls() {
    let json = serde_json::to_string(&default_tree()).unwrap();
    assert!(!json.contains("null"));
    assert!(json.contains(r#""kind":"chart""#));
    assert!(json.contains(r#""kind":"url""#));
}

#[test]
fn sats_btc_usd_fans_out_three_denominations() {
    let pattern = ValuePattern::new(&MetricId::new("supply"));
    let series = sats_btc_usd(&pattern, "X", Some(Color::Orange));
    assert_eq!(series.len(), 3);
    assert_eq!(
        series.iter().map(|s| s.unit).collect::<Vec<_>>(),
        vec![Unit::Sats, Unit::Btc, Unit::Usd]
    );
    assert!(series.iter().all(|s| s.title == "X" && s.color == series[0].color));
}

#[test]
fn stats_fan_out_counts_present_keys() {
    let stem = MetricId::new("tx_count");
    for set in [keys::ALL, keys::DISTRIBUTION, keys::SUM_CUM, keys::BASE_AVG] {
        let pattern = StatsPattern::with_keys(&stem, set);
        let series = from_stats_pattern(&pattern, "Count", Unit::Count, None);
        assert_eq!(series.len(), pattern.present().count());
    }
}

#[test]
fn sum_fan_out_ignores_missing_extremes() {
    let stem = MetricId::new("coinblocks_destroyed");
    let views = [StatKey::Sum, StatKey::Cumulative, StatKey::Average];
    let pattern = StatsPattern::with_keys(&stem, &views);
    let series = from_sum_stats_pattern(&pattern, "Destroyed", Unit::Count, None);
    assert_eq!(series.len(), 2);
    assert!(series.iter().all(|s| s.unit == Unit::Count));
}

#[test]
fn compare_folders_skip_single_cohort_extras() {
    let tree = default_tree();
    walk_all(&tree, &mut |path, node| {
        let path = path.join("/");
        let Some(chart) = node.as_chart() else { return };
        if !path.contains("/Compare/") {
            return;
        }
        for series in chart.series() {
            let metric = series.metric.as_str();
            assert!(
                !metric.ends_with("_30d_change") && !metric.contains("_sopr_7d_ema"),
                "{} in {}",
                metric,
                path
            );
        }
        let mut ids: Vec<_> = chart.series().map(|s| s.metric.clone()).collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count, "repeated series in {}", path);
    });
}

#[test]
fn single_cohort_folders_carry_extras() {
    let ids = metric_ids(&default_tree());
    for metric in ["sth_supply_30d_change", "lth_sopr_7d_ema", "sth_cost_basis_pct95"] {
        assert!(ids.contains(&MetricId::new(metric)), "{} missing", metric);
    }
}

#[test]
fn no_chart_repeats_a_legend_entry() {
    let tree = default_tree();
    walk_all(&tree, &mut |path, node| {
        let Some(chart) = node.as_chart() else { return };
        let mut seen = std::collections::HashSet::new();
        for series in chart.series() {
            let entry = format!("{} {:?} {:?}", series.title, series.unit, series.color);
            assert!(seen.insert(entry.clone()), "{} repeated in {}", entry, path.join("/"));
        }
    });
}

#[test]
fn network_velocity_draws_transaction_velocity() {
    let tree = default_tree();
    let mut drawn = Vec::new();
    walk_all(&tree, &mut |path, node| {
        if !path.join("/").ends_with("Network/Velocity") {
            return;
        }
        if let Some(chart) = node.as_chart() {
            drawn.extend(
                chart
                    .series()
                    .filter(|s| s.default_active)
                    .map(|s| s.metric.as_str().to_string()),
            );
        }
    });
    assert_eq!(drawn, vec!["tx_btc_velocity", "tx_usd_velocity"]);
}
