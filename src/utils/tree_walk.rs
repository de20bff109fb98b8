//! Walking, checking and measuring a built options tree.

use std::collections::BTreeSet;

use itertools::Itertools;
use serde::Serialize;

use crate::domain::{OptionsError, OptionsNode, Result};
use crate::models::MetricId;

/// Visits `node` and every descendant, depth first, with the names leading to it
/// (the visited node's own name included).
pub fn walk(node: &OptionsNode, visit: &mut impl FnMut(&[String], &OptionsNode)) {
    let mut path = Vec::new();
    walk_from(node, &mut path, visit);
}

/// [`walk`] over each root entry in order.
pub fn walk_all(nodes: &[OptionsNode], visit: &mut impl FnMut(&[String], &OptionsNode)) {
    let mut path = Vec::new();
    for node in nodes {
        walk_from(node, &mut path, visit);
    }
}

fn walk_from(
    node: &OptionsNode,
    path: &mut Vec<String>,
    visit: &mut impl FnMut(&[String], &OptionsNode),
) {
    path.push(node.name().to_string());
    visit(path, node);
    if let OptionsNode::Group(group) = node {
        for child in &group.tree {
            walk_from(child, path, visit);
        }
    }
    path.pop();
}

fn malformed(path: &[String], reason: impl Into<String>) -> OptionsError {
    OptionsError::Malformed {
        path: path.join(" > "),
        reason: reason.into(),
    }
}

fn check_siblings(nodes: &[OptionsNode], path: &[String]) -> Result<()> {
    match nodes.iter().map(|node| node.name()).duplicates().next() {
        Some(name) => Err(malformed(path, format!("duplicate sibling name \"{}\"", name))),
        None => Ok(()),
    }
}

fn check_node(node: &OptionsNode, path: &mut Vec<String>) -> Result<()> {
    path.push(node.name().to_string());
    let checked = check_leaf_or_group(node, path);
    path.pop();
    checked
}

fn check_leaf_or_group(node: &OptionsNode, path: &mut Vec<String>) -> Result<()> {
    if node.name().trim().is_empty() {
        return Err(malformed(path, "empty name"));
    }
    match node {
        OptionsNode::Group(group) => {
            if group.tree.is_empty() {
                return Err(malformed(path, "empty group"));
            }
            check_siblings(&group.tree, path)?;
            for child in &group.tree {
                check_node(child, path)?;
            }
        }
        OptionsNode::Chart(chart) => {
            if chart.is_empty() {
                return Err(malformed(path, "chart without series"));
            }
            if let Some(series) = chart.series().find(|s| s.metric.as_str().is_empty()) {
                return Err(malformed(path, format!("series \"{}\" has no metric", series.title)));
            }
        }
        OptionsNode::Url(url) => {
            if url.url.trim().is_empty() {
                return Err(malformed(path, "blank url"));
            }
        }
        OptionsNode::Explorer(_) | OptionsNode::Table(_) | OptionsNode::Simulation(_) => {}
    }
    Ok(())
}

/// Every leaf is a chart with series or a known panel or link; names are set
/// and unique among siblings. Fails on the first violation found.
pub fn validate_tree(root: &[OptionsNode]) -> Result<()> {
    let mut path = Vec::new();
    check_siblings(root, &path)?;
    for node in root {
        check_node(node, &mut path)?;
    }
    Ok(())
}

/// Every metric referenced by the tree, sorted and distinct.
pub fn metric_ids(root: &[OptionsNode]) -> Vec<MetricId> {
    let mut ids = BTreeSet::new();
    walk_all(root, &mut |_, node| {
        if let Some(chart) = node.as_chart() {
            ids.extend(chart.series().map(|s| s.metric.clone()));
        }
    });
    ids.into_iter().collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub groups: usize,
    pub charts: usize,
    pub panels: usize,
    pub urls: usize,
    pub series: usize,
    pub metrics: usize,
}

impl TreeStats {
    pub fn of(nodes: &[OptionsNode]) -> Self {
        let mut stats = TreeStats::default();
        walk_all(nodes, &mut |_, node| match node {
            OptionsNode::Group(_) => stats.groups += 1,
            OptionsNode::Chart(chart) => {
                stats.charts += 1;
                stats.series += chart.series().count();
            }
            OptionsNode::Explorer(_) | OptionsNode::Table(_) | OptionsNode::Simulation(_) => {
                stats.panels += 1
            }
            OptionsNode::Url(_) => stats.urls += 1,
        });
        stats.metrics = metric_ids(nodes).len();
        stats
    }

    /// One entry per top-level chart section, found under the root "Charts" group
    /// or at the root itself when the tree holds a single section.
    pub fn per_section(root: &[OptionsNode]) -> Vec<(String, TreeStats)> {
        let sections = root
            .iter()
            .find(|node| node.name() == "Charts")
            .and_then(|node| node.as_group())
            .map_or(root, |charts| charts.tree.as_slice());
        sections
            .iter()
            .map(|section| {
                let stats = TreeStats::of(std::slice::from_ref(section));
                (section.name().to_string(), stats)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChartOption, OptionsGroup, Unit, line};

    fn chart(name: &str, metric: &str) -> ChartOption {
        ChartOption::new(name, name).bottom([line(&MetricId::new(metric), "x", Unit::Count)])
    }

    fn sample() -> Vec<OptionsNode> {
        vec![
            OptionsNode::explorer("Explorer", "Explorer"),
            OptionsGroup::new("Charts")
                .with(
                    OptionsGroup::new("Chain")
                        .with(chart("Count", "block_count"))
                        .with(chart("Size", "block_size")),
                )
                .with(OptionsGroup::new("Mining").with(chart("Difficulty", "difficulty")))
                .into(),
            OptionsNode::url("Share", "Share", "https://bitview.space"),
        ]
    }

    #[test]
    fn walk_reports_full_paths() {
        let mut paths = Vec::new();
        walk_all(&sample(), &mut |path, _| paths.push(path.join("/")));
        assert_eq!(
            paths,
            vec![
                "Explorer",
                "Charts",
                "Charts/Chain",
                "Charts/Chain/Count",
                "Charts/Chain/Size",
                "Charts/Mining",
                "Charts/Mining/Difficulty",
                "Share"
            ]
        );
    }

    #[test]
    fn valid_sample_passes() {
        assert_eq!(validate_tree(&sample()), Ok(()));
    }

    #[test]
    fn duplicate_siblings_are_rejected() {
        let root = vec![
            OptionsGroup::new("Chain")
                .with(chart("Count", "block_count"))
                .with(chart("Count", "tx_count"))
                .into(),
        ];
        let err = validate_tree(&root).unwrap_err();
        assert!(matches!(err, OptionsError::Malformed { ref path, .. } if path == "Chain"));
    }

    #[test]
    fn hand_built_empty_nodes_are_rejected() {
        let empty_group = vec![OptionsNode::Group(OptionsGroup::new("Nothing"))];
        assert!(validate_tree(&empty_group).is_err());

        let empty_chart = vec![OptionsNode::Chart(ChartOption::new("Blank", "Blank"))];
        assert!(validate_tree(&empty_chart).is_err());

        let blank_url = vec![OptionsNode::url("Link", "Link", " ")];
        assert!(validate_tree(&blank_url).is_err());
    }

    #[test]
    fn stats_count_every_kind() {
        let stats = TreeStats::of(&sample());
        assert_eq!(
            stats,
            TreeStats {
                groups: 3,
                charts: 3,
                panels: 1,
                urls: 1,
                series: 3,
                metrics: 3,
            }
        );
        let sections = TreeStats::per_section(&sample());
        let names: Vec<_> = sections.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Chain", "Mining"]);
        assert_eq!(sections[0].1.charts, 2);
    }

    #[test]
    fn metric_ids_are_sorted_and_distinct() {
        let root = vec![
            OptionsGroup::new("A")
                .with(chart("One", "b"))
                .with(chart("Two", "a"))
                .with(chart("Three", "b"))
                .into(),
        ];
        let ids: Vec<_> = metric_ids(&root).iter().map(|m| m.as_str().to_string()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
