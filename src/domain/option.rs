//! Navigation tree nodes.

use serde::{Deserialize, Serialize};

use crate::domain::SeriesBlueprint;

/// One navigable chart: an optional price pane on top and an optional pane below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartOption {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top: Vec<SeriesBlueprint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bottom: Vec<SeriesBlueprint>,
}

impl ChartOption {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            top: Vec::new(),
            bottom: Vec::new(),
        }
    }

    pub fn top(mut self, series: impl IntoIterator<Item = SeriesBlueprint>) -> Self {
        self.top.extend(series);
        self
    }

    pub fn bottom(mut self, series: impl IntoIterator<Item = SeriesBlueprint>) -> Self {
        self.bottom.extend(series);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    pub fn series(&self) -> impl Iterator<Item = &SeriesBlueprint> {
        self.top.iter().chain(self.bottom.iter())
    }
}

/// Non-chart panel handled by the shell itself (explorer, table, simulation).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelOption {
    pub name: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOption {
    pub name: String,
    pub title: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionsGroup {
    pub name: String,
    pub tree: Vec<OptionsNode>,
}

impl OptionsGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tree: Vec::new(),
        }
    }

    /// Appends a node, dropping empty charts and empty groups.
    pub fn with(mut self, node: impl Into<OptionsNode>) -> Self {
        self.push(node);
        self
    }

    pub fn with_all(mut self, nodes: impl IntoIterator<Item = OptionsNode>) -> Self {
        for node in nodes {
            self.push(node);
        }
        self
    }

    pub fn push(&mut self, node: impl Into<OptionsNode>) {
        let node = node.into();
        if !node.is_empty() {
            self.tree.push(node);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OptionsNode {
    Group(OptionsGroup),
    Chart(ChartOption),
    Explorer(PanelOption),
    Table(PanelOption),
    Simulation(PanelOption),
    Url(UrlOption),
}

impl OptionsNode {
    pub fn name(&self) -> &str {
        match self {
            OptionsNode::Group(group) => &group.name,
            OptionsNode::Chart(chart) => &chart.name,
            OptionsNode::Explorer(panel)
            | OptionsNode::Table(panel)
            | OptionsNode::Simulation(panel) => &panel.name,
            OptionsNode::Url(url) => &url.name,
        }
    }

    /// Charts without series and groups without children carry nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            OptionsNode::Group(group) => group.is_empty(),
            OptionsNode::Chart(chart) => chart.is_empty(),
            _ => false,
        }
    }

    pub fn as_group(&self) -> Option<&OptionsGroup> {
        match self {
            OptionsNode::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_chart(&self) -> Option<&ChartOption> {
        match self {
            OptionsNode::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn explorer(name: &str, title: &str) -> Self {
        OptionsNode::Explorer(PanelOption {
            name: name.to_string(),
            title: title.to_string(),
        })
    }

    pub fn table(name: &str, title: &str) -> Self {
        OptionsNode::Table(PanelOption {
            name: name.to_string(),
            title: title.to_string(),
        })
    }

    pub fn simulation(name: &str, title: &str) -> Self {
        OptionsNode::Simulation(PanelOption {
            name: name.to_string(),
            title: title.to_string(),
        })
    }

    pub fn url(name: &str, title: &str, url: &str) -> Self {
        OptionsNode::Url(UrlOption {
            name: name.to_string(),
            title: title.to_string(),
            url: url.to_string(),
        })
    }
}

impl From<OptionsGroup> for OptionsNode {
    fn from(group: OptionsGroup) -> Self {
        OptionsNode::Group(group)
    }
}

impl From<ChartOption> for OptionsNode {
    fn from(chart: ChartOption) -> Self {
        OptionsNode::Chart(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Unit, line};
    use crate::models::MetricId;

    #[test]
    fn empty_nodes_are_dropped() {
        let metric = MetricId::new("difficulty");
        let group = OptionsGroup::new("Mining")
            .with(ChartOption::new("Empty", "Nothing"))
            .with(OptionsGroup::new("Empty group"))
            .with(
                ChartOption::new("Difficulty", "Difficulty")
                    .bottom([line(&metric, "Difficulty", Unit::Difficulty)]),
            );
        assert_eq!(group.tree.len(), 1);
        assert_eq!(group.tree[0].name(), "Difficulty");
    }

    #[test]
    fn nodes_are_tagged_by_kind() {
        let node = OptionsNode::url("GitHub", "Source code", "https://github.com");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["kind"], "url");
        let group = serde_json::to_value(OptionsNode::from(OptionsGroup::new("x"))).unwrap();
        assert_eq!(group["kind"], "group");
        assert_eq!(group["tree"], serde_json::json!([]));
    }

    #[test]
    fn chart_round_trips_through_json() {
        let metric = MetricId::new("tx_count_sum");
        let chart: OptionsNode = ChartOption::new("Count", "Transaction Count")
            .bottom([line(&metric, "Sum", Unit::Count)])
            .into();
        let text = serde_json::to_string(&chart).unwrap();
        let back: OptionsNode = serde_json::from_str(&text).unwrap();
        assert_eq!(back, chart);
    }
}
