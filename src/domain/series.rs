//! Series blueprints: the leaves of the options tree.
//!
//! A blueprint ties one metric to the way it should be drawn. The chart widget
//! fetches `metric`, formats it with `unit` and paints it with `color`.
//! No validation happens here; handing a composite pattern's name to `line` is a caller bug.

use serde::{Deserialize, Serialize};

use crate::config::palette::{Color, ColorSpec};
use crate::domain::Unit;
use crate::models::MetricId;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Line,
    Baseline,
    Histogram,
    Candlestick,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
    LargeDashed,
    SparseDotted,
}

/// Rendering knobs forwarded untouched to the chart widget.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_markers_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_value_visible: Option<bool>,
}

impl SeriesOptions {
    pub fn is_empty(&self) -> bool {
        *self == SeriesOptions::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesBlueprint {
    #[serde(rename = "type", default)]
    pub kind: SeriesKind,
    pub metric: MetricId,
    pub title: String,
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
    #[serde(default = "default_active", skip_serializing_if = "is_active")]
    pub default_active: bool,
    #[serde(default, skip_serializing_if = "SeriesOptions::is_empty")]
    pub options: SeriesOptions,
}

fn default_active() -> bool {
    true
}

fn is_active(active: &bool) -> bool {
    *active
}

impl SeriesBlueprint {
    fn new(kind: SeriesKind, metric: &MetricId, title: impl Into<String>, unit: Unit) -> Self {
        Self {
            kind,
            metric: metric.clone(),
            title: title.into(),
            unit,
            color: None,
            default_active: true,
            options: SeriesOptions::default(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(ColorSpec::Single(color));
        self
    }

    pub fn maybe_color(self, color: Option<Color>) -> Self {
        match color {
            Some(color) => self.color(color),
            None => self,
        }
    }

    /// Up/down colors of a baseline series.
    pub fn colors(mut self, up: Color, down: Color) -> Self {
        self.color = Some(ColorSpec::Pair([up, down]));
        self
    }

    /// Listed in the legend but not drawn until toggled on.
    pub fn hidden(mut self) -> Self {
        self.default_active = false;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.default_active = active;
        self
    }

    pub fn style(mut self, style: LineStyle) -> Self {
        self.options.line_style = Some(style);
        self
    }

    /// Value separating the up and down areas of a baseline.
    pub fn base(mut self, value: f64) -> Self {
        self.options.base_value = Some(value);
        self
    }

    pub fn without_last_value(mut self) -> Self {
        self.options.last_value_visible = Some(false);
        self
    }
}

pub fn line(metric: &MetricId, title: impl Into<String>, unit: Unit) -> SeriesBlueprint {
    SeriesBlueprint::new(SeriesKind::Line, metric, title, unit)
}

/// Divergent series colored above/below `base` (0 unless changed).
pub fn baseline(metric: &MetricId, title: impl Into<String>, unit: Unit) -> SeriesBlueprint {
    SeriesBlueprint::new(SeriesKind::Baseline, metric, title, unit).base(0.0)
}

/// Markers only, no connecting line.
pub fn dots(metric: &MetricId, title: impl Into<String>, unit: Unit) -> SeriesBlueprint {
    let mut series = line(metric, title, unit);
    series.options.line_visible = Some(false);
    series.options.point_markers_visible = Some(true);
    series
}

pub fn dotted(metric: &MetricId, title: impl Into<String>, unit: Unit) -> SeriesBlueprint {
    line(metric, title, unit).style(LineStyle::Dotted)
}

/// A USD price line meant for the top pane, drawn over the candles.
pub fn price(metric: &MetricId, title: impl Into<String>) -> SeriesBlueprint {
    line(metric, title, Unit::Usd)
}

pub fn histogram(metric: &MetricId, title: impl Into<String>, unit: Unit) -> SeriesBlueprint {
    SeriesBlueprint::new(SeriesKind::Histogram, metric, title, unit)
}

pub fn candlestick(metric: &MetricId, title: impl Into<String>, unit: Unit) -> SeriesBlueprint {
    SeriesBlueprint::new(SeriesKind::Candlestick, metric, title, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metric() -> MetricId {
        MetricId::new("sth_sopr")
    }

    #[test]
    fn plain_line_serializes_minimal() {
        let value = serde_json::to_value(line(&metric(), "SOPR", Unit::Ratio)).unwrap();
        assert_eq!(
            value,
            json!({ "type": "line", "metric": "sth_sopr", "title": "SOPR", "unit": "ratio" })
        );
    }

    #[test]
    fn baseline_carries_base_and_pair() {
        let series = baseline(&metric(), "SOPR", Unit::Ratio)
            .base(1.0)
            .colors(Color::Green, Color::Red)
            .hidden();
        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(value["type"], "baseline");
        assert_eq!(value["options"]["baseValue"], 1.0);
        assert_eq!(value["color"], json!(["green", "red"]));
        assert_eq!(value["defaultActive"], false);
    }

    #[test]
    fn dots_and_dotted_differ_only_in_style_flags() {
        let dots = dots(&metric(), "x", Unit::Ratio);
        let dotted = dotted(&metric(), "x", Unit::Ratio);
        assert_eq!(dots.kind, SeriesKind::Line);
        assert_eq!(dots.options.line_visible, Some(false));
        assert_eq!(dotted.options.line_style, Some(LineStyle::Dotted));
        assert_eq!(dotted.options.line_visible, None);
    }

    #[test]
    fn deserializes_what_it_serializes() {
        let series = price(&MetricId::new("realized_price"), "Realized").color(Color::Orange);
        let text = serde_json::to_string(&series).unwrap();
        let back: SeriesBlueprint = serde_json::from_str(&text).unwrap();
        assert_eq!(back, series);
        assert!(back.default_active);
    }
}
