use crate::config::palette::{Color, Hue, Palette};
use crate::config::settings::OptionsSettings;
use crate::domain::{LineStyle, Result, SeriesBlueprint, Unit, line};
use crate::models::{MetricId, MetricsTree};

/// Everything a builder reads: the metric client, the palette and the settings.
#[derive(Clone, Copy)]
pub struct OptionsContext<'a> {
    pub metrics: &'a MetricsTree,
    pub palette: &'a Palette,
    pub settings: &'a OptionsSettings,
}

impl<'a> OptionsContext<'a> {
    pub fn new(
        metrics: &'a MetricsTree,
        palette: &'a Palette,
        settings: &'a OptionsSettings,
    ) -> Self {
        Self {
            metrics,
            palette,
            settings,
        }
    }

    /// A list entry's color under this context's palette.
    pub fn color(&self, hue: Hue) -> Color {
        self.palette.resolve(hue)
    }

    pub fn constant(&self, value: f64) -> Result<&'a MetricId> {
        self.metrics.constants.get(value)
    }

    /// Gray dashed guide line at `value`.
    pub fn constant_line(&self, value: f64, unit: Unit) -> Result<SeriesBlueprint> {
        Ok(line(self.constant(value)?, format!("{}", value), unit)
            .color(Color::Gray)
            .style(LineStyle::Dashed)
            .without_last_value())
    }

    pub fn constant_lines(&self, values: &[f64], unit: Unit) -> Result<Vec<SeriesBlueprint>> {
        values
            .iter()
            .map(|value| self.constant_line(*value, unit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::domain::OptionsError;

    #[test]
    fn constant_line_is_a_dashed_guide() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let guide = ctx.constant_line(1.0, Unit::Ratio).unwrap();
        assert_eq!(guide.metric.as_str(), "constant_1");
        assert_eq!(guide.options.line_style, Some(LineStyle::Dashed));
        assert_eq!(guide.options.last_value_visible, Some(false));
    }

    #[test]
    fn unknown_constant_propagates() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        assert_eq!(
            ctx.constant_lines(&[0.0, 7.0], Unit::Ratio),
            Err(OptionsError::UnknownConstant("7".to_string()))
        );
    }
}
