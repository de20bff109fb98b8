//! Flat constant series used as guide lines (0, 1, 50, 100...).

use crate::domain::{OptionsError, Result};
use crate::models::MetricId;

/// Values the backend serves as `constant_<value>`
const VALUES: &[f64] = &[
    -4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 20.0, 30.0, 38.2, 50.0, 61.8, 70.0, 80.0,
    100.0, 144.0, 600.0,
];

pub struct Constants {
    entries: Vec<(f64, MetricId)>,
}

/// `-1` gives `constant_minus_1`, `38.2` gives `constant_38_2`.
fn constant_name(value: f64) -> String {
    let text = format!("{}", value.abs()).replace('.', "_");
    if value < 0.0 {
        format!("constant_minus_{}", text)
    } else {
        format!("constant_{}", text)
    }
}

impl Constants {
    pub fn new() -> Self {
        Self {
            entries: VALUES
                .iter()
                .map(|value| (*value, MetricId::new(constant_name(*value))))
                .collect(),
        }
    }

    pub fn get(&self, value: f64) -> Result<&MetricId> {
        self.entries
            .iter()
            .find(|(v, _)| (v - value).abs() < f64::EPSILON)
            .map(|(_, metric)| metric)
            .ok_or_else(|| OptionsError::UnknownConstant(format!("{}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_names() {
        let constants = Constants::new();
        assert_eq!(constants.get(0.0).unwrap().as_str(), "constant_0");
        assert_eq!(constants.get(-1.0).unwrap().as_str(), "constant_minus_1");
        assert_eq!(constants.get(61.8).unwrap().as_str(), "constant_61_8");
    }

    #[test]
    fn unknown_constant_message() {
        let err = Constants::new().get(42.0).unwrap_err();
        assert_eq!(err.to_string(), "Unknown constant: 42");
    }
}
