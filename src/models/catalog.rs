//! Metric ids a backend instance actually serves.
//!
//! The catalog is a JSON array of names, as returned by the backend's metric list
//! endpoint. Checking a tree against it catches renamed or removed metrics before
//! the dashboard tries to fetch them.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::domain::{OptionsError, Result};
use crate::models::MetricId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricCatalog {
    ids: BTreeSet<MetricId>,
}

impl MetricCatalog {
    pub fn from_json(text: &str) -> Result<Self> {
        let ids: Vec<MetricId> =
            serde_json::from_str(text).map_err(|e| OptionsError::Catalog(e.to_string()))?;
        Ok(Self::from_ids(ids))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| OptionsError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    pub fn from_ids(ids: impl IntoIterator<Item = MetricId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, metric: &MetricId) -> bool {
        self.ids.contains(metric)
    }

    /// Referenced ids the backend does not serve, sorted.
    pub fn missing<'a>(
        &self,
        referenced: impl IntoIterator<Item = &'a MetricId>,
    ) -> Vec<&'a MetricId> {
        let mut missing: Vec<&MetricId> = referenced
            .into_iter()
            .filter(|metric| !self.contains(metric))
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reports_missing_ids_once() {
        let catalog = MetricCatalog::from_json(r#"["price_close", "supply"]"#).unwrap();
        let referenced = [
            MetricId::new("supply"),
            MetricId::new("sth_sopr"),
            MetricId::new("sth_sopr"),
            MetricId::new("price_close"),
        ];
        let missing = catalog.missing(referenced.iter());
        assert_eq!(missing, vec![&MetricId::new("sth_sopr")]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["a", "b", "a"]"#).unwrap();
        let catalog = MetricCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn rejects_non_array_json() {
        assert!(matches!(
            MetricCatalog::from_json(r#"{"a": 1}"#),
            Err(OptionsError::Catalog(_))
        ));
    }

    #[test]
    fn missing_file_is_a_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MetricCatalog::from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(OptionsError::Catalog(_))));
    }
}
