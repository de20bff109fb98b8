//! The serialized form handed to the chart shell along with the palette.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{OPTIONS_VERSION, Palette};
use crate::domain::OptionsNode;

#[derive(Debug, Serialize)]
pub struct OptionsDocument<'a> {
    pub version: u32,
    /// Palette key to hex color
    pub palette: BTreeMap<String, &'static str>,
    pub tree: &'a [OptionsNode],
}

impl<'a> OptionsDocument<'a> {
    pub fn new(palette: &Palette, tree: &'a [OptionsNode]) -> Self {
        Self {
            version: OPTIONS_VERSION,
            palette: palette.to_table(),
            tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PALETTE;

    #[test]
    fn document_carries_version_and_hex_table() {
        let tree = vec![OptionsNode::table("Table", "Metrics Table")];
        let value = serde_json::to_value(OptionsDocument::new(&PALETTE, &tree)).unwrap();
        assert_eq!(value["version"], OPTIONS_VERSION);
        assert_eq!(value["palette"]["orange"], PALETTE.hex(crate::config::Color::Orange).unwrap());
        assert_eq!(value["tree"][0]["kind"], "table");
    }
}
