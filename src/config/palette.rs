//! Color palette shared by every builder.
//!
//! Builders only ever emit palette keys; the chart shell resolves them to hex values
//! (and can swap the table for a light theme without touching the options tree).

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::domain::OptionsError;

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Amber,
    Yellow,
    Avocado,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
    Gray,
    Default,
    Off,
}

/// A single color, or an `[up, down]` pair used by baseline series.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(Color),
    Pair([Color; 2]),
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Single(color)
    }
}

/// Color of a list entry: fixed by its definition, or picked by position from the
/// palette rotation when the tree is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hue {
    Fixed(Color),
    Rotating(usize),
}

impl From<Color> for Hue {
    fn from(color: Color) -> Self {
        Hue::Fixed(color)
    }
}

pub struct Palette {
    /// Key to hex value, in display order
    pub entries: &'static [(Color, &'static str)],
    /// Colors handed out to list entries without a fixed color (year classes, small pools)
    pub rotation: &'static [Color],
    /// Default baseline colors (above, below)
    pub up: Color,
    pub down: Color,
}

pub const PALETTE: Palette = Palette {
    entries: &[
        (Color::Red, "#e63636"),
        (Color::Orange, "#e67e22"),
        (Color::Amber, "#f0a30a"),
        (Color::Yellow, "#f5d20b"),
        (Color::Avocado, "#b1c43a"),
        (Color::Lime, "#84cc16"),
        (Color::Green, "#2fb558"),
        (Color::Emerald, "#10b981"),
        (Color::Teal, "#14b8a6"),
        (Color::Cyan, "#06b6d4"),
        (Color::Sky, "#0ea5e9"),
        (Color::Blue, "#3b82f6"),
        (Color::Indigo, "#6366f1"),
        (Color::Violet, "#8b5cf6"),
        (Color::Purple, "#a855f7"),
        (Color::Fuchsia, "#d946ef"),
        (Color::Pink, "#ec4899"),
        (Color::Rose, "#f43f5e"),
        (Color::Gray, "#71717a"),
        (Color::Default, "#e4e4e7"), // Foreground text color of the dark theme
        (Color::Off, "#3f3f46"),
    ],
    rotation: &[
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Lime,
        Color::Green,
        Color::Teal,
        Color::Cyan,
        Color::Blue,
        Color::Indigo,
        Color::Violet,
        Color::Fuchsia,
        Color::Pink,
        Color::Rose,
        Color::Amber,
        Color::Avocado,
        Color::Emerald,
        Color::Sky,
        Color::Purple,
    ],
    up: Color::Green,
    down: Color::Red,
};

impl Palette {
    /// Hex value of a key, `None` when the table leaves it out.
    pub fn hex(&self, color: Color) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == color)
            .map(|(_, hex)| *hex)
    }

    /// Color for the n-th entry of a list, wrapping around the rotation.
    /// An empty rotation hands out the foreground color.
    pub fn rotating(&self, index: usize) -> Color {
        match self.rotation.len() {
            0 => Color::Default,
            len => self.rotation[index % len],
        }
    }

    pub fn resolve(&self, hue: Hue) -> Color {
        match hue {
            Hue::Fixed(color) => color,
            Hue::Rotating(index) => self.rotating(index),
        }
    }

    /// Looks a color up by its palette key.
    pub fn lookup(&self, name: &str) -> Result<Color, OptionsError> {
        Color::from_str(name).map_err(|_| OptionsError::UnknownColor(name.to_string()))
    }

    /// Key to hex table, ordered by key, for shipping next to the tree.
    pub fn to_table(&self) -> BTreeMap<String, &'static str> {
        self.entries
            .iter()
            .map(|(color, hex)| (color.to_string(), *hex))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_color_has_a_hex_value() {
        for color in Color::iter() {
            assert!(
                PALETTE.entries.iter().any(|(c, _)| *c == color),
                "missing hex for {}",
                color
            );
        }
    }

    #[test]
    fn lookup_unknown_color_fails() {
        assert_eq!(PALETTE.lookup("orange").unwrap(), Color::Orange);
        assert_eq!(
            PALETTE.lookup("chartreuse"),
            Err(OptionsError::UnknownColor("chartreuse".to_string()))
        );
    }

    #[test]
    fn rotation_wraps() {
        let len = PALETTE.rotation.len();
        assert_eq!(PALETTE.rotating(0), PALETTE.rotating(len));
    }

    #[test]
    fn empty_rotation_falls_back_to_foreground() {
        let palette = Palette {
            rotation: &[],
            ..PALETTE
        };
        assert_eq!(palette.rotating(0), Color::Default);
        assert_eq!(palette.rotating(7), Color::Default);
        assert_eq!(palette.resolve(Hue::Fixed(Color::Sky)), Color::Sky);
    }

    #[test]
    fn rotating_hue_follows_the_palette() {
        let gray = Palette {
            rotation: &[Color::Gray],
            ..PALETTE
        };
        assert_eq!(gray.resolve(Hue::Rotating(3)), Color::Gray);
        assert_eq!(PALETTE.resolve(Hue::Rotating(1)), Color::Orange);
    }

    #[test]
    fn hex_is_none_for_keys_left_out() {
        let partial = Palette {
            entries: &[(Color::Red, "#e63636")],
            ..PALETTE
        };
        assert_eq!(partial.hex(Color::Red), Some("#e63636"));
        assert_eq!(partial.hex(Color::Blue), None);
    }

    #[test]
    fn pair_serializes_as_array() {
        let json = serde_json::to_string(&ColorSpec::Pair([PALETTE.up, PALETTE.down])).unwrap();
        assert_eq!(json, r#"["green","red"]"#);
        let single = serde_json::to_string(&ColorSpec::from(Color::Sky)).unwrap();
        assert_eq!(single, r#""sky""#);
    }
}
