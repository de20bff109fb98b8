//! Configuration tables for the options generator.

pub mod cohorts;

mod debug; // Private: flags are read as crate::config::PRINT_*
pub use debug::*;

pub mod market;
pub mod menu;
pub mod palette;
pub mod persistence;
pub mod pools;
pub mod settings;

// Re-export commonly used items
pub use palette::{Color, ColorSpec, Hue, PALETTE, Palette};
pub use persistence::{OPTIONS_VERSION, options_filename};
pub use settings::{CohortSection, CohortSections, DEFAULT_SETTINGS, OptionsSettings};
