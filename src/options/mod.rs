// Builders: metric patterns in, navigation tree out
pub mod chain;
pub mod cohorts;
pub mod cointime;
pub mod context;
pub mod distribution;
pub mod helpers;
pub mod investing;
pub mod market;
pub mod mining;
pub mod network;
pub mod partial;

pub use context::OptionsContext;
pub use partial::{SECTIONS, build_options, section};
