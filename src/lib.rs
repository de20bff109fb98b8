#![allow(clippy::const_is_empty)]
#![allow(clippy::new_without_default)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod config;
pub mod domain;
pub mod models;
pub mod options;
pub mod utils;

// Re-export commonly used types
pub use config::{DEFAULT_SETTINGS, OptionsSettings, PALETTE, Palette};
pub use domain::{OptionsDocument, OptionsError, OptionsNode, Result};
pub use models::{MetricCatalog, MetricsTree};
pub use options::{OptionsContext, SECTIONS};

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

use config::CohortSections;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Write the tree to this file (or to options_v<N>.json inside this directory)
    /// instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// JSON array of the metric ids a backend serves; referenced ids missing from it are reported
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Fail instead of warning when the catalog lacks referenced metrics
    #[arg(long, default_value_t = false, requires = "catalog")]
    pub strict: bool,

    /// Wrap the tree in a document carrying the version and the palette's hex table
    #[arg(long, default_value_t = false)]
    pub with_palette: bool,

    /// Emit a single top-level chart section (Market, Chain, Cohorts...)
    #[arg(long)]
    pub section: Option<String>,

    /// Skip the per year cohorts
    #[arg(long, default_value_t = false)]
    pub no_years: bool,

    /// Skip address balance cohorts and per type address counts
    #[arg(long, default_value_t = false)]
    pub no_addresses: bool,

    /// Skip the per pool folders
    #[arg(long, default_value_t = false)]
    pub no_pools: bool,

    /// Skip the explorer, table, simulations and outbound links
    #[arg(long, default_value_t = false)]
    pub no_links: bool,

    /// Comma separated cohort sections to emit
    /// (holdings,valuation,prices,cost-basis,profitability,activity)
    #[arg(long)]
    pub cohort_sections: Option<String>,
}

impl Cli {
    /// Default settings with the command line switches applied.
    pub fn settings(&self) -> Result<OptionsSettings> {
        let cohort_sections = match &self.cohort_sections {
            Some(list) => CohortSections::parse_list(list)?,
            None => DEFAULT_SETTINGS.cohort_sections,
        };
        Ok(OptionsSettings {
            include_year_cohorts: !self.no_years,
            include_address_cohorts: !self.no_addresses,
            include_pool_folders: !self.no_pools,
            include_non_chart_entries: !self.no_links,
            cohort_sections,
        })
    }
}

/// Builds the whole menu against the default metric tree and palette.
pub fn build_options(settings: &OptionsSettings) -> Result<Vec<OptionsNode>> {
    let metrics = MetricsTree::new();
    let ctx = OptionsContext::new(&metrics, &PALETTE, settings);
    options::build_options(&ctx)
}

/// Builds one top-level chart section by its menu name.
pub fn build_section(settings: &OptionsSettings, name: &str) -> Result<Vec<OptionsNode>> {
    let metrics = MetricsTree::new();
    let ctx = OptionsContext::new(&metrics, &PALETTE, settings);
    Ok(vec![options::section(&ctx, name)?.into()])
}

/// Serialized default tree for the browser shell.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn options_json() -> std::result::Result<String, wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    let to_js = |e: &dyn std::fmt::Display| wasm_bindgen::JsValue::from_str(&e.to_string());
    let tree = build_options(&DEFAULT_SETTINGS).map_err(|e| to_js(&e))?;
    serde_json::to_string(&OptionsDocument::new(&PALETTE, &tree)).map_err(|e| to_js(&e))
}
