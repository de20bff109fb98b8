//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so generated
//! output stays quiet in normal runs.

/// Emit a node/series count for each top-level section once it is built.
pub const PRINT_SECTION_SUMMARY: bool = false;

/// Emit which cohort variant and sections every cohort folder is built with.
pub const PRINT_COHORT_WIRING: bool = false;

/// List every metric missing from the catalog instead of just the count.
pub const PRINT_MISSING_METRICS: bool = true;

/// Emit the resolved builder settings before building.
pub const PRINT_SETTINGS: bool = false;
