//! The root menu: chart sections wrapped between the shell's own panels and links.

use crate::config::menu::{
    COMMUNITY, DONATE, EXPLORER, HOSTING, LinkFolder, SHARE, SIMULATIONS, TABLE, TOOLS,
};
use crate::domain::{OptionsError, OptionsGroup, OptionsNode, Result};
use crate::options::OptionsContext;
use crate::options::{chain, cohorts, cointime, investing, market, mining, network};

/// Top-level chart sections in menu order
pub const SECTIONS: &[&str] = &[
    "Market", "Chain", "Cohorts", "Cointime", "Mining", "Network", "Investing",
];

/// Builds one top-level chart section by its menu name.
pub fn section(ctx: &OptionsContext, name: &str) -> Result<OptionsGroup> {
    match name {
        "Market" => market::build(ctx),
        "Chain" => chain::build(ctx),
        "Cohorts" => cohorts::build(ctx),
        "Cointime" => cointime::build(ctx),
        "Mining" => mining::build(ctx),
        "Network" => network::build(ctx),
        "Investing" => investing::build(ctx),
        other => Err(OptionsError::UnknownSection(other.to_string())),
    }
}

fn link_folder(folder: &LinkFolder) -> OptionsGroup {
    OptionsGroup::new(folder.name).with_all(
        folder
            .links
            .iter()
            .map(|link| OptionsNode::url(link.name, link.title, link.url)),
    )
}

fn charts(ctx: &OptionsContext) -> Result<OptionsGroup> {
    let mut charts = OptionsGroup::new("Charts");
    for name in SECTIONS {
        let built = section(ctx, name)?;
        if crate::config::PRINT_SECTION_SUMMARY {
            log::info!("Section {}: {} entries", name, built.tree.len());
        }
        charts.push(built);
    }
    Ok(charts)
}

/// The whole menu, in display order.
pub fn build_options(ctx: &OptionsContext) -> Result<Vec<OptionsNode>> {
    if crate::config::PRINT_SETTINGS {
        log::info!("Building options with {:?}", ctx.settings);
    }

    let charts = OptionsNode::from(charts(ctx)?);
    if !ctx.settings.include_non_chart_entries {
        return Ok(vec![charts]);
    }

    let mut root = vec![OptionsNode::explorer(EXPLORER.name, EXPLORER.title), charts];
    root.push(OptionsNode::table(TABLE.name, TABLE.title));
    root.push(
        OptionsGroup::new("Simulations")
            .with_all(
                SIMULATIONS
                    .iter()
                    .map(|panel| OptionsNode::simulation(panel.name, panel.title)),
            )
            .into(),
    );
    root.extend(
        [&TOOLS, &HOSTING, &COMMUNITY].map(|folder| OptionsNode::from(link_folder(folder))),
    );
    root.extend(
        [&DONATE, &SHARE].map(|link| OptionsNode::url(link.name, link.title, link.url)),
    );
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::OptionsSettings;
    use crate::config::{DEFAULT_SETTINGS, PALETTE};
    use crate::models::MetricsTree;

    #[test]
    fn root_menu_order() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        let root = build_options(&ctx).unwrap();
        let names: Vec<_> = root.iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec![
                "Explorer",
                "Charts",
                "Table",
                "Simulations",
                "Tools",
                "Hosting",
                "Community",
                "Donate",
                "Share"
            ]
        );
        let charts = root[1].as_group().unwrap();
        let sections: Vec<_> = charts.tree.iter().map(|n| n.name()).collect();
        assert_eq!(sections, SECTIONS);
    }

    #[test]
    fn charts_only_without_links() {
        let metrics = MetricsTree::new();
        let settings = OptionsSettings {
            include_non_chart_entries: false,
            ..DEFAULT_SETTINGS
        };
        let ctx = OptionsContext::new(&metrics, &PALETTE, &settings);
        let root = build_options(&ctx).unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root[0].name(), "Charts");
    }

    #[test]
    fn unknown_section_is_an_error() {
        let metrics = MetricsTree::new();
        let ctx = OptionsContext::new(&metrics, &PALETTE, &DEFAULT_SETTINGS);
        assert!(matches!(
            section(&ctx, "Lightning"),
            Err(OptionsError::UnknownSection(name)) if name == "Lightning"
        ));
    }
}
