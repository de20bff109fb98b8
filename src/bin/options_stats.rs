use anyhow::{Context, Result};
use bitview_options::utils::TreeStats;
use bitview_options::{Cli, build_options};
use clap::Parser;

fn main() -> Result<()> {
    let args = Cli::parse();
    let settings = args.settings().context("Invalid settings")?;
    let tree = build_options(&settings).context("Failed to build the options tree")?;

    println!(
        "{:<12} {:>7} {:>7} {:>7} {:>7}",
        "section", "groups", "charts", "series", "metrics"
    );
    for (name, stats) in TreeStats::per_section(&tree) {
        print_row(&name, &stats);
    }
    let total = TreeStats::of(&tree);
    print_row("total", &total);
    println!("{} panels, {} links", total.panels, total.urls);
    Ok(())
}

fn print_row(name: &str, stats: &TreeStats) {
    println!(
        "{:<12} {:>7} {:>7} {:>7} {:>7}",
        name, stats.groups, stats.charts, stats.series, stats.metrics
    );
}
