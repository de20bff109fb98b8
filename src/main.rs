#[cfg(not(target_arch = "wasm32"))]
use bitview_options::{
    Cli, MetricCatalog, OptionsDocument, OptionsNode, PALETTE, build_options, build_section,
};

// The library exports `options_json` for the browser; the binary has nothing to run there.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;

    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);
    let settings = args.settings().context("Invalid settings")?;

    // C. Build
    let tree = match &args.section {
        Some(name) => build_section(&settings, name),
        None => build_options(&settings),
    }
    .context("Failed to build the options tree")?;
    bitview_options::utils::validate_tree(&tree).context("Built tree is malformed")?;

    // D. Catalog check
    if let Some(path) = &args.catalog {
        check_catalog(&tree, path, args.strict)?;
    }

    // E. Write
    let json = to_json(&tree, args.with_palette, args.pretty)?;
    match &args.output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(bitview_options::config::options_filename())
            } else {
                path.clone()
            };
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote options to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn to_json(tree: &[OptionsNode], with_palette: bool, pretty: bool) -> anyhow::Result<String> {
    let value = if with_palette {
        serde_json::to_value(OptionsDocument::new(&PALETTE, tree))?
    } else {
        serde_json::to_value(tree)?
    };
    Ok(if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn check_catalog(tree: &[OptionsNode], path: &std::path::Path, strict: bool) -> anyhow::Result<()> {
    use anyhow::Context;

    let catalog = MetricCatalog::from_file(path).context("Failed to load the metric catalog")?;
    let referenced = bitview_options::utils::metric_ids(tree);
    let missing = catalog.missing(referenced.iter());
    log::info!(
        "{} metrics referenced, {} served, {} missing",
        referenced.len(),
        catalog.len(),
        missing.len()
    );
    if bitview_options::config::PRINT_MISSING_METRICS {
        for metric in &missing {
            log::warn!("Missing metric: {}", metric);
        }
    }
    if strict && !missing.is_empty() {
        anyhow::bail!("{} referenced metrics are not served by the backend", missing.len());
    }
    Ok(())
}
