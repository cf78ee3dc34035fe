//! Command implementations for the TOC tool.
//!
//! Handles:
//! - Loading layered settings and initialising logging
//! - Reading and writing TOC documents
//! - The sort, headings and show-config commands

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use apidoc_toc::{add_package_headings, sort_toc};
use apidoc_types::{LabelMap, Settings, Toc, TocFormat};
use tracing::{debug, info, warn};

use crate::cli::IoArgs;

/// Load settings and apply the global CLI overrides.
pub fn load_settings(config_path: Option<&str>, log_level: Option<&str>) -> Result<Settings> {
    let settings = Settings::load(config_path).context("Failed to load configuration")?;
    Ok(settings.with_log_level(log_level))
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so a TOC
/// written to stdout stays clean.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Read a TOC document, picking the format from the file extension.
pub fn read_toc(path: &Path) -> Result<Toc> {
    let format = TocFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read TOC file: {}", path.display()))?;
    let toc = format
        .parse(&content)
        .with_context(|| format!("Failed to parse TOC file: {}", path.display()))?;

    info!("Read {} TOC items from {}", toc.len(), path.display());
    Ok(toc)
}

/// Resolve the output format: flag, then config, then output extension,
/// then JSON.
pub fn output_format(io: &IoArgs, settings: &Settings) -> TocFormat {
    if let Some(format) = io.format.or(settings.output_format) {
        return format;
    }
    match io.output.as_deref().map(TocFormat::from_path) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            warn!("{}; writing JSON", e);
            TocFormat::Json
        }
        None => TocFormat::Json,
    }
}

/// Render `toc` and write it to the output file, or stdout when none is set.
pub fn write_toc(toc: &Toc, io: &IoArgs, settings: &Settings) -> Result<()> {
    let format = output_format(io, settings);
    let rendered = format.render(toc).context("Failed to render TOC")?;

    match &io.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write TOC file: {}", path.display()))?;
            info!("Wrote {} TOC items to {} ({})", toc.len(), path.display(), format);
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}

/// Sort the input TOC by label priority.
///
/// `labels` from the command line replace the configured label packages.
pub fn handle_sort(settings: &Settings, io: &IoArgs, labels: &[String]) -> Result<Toc> {
    let toc = read_toc(&io.input)?;

    let sorted = if labels.is_empty() {
        debug!("Sorting by {} configured labels", settings.labels.len());
        sort_toc(&toc, settings.labels.packages())
    } else {
        sort_toc(&toc, labels)
    };

    write_toc(&sorted, io, settings)?;
    Ok(sorted)
}

/// Sort the input TOC and insert package headings.
pub fn handle_headings(
    settings: &Settings,
    io: &IoArgs,
    root_pkgs: Vec<String>,
    labels: LabelMap,
) -> Result<Toc> {
    let settings = settings
        .clone()
        .with_root_packages(root_pkgs)
        .with_labels(labels);
    settings.validate()?;

    if settings.root_packages.is_empty() {
        warn!("No root packages configured; entries will only be sorted");
    }

    let toc = read_toc(&io.input)?;
    let sectioned = add_package_headings(&toc, &settings.root_packages, &settings.labels);

    info!(
        "Sectioned {} items into {} ({} headings)",
        toc.len(),
        sectioned.len(),
        sectioned.len() - toc.len()
    );
    write_toc(&sectioned, io, &settings)?;
    Ok(sectioned)
}

/// Render the effective settings as TOML.
pub fn show_config(settings: &Settings) -> Result<String> {
    toml::to_string(settings).context("Failed to render settings")
}
