//! CLI argument parsing for the TOC tool.
//!
//! CLI flags override all other config sources.

use std::path::PathBuf;

use apidoc_types::{LabelMap, TocFormat};
use clap::{Args, Parser, Subcommand};

/// API docs TOC tool
///
/// Sorts generated API documentation TOCs by package and splits them into
/// per-package sections.
#[derive(Parser, Debug)]
#[command(name = "apidoc-toc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/apidoc-toc/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input/output options shared by the TOC commands
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// TOC document to read (.json or .toml)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the result (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, then output extension, then json)
    #[arg(short, long)]
    pub format: Option<TocFormat>,
}

/// TOC commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort TOC entries by package label priority
    Sort {
        #[command(flatten)]
        io: IoArgs,

        /// Label prefix, in priority order (default: configured label packages)
        #[arg(long = "label")]
        labels: Vec<String>,
    },

    /// Sort and split the TOC into sections with headings
    Headings {
        #[command(flatten)]
        io: IoArgs,

        /// Root package to strip and section by (repeatable)
        #[arg(short, long = "root-pkg")]
        root_pkgs: Vec<String>,

        /// Section label as PACKAGE=DISPLAY, in priority order (repeatable)
        #[arg(long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,
    },

    /// Print the effective configuration
    ShowConfig,
}

/// Parse a `PACKAGE=DISPLAY` label flag.
fn parse_label(s: &str) -> Result<(String, String), String> {
    let (package, label) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PACKAGE=DISPLAY, got '{s}'"))?;
    if package.is_empty() {
        return Err(format!("empty package in '{s}'"));
    }
    Ok((package.to_string(), label.to_string()))
}

/// Collect `--label` flags into a label map.
pub fn label_map(labels: &[(String, String)]) -> LabelMap {
    labels.iter().cloned().collect()
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
