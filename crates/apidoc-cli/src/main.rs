//! API docs TOC tool
//!
//! Reorganizes the flat TOC of generated API docs into per-package sections.
//!
//! # Usage
//!
//! ```bash
//! apidoc-toc sort --input _toc.json [--label tf.keras]...
//! apidoc-toc headings --input _toc.json --root-pkg tf [--label tf.keras=Keras]...
//! apidoc-toc show-config
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/apidoc-toc/config.toml)
//! 3. Config file given with --config
//! 4. Environment variables (APIDOC_*)
//! 5. CLI flags

use anyhow::Result;

use apidoc_cli::{
    handle_headings, handle_sort, init_logging, label_map, load_settings, show_config, Cli,
    Commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let settings = load_settings(cli.config.as_deref(), cli.log_level.as_deref())?;
    init_logging(&settings.log_level)?;

    match cli.command {
        Commands::Sort { io, labels } => {
            handle_sort(&settings, &io, &labels)?;
        }
        Commands::Headings {
            io,
            root_pkgs,
            labels,
        } => {
            handle_headings(&settings, &io, root_pkgs, label_map(&labels))?;
        }
        Commands::ShowConfig => {
            print!("{}", show_config(&settings)?);
        }
    }

    Ok(())
}
