//! TOC tool library exports.
//!
//! This crate provides the `apidoc-toc` binary.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (sort, headings, show-config)

pub mod cli;
pub mod commands;

pub use cli::{label_map, Cli, Commands, IoArgs};
pub use commands::{
    handle_headings, handle_sort, init_logging, load_settings, read_toc, show_config, write_toc,
};
