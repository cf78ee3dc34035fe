//! # apidoc-types
//!
//! Shared domain types for API documentation TOC processing.
//!
//! - `Toc`, `TocItem`, `TocEntry`, `Heading`: the navigation document
//! - `LabelMap`: ordered package -> display label mapping
//! - `TocFormat`: JSON/TOML document codecs
//! - `Settings`: layered configuration
//!
//! ## Usage
//!
//! ```rust
//! use apidoc_types::{Toc, TocItem};
//!
//! let toc = Toc::new(vec![TocItem::entry("tf.keras.Model")]);
//! assert_eq!(toc.items()[0].title(), "tf.keras.Model");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod labels;
pub mod toc;

pub use config::{default_config_path, Settings};
pub use error::TocError;
pub use format::TocFormat;
pub use labels::{Label, LabelMap};
pub use toc::{Heading, Toc, TocEntry, TocItem};
