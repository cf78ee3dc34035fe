//! TOC reorganization for generated API documentation.
//!
//! Provides:
//! - Priority sorting of TOC entries by package label (`sort_toc`)
//! - Sectioning by first-level sub-package with headings (`add_package_headings`)
//!
//! Both operations are pure: they take a borrowed `Toc` and return a new one.

pub mod headings;
pub mod sort;

pub use headings::add_package_headings;
pub use sort::sort_toc;
