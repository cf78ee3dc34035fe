//! Sectioning of a flat TOC by first-level package.
//!
//! Walks a label-sorted TOC once. Entries under a root package lose the
//! root prefix (`tf.keras.Model` -> `keras.Model`) and a heading is inserted
//! whenever the first remaining segment changes:
//!
//! ```text
//! tf.keras.Model        Keras
//! tf.keras.Layer   ->     keras.Model
//! tf.nn.relu              keras.Layer
//!                       NN
//!                         nn.relu
//! ```

use apidoc_types::{LabelMap, Toc, TocItem};
use tracing::{debug, trace};

use crate::sort::sort_toc;

/// Insert package headings into `toc`.
///
/// The TOC is first sorted with the packages of `labels` as priority. Then,
/// for every entry, each root package in `root_pkgs` is tried in order
/// against the entry's current title; a match strips the prefix (and any
/// leading dots), so a later root package sees the already stripped title.
/// The section is the first segment of the stripped title. When it differs
/// from the previous section a heading is emitted, labelled by
/// `labels["<root>.<section>"]` (or `labels["<root>"]` for an empty section)
/// and falling back to the section name itself. A title stripped down to
/// nothing becomes the bare root package.
///
/// Entries under no root package, and headings already in the input, pass
/// through unchanged and leave the current section alone.
pub fn add_package_headings<I, S>(toc: &Toc, root_pkgs: I, labels: &LabelMap) -> Toc
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let root_pkgs: Vec<S> = root_pkgs.into_iter().collect();
    let sorted = sort_toc(toc, labels.packages());

    let mut sectioned = Vec::with_capacity(sorted.len());
    let mut current_section: Option<String> = None;
    let mut headings = 0usize;

    for item in sorted.into_items() {
        let mut entry = match item {
            TocItem::Entry(entry) => entry,
            heading @ TocItem::Heading(_) => {
                sectioned.push(heading);
                continue;
            }
        };

        for root_pkg in &root_pkgs {
            let root_pkg = root_pkg.as_ref();
            let Some(rest) = entry.title().strip_prefix(root_pkg) else {
                continue;
            };
            let new_title = rest.trim_start_matches('.').to_string();
            let section = new_title.split('.').next().unwrap_or_default();

            if current_section.as_deref() != Some(section) {
                let section_pkg = if section.is_empty() {
                    root_pkg.to_string()
                } else {
                    format!("{root_pkg}.{section}")
                };
                let heading = labels.get(&section_pkg).unwrap_or(section);
                trace!(section_pkg = %section_pkg, heading, "New section");

                sectioned.push(TocItem::heading(heading));
                headings += 1;
                current_section = Some(section.to_string());
            }

            entry.title = Some(if new_title.is_empty() {
                root_pkg.to_string()
            } else {
                new_title
            });
        }

        sectioned.push(TocItem::Entry(entry));
    }

    debug!(
        entries = toc.len(),
        headings,
        root_packages = root_pkgs.len(),
        "Added package headings"
    );
    Toc::new(sectioned)
}
