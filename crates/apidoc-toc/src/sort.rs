//! Label-priority sorting of TOC entries.
//!
//! Each label claims, in its turn, the remaining entries whose title starts
//! with it, unless a longer label also matches the title. Longer labels
//! always win, whatever order the labels come in, so `tf` never takes an
//! entry that belongs under `tf.keras`. Anything left over keeps its order
//! at the end.

use apidoc_types::{Toc, TocItem};
use tracing::{debug, trace};

/// Reorder `toc` by `labels`.
///
/// Labels are processed in the order given. Groups keep the input order of
/// their entries and unmatched entries are appended last in input order.
/// Labels of equal length never outrank each other, so a repeated label only
/// claims entries on its first occurrence.
pub fn sort_toc<I, S>(toc: &Toc, labels: I) -> Toc
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let labels: Vec<S> = labels.into_iter().collect();
    let mut sorted = Vec::with_capacity(toc.len());
    let mut remaining: Vec<&TocItem> = toc.items().iter().collect();

    for label in &labels {
        let label = label.as_ref();
        let label_len = label.chars().count();
        let more_specific: Vec<&str> = labels
            .iter()
            .map(|l| l.as_ref())
            .filter(|l| l.chars().count() > label_len)
            .collect();

        let (matched, rest): (Vec<&TocItem>, Vec<&TocItem>) =
            remaining.into_iter().partition(|item| {
                let title = item.title();
                title.starts_with(label) && !more_specific.iter().any(|l| title.starts_with(*l))
            });

        trace!(label, matched = matched.len(), "Claimed entries for label");
        sorted.extend(matched.into_iter().cloned());
        remaining = rest;
    }

    debug!(
        labels = labels.len(),
        matched = sorted.len(),
        unmatched = remaining.len(),
        "Sorted TOC"
    );
    sorted.extend(remaining.into_iter().cloned());
    Toc::new(sorted)
}
