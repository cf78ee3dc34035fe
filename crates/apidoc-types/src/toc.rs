//! Table of Contents (TOC) types for generated API documentation.
//!
//! A TOC document is a mapping with a single `toc` key holding the ordered
//! list of navigation items:
//!
//! ```json
//! {"toc": [{"title": "tf.keras.Model", "path": "/api/tf/keras/Model"}]}
//! ```
//!
//! Items are either page entries (a dotted `title` plus opaque payload) or
//! section headings synthesized by the sectioning pass.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A page entry in the TOC.
///
/// Only `title` is interpreted. Every other key (`path`, `status`, nested
/// `section` lists, ...) is carried in `extra` and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TocEntry {
    /// Dotted title, e.g. `tf.keras.Model`. A `null` title is rejected.
    #[serde(
        default,
        deserialize_with = "deserialize_title",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    /// Opaque payload used by downstream rendering
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A present `title` must be a string; only a missing key means untitled.
fn deserialize_title<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl TocEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            extra: Map::new(),
        }
    }

    /// An entry without a `title` key.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Attach an opaque payload field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The title, or `""` when the entry has none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// A section heading, rendered as `{"heading": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Heading {
    pub heading: String,
}

impl Heading {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }
}

/// One item of a TOC: a heading or a page entry.
///
/// Headings are tried first; only a mapping holding nothing but a `heading`
/// key is read back as a heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TocItem {
    Heading(Heading),
    Entry(TocEntry),
}

impl TocItem {
    pub fn heading(heading: impl Into<String>) -> Self {
        TocItem::Heading(Heading::new(heading))
    }

    pub fn entry(title: impl Into<String>) -> Self {
        TocItem::Entry(TocEntry::new(title))
    }

    /// Title used for prefix matching. Headings have none.
    pub fn title(&self) -> &str {
        match self {
            TocItem::Heading(_) => "",
            TocItem::Entry(entry) => entry.title(),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, TocItem::Heading(_))
    }

    pub fn as_entry(&self) -> Option<&TocEntry> {
        match self {
            TocItem::Entry(entry) => Some(entry),
            TocItem::Heading(_) => None,
        }
    }
}

/// A TOC document.
///
/// A document without a `toc` key reads as an empty TOC; serialization
/// always writes the key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Toc {
    #[serde(rename = "toc", default)]
    items: Vec<TocItem>,
}

impl Toc {
    pub fn new(items: Vec<TocItem>) -> Self {
        Self { items }
    }

    /// Items in rendered page order.
    pub fn items(&self) -> &[TocItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<TocItem> {
        self.items
    }

    /// Page entries, skipping headings.
    pub fn entries(&self) -> impl Iterator<Item = &TocEntry> {
        self.items.iter().filter_map(TocItem::as_entry)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Deserialize from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<TocItem> for Toc {
    fn from_iter<I: IntoIterator<Item = TocItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<TocEntry> for Toc {
    fn from_iter<I: IntoIterator<Item = TocEntry>>(iter: I) -> Self {
        iter.into_iter().map(TocItem::Entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_toc_key_reads_as_empty() {
        let toc = Toc::from_json_str(r#"{"other": 1}"#).unwrap();
        assert!(toc.is_empty());
        assert_eq!(toc.to_json_string().unwrap().replace(char::is_whitespace, ""), r#"{"toc":[]}"#);
    }

    #[test]
    fn test_entry_payload_passes_through() {
        let json = r#"{"toc": [
            {"title": "tf.keras.Model", "path": "/api/tf/keras/Model", "status": "deprecated"}
        ]}"#;
        let toc = Toc::from_json_str(json).unwrap();
        let entry = toc.entries().next().unwrap();

        assert_eq!(entry.title(), "tf.keras.Model");
        assert_eq!(entry.extra["path"], json!("/api/tf/keras/Model"));
        assert_eq!(entry.extra["status"], json!("deprecated"));

        let decoded = Toc::from_json_str(&toc.to_json_string().unwrap()).unwrap();
        assert_eq!(decoded, toc);
    }

    #[test]
    fn test_payload_key_order_is_kept() {
        let json = r#"{"toc": [
            {"path": "/api/tf/nn", "title": "tf.nn.relu", "status": "new", "section": [{"z": 1, "a": 2}]}
        ]}"#;
        let toc = Toc::from_json_str(json).unwrap();

        let keys: Vec<&str> = toc.items()[0]
            .as_entry()
            .unwrap()
            .extra
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["path", "status", "section"]);

        assert_eq!(
            serde_json::to_string(&toc).unwrap(),
            r#"{"toc":[{"title":"tf.nn.relu","path":"/api/tf/nn","status":"new","section":[{"z":1,"a":2}]}]}"#
        );
    }

    #[test]
    fn test_null_title_is_rejected() {
        assert!(Toc::from_json_str(r#"{"toc": [{"title": null, "path": "/x"}]}"#).is_err());
        assert!(Toc::from_json_str(r#"{"toc": [{"title": 3}]}"#).is_err());
    }

    #[test]
    fn test_untitled_entry() {
        let toc = Toc::from_json_str(r#"{"toc": [{"path": "/index"}]}"#).unwrap();
        let item = &toc.items()[0];
        assert!(!item.is_heading());
        assert_eq!(item.title(), "");
        assert_eq!(item.as_entry().unwrap().title, None);
    }

    #[test]
    fn test_heading_round_trip() {
        let toc = Toc::new(vec![TocItem::heading("Keras"), TocItem::entry("keras.Model")]);
        let value = serde_json::to_value(&toc).unwrap();
        assert_eq!(
            value,
            json!({"toc": [{"heading": "Keras"}, {"title": "keras.Model"}]})
        );

        let decoded: Toc = serde_json::from_value(value).unwrap();
        assert!(decoded.items()[0].is_heading());
        assert_eq!(decoded.entries().count(), 1);
    }

    #[test]
    fn test_heading_key_with_payload_is_an_entry() {
        let toc = Toc::from_json_str(r#"{"toc": [{"heading": "x", "path": "/x"}]}"#).unwrap();
        assert!(!toc.items()[0].is_heading());
        assert_eq!(toc.items()[0].title(), "");
    }

    #[test]
    fn test_entry_builder() {
        let entry = TocEntry::new("tf.nn.relu").with_field("path", "/api/tf/nn/relu");
        assert_eq!(entry.title(), "tf.nn.relu");
        assert_eq!(entry.extra.len(), 1);
        assert_eq!(TocEntry::untitled().title(), "");
    }
}
