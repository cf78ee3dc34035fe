//! Ordered package labels.
//!
//! A `LabelMap` maps dotted package prefixes (`tf.keras`) to the display
//! label used for their section heading (`Keras`). Its key order is also the
//! sort priority handed to the sorter, so it is kept in insertion order
//! rather than hashed.

use serde::{Deserialize, Serialize};

/// One package label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Dotted package prefix
    pub package: String,

    /// Display text for the package's heading
    pub label: String,
}

/// Insertion-ordered mapping from package to display label.
///
/// Serialized as a list of `{ package, label }` tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Label>", into = "Vec<Label>")]
pub struct LabelMap {
    labels: Vec<Label>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label. An existing package keeps its position and gets the
    /// new display text; the previous one is returned.
    pub fn insert(&mut self, package: impl Into<String>, label: impl Into<String>) -> Option<String> {
        let package = package.into();
        let label = label.into();
        match self.labels.iter_mut().find(|l| l.package == package) {
            Some(existing) => Some(std::mem::replace(&mut existing.label, label)),
            None => {
                self.labels.push(Label { package, label });
                None
            }
        }
    }

    /// Display label for a package.
    pub fn get(&self, package: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|l| l.package == package)
            .map(|l| l.label.as_str())
    }

    /// Packages in priority order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.package.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<Label>> for LabelMap {
    fn from(labels: Vec<Label>) -> Self {
        labels.into_iter().map(|l| (l.package, l.label)).collect()
    }
}

impl From<LabelMap> for Vec<Label> {
    fn from(map: LabelMap) -> Self {
        map.labels
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LabelMap::new();
        for (package, label) in iter {
            map.insert(package, label);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let labels: LabelMap = [("tf.nn", "NN"), ("tf", "TensorFlow"), ("tf.keras", "Keras")]
            .into_iter()
            .collect();
        let packages: Vec<_> = labels.packages().collect();
        assert_eq!(packages, vec!["tf.nn", "tf", "tf.keras"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut labels = LabelMap::new();
        assert_eq!(labels.insert("tf.keras", "Keras"), None);
        labels.insert("tf.nn", "NN");
        assert_eq!(labels.insert("tf.keras", "Keras API"), Some("Keras".to_string()));

        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("tf.keras"), Some("Keras API"));
        assert_eq!(labels.packages().next(), Some("tf.keras"));
        assert_eq!(labels.get("tf.data"), None);
    }

    #[test]
    fn test_serialized_as_ordered_tables() {
        #[derive(Serialize, Deserialize)]
        struct Doc {
            labels: LabelMap,
        }

        let toml_doc = r#"
            [[labels]]
            package = "tf.keras"
            label = "Keras"

            [[labels]]
            package = "tf.nn"
            label = "NN"
        "#;
        let doc: Doc = toml::from_str(toml_doc).unwrap();
        assert_eq!(doc.labels.packages().collect::<Vec<_>>(), vec!["tf.keras", "tf.nn"]);

        let json = serde_json::to_value(&doc.labels).unwrap();
        assert_eq!(json[1]["label"], "NN");
    }
}
