//! Hand-authored compilation configuration.
//!
//! A configuration file holds three tables:
//!
//! ```toml
//! [keys]
//! Company = ["LEI"]
//! Scope1 = ["label", "period"]
//!
//! [values]
//! Scope1 = "tonsCO2Eq"
//!
//! [graph]                 # optional, defaults shown
//! handle_vocab_uris = "MAP"
//! handle_multival = "ARRAY"
//! multival_prop_list = []
//! handle_rdf_types = "LABELS"
//! ```
//!
//! The same structure is accepted as JSON. Nothing here is derived from the
//! ontology; [`crate::validate`] checks it against one.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Class → properties forming its composite uniqueness key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyConfig(BTreeMap<String, Vec<String>>);

impl KeyConfig {
    /// Creates an empty key configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key of `class`, replacing any previous entry.
    pub fn insert(&mut self, class: impl Into<String>, keys: Vec<String>) {
        self.0.insert(class.into(), keys);
    }

    /// Key properties of `class`, if configured.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&[String]> {
        self.0.get(class).map(Vec::as_slice)
    }

    /// Entries sorted by class name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(c, k)| (c.as_str(), k.as_slice()))
    }

    /// Number of configured classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no class is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C, K> FromIterator<(C, K)> for KeyConfig
where
    C: Into<String>,
    K: IntoIterator,
    K::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, K)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(c, k)| (c.into(), k.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

/// Class → the property holding its measured quantity.
///
/// Required for every relationship target. The quantity is written onto the
/// incoming edge rather than the shared target node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueConfig(BTreeMap<String, String>);

impl ValueConfig {
    /// Creates an empty value configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value property of `class`.
    pub fn insert(&mut self, class: impl Into<String>, property: impl Into<String>) {
        self.0.insert(class.into(), property.into());
    }

    /// Value property of `class`, if configured.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&str> {
        self.0.get(class).map(String::as_str)
    }

    /// Entries sorted by class name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, p)| (c.as_str(), p.as_str()))
    }

    /// Number of configured classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no class is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C: Into<String>, P: Into<String>> FromIterator<(C, P)> for ValueConfig {
    fn from_iter<I: IntoIterator<Item = (C, P)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(c, p)| (c.into(), p.into())).collect())
    }
}

/// How the graph plugin stores vocabulary IRIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VocabUris {
    /// Replace namespaces with generated prefixes.
    Shorten,
    /// Drop namespaces entirely.
    Ignore,
    /// Map IRIs to local names through registered mappings.
    #[default]
    Map,
    /// Keep full IRIs.
    Keep,
}

/// How repeated values of one property are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiValue {
    /// Keep the last value.
    Overwrite,
    /// Collect values into an array.
    #[default]
    Array,
}

/// How `rdf:type` statements are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RdfTypes {
    /// As node labels.
    #[default]
    Labels,
    /// As nodes linked by a type relationship.
    Nodes,
    /// Both.
    LabelsAndNodes,
}

macro_rules! upper_name {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Name expected by the graph plugin's configuration call.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }
    };
}

upper_name!(VocabUris { Shorten => "SHORTEN", Ignore => "IGNORE", Map => "MAP", Keep => "KEEP" });
upper_name!(MultiValue { Overwrite => "OVERWRITE", Array => "ARRAY" });
upper_name!(RdfTypes { Labels => "LABELS", Nodes => "NODES", LabelsAndNodes => "LABELS_AND_NODES" });

/// Settings of the graph plugin initialisation statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Vocabulary IRI handling.
    pub handle_vocab_uris: VocabUris,
    /// Multi-valued property handling.
    pub handle_multival: MultiValue,
    /// Properties stored as arrays when `handle_multival` is `ARRAY`.
    pub multival_prop_list: Vec<String>,
    /// `rdf:type` handling.
    pub handle_rdf_types: RdfTypes,
    /// Keep language tags on string literals.
    pub keep_lang_tag: bool,
    /// Keep custom datatypes on literals.
    pub keep_custom_datatypes: bool,
    /// Rewrite names to graph naming conventions.
    pub apply_neo4j_naming: bool,
}

/// The full configuration of one compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Uniqueness keys per class.
    #[serde(default)]
    pub keys: KeyConfig,
    /// Value property per relationship-target class.
    #[serde(default)]
    pub values: ValueConfig,
    /// Graph plugin settings.
    #[serde(default)]
    pub graph: GraphSettings,
}

impl ModelConfig {
    /// Builds a configuration with default graph settings.
    #[must_use]
    pub fn new(keys: KeyConfig, values: ValueConfig) -> Self {
        Self {
            keys,
            values,
            graph: GraphSettings::default(),
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the document is invalid.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is invalid.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Reads a `.toml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::UnsupportedFormat`] for any other extension, or a parse
    /// error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&read()?),
            Some("json") => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOML: &str = r#"
[keys]
Company = ["LEI"]
Scope1 = ["label", "period"]

[values]
Scope1 = "tonsCO2Eq"

[graph]
handle_multival = "OVERWRITE"
multival_prop_list = ["industries"]
"#;

    #[test]
    fn toml_round_trip_of_tables() {
        let config = ModelConfig::from_toml_str(TOML).unwrap();
        assert_eq!(config.keys.get("Scope1"), Some(&["label".to_string(), "period".to_string()][..]));
        assert_eq!(config.values.get("Scope1"), Some("tonsCO2Eq"));
        assert_eq!(config.graph.handle_multival, MultiValue::Overwrite);
        assert_eq!(config.graph.handle_vocab_uris, VocabUris::Map);
        assert_eq!(config.graph.multival_prop_list, vec!["industries".to_string()]);
    }

    #[test]
    fn json_without_graph_table_uses_defaults() {
        let config = ModelConfig::from_json_str(
            r#"{"keys": {"Company": ["LEI"]}, "values": {}}"#,
        )
        .unwrap();
        assert_eq!(config.keys.len(), 1);
        assert!(config.values.is_empty());
        assert_eq!(config.graph, GraphSettings::default());
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result = ModelConfig::from_toml_str("[graph]\nhandle_rdf_types = \"TAGS\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unsupported_extension() {
        let result = ModelConfig::load(Path::new("config.yaml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn key_config_iterates_sorted() {
        let keys: KeyConfig = [("Scope1", vec!["label"]), ("Company", vec!["LEI"])]
            .into_iter()
            .collect();
        let classes: Vec<_> = keys.iter().map(|(c, _)| c).collect();
        assert_eq!(classes, vec!["Company", "Scope1"]);
    }

    #[test]
    fn enum_names_match_plugin_vocabulary() {
        assert_eq!(RdfTypes::LabelsAndNodes.as_str(), "LABELS_AND_NODES");
        assert_eq!(VocabUris::default().as_str(), "MAP");
        assert_eq!(MultiValue::default().as_str(), "ARRAY");
    }
}
