//! The compiled artifact set.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use ontocypher_ontology::Schema;

use crate::contract::DataContract;

/// Templates keyed by class or relation key, kept in compilation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateMap {
    entries: Vec<(String, String)>,
}

impl TemplateMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the template under `key`.
    pub fn insert(&mut self, key: String, template: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = template,
            None => self.entries.push((key, template)),
        }
    }

    /// Template stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, t)| t.as_str())
    }

    /// Keys in compilation order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in compilation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t.as_str()))
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no template is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TemplateMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, template) in &self.entries {
            map.serialize_entry(key, template)?;
        }
        map.end()
    }
}

/// Everything compiled from one schema and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledArtifacts {
    /// Uniqueness constraints, one per keyed class.
    pub constraints: Vec<String>,
    /// Node upsert templates keyed by class.
    pub nodes: TemplateMap,
    /// Relationship upsert templates keyed by relation key.
    pub relationships: TemplateMap,
    /// Namespace prefix and mapping registrations.
    pub namespaces: Vec<String>,
    /// Plugin configuration and resource constraint.
    pub bootstrap: Vec<String>,
    /// Statements that wipe a graph built from these artifacts.
    pub teardown: Vec<String>,
    /// Parameter paths each template reads.
    pub contract: DataContract,
    /// The schema these artifacts were compiled from.
    pub schema: Schema,
}

impl CompiledArtifacts {
    /// Statements to run once, in order, before any upsert template.
    pub fn setup_statements(&self) -> impl Iterator<Item = &str> {
        self.bootstrap
            .iter()
            .chain(&self.namespaces)
            .chain(&self.constraints)
            .map(String::as_str)
    }

    /// Node template for `class`.
    #[must_use]
    pub fn node_template(&self, class: &str) -> Option<&str> {
        self.nodes.get(class)
    }

    /// Relationship template for `relation_key`.
    #[must_use]
    pub fn relationship_template(&self, relation_key: &str) -> Option<&str> {
        self.relationships.get(relation_key)
    }

    /// Per-family counts.
    #[must_use]
    pub fn summary(&self) -> ArtifactSummary {
        ArtifactSummary {
            constraints: self.constraints.len(),
            nodes: self.nodes.len(),
            relationships: self.relationships.len(),
            namespaces: self.namespaces.len(),
        }
    }
}

/// Statement counts of a compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    /// Constraint statements.
    pub constraints: usize,
    /// Node templates.
    pub nodes: usize,
    /// Relationship templates.
    pub relationships: usize,
    /// Namespace statements.
    pub namespaces: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn template_map_keeps_insertion_order() {
        let mut map = TemplateMap::new();
        map.insert("Scope1".into(), "b".into());
        map.insert("Company".into(), "a".into());
        map.insert("Scope1".into(), "c".into());
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("Scope1", "c"), ("Company", "a")]);
    }

    #[test]
    fn template_map_serializes_as_ordered_object() {
        let mut map = TemplateMap::new();
        map.insert("z".into(), "1".into());
        map.insert("a".into(), "2".into());
        assert_eq!(serde_json::to_string(&map).ok().as_deref(), Some(r#"{"z":"1","a":"2"}"#));
    }

    #[test]
    fn setup_runs_bootstrap_then_namespaces_then_constraints() {
        let artifacts = CompiledArtifacts {
            constraints: vec!["c".into()],
            nodes: TemplateMap::new(),
            relationships: TemplateMap::new(),
            namespaces: vec!["n1".into(), "n2".into()],
            bootstrap: vec!["b".into()],
            teardown: vec![],
            contract: DataContract::default(),
            schema: Schema::default(),
        };
        let order: Vec<_> = artifacts.setup_statements().collect();
        assert_eq!(order, vec!["b", "n1", "n2", "c"]);
    }
}
