//! Schema model extracted from an ontology.
//!
//! These types describe the shape of the property graph the ontology
//! implies: which labels exist, which scalar properties each label carries and
//! which typed edges connect labels. All names are local names produced by
//! [`crate::iri`]; absolute identifiers survive only in
//! [`Schema::namespaces`] and [`Relationship::iri`].

use std::collections::BTreeSet;

/// A class that declares at least one scalar property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassEntry {
    /// Local name of the class, used as the node label.
    pub name: String,
    /// Local names of its scalar properties, in first-encounter order.
    pub properties: Vec<String>,
}

impl ClassEntry {
    /// Returns true if `property` is one of this class's scalar properties.
    #[must_use]
    pub fn has_property(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }
}

/// Class local name → scalar properties, plus the classes that declare none.
///
/// Propertyless classes are kept apart because they cannot carry a
/// uniqueness key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassSchema {
    classes: Vec<ClassEntry>,
    propertyless: Vec<String>,
}

impl ClassSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `property` on `class`, creating the class entry on first use.
    /// Repeated properties are ignored.
    pub fn add_property(&mut self, class: &str, property: &str) {
        self.propertyless.retain(|c| c != class);
        match self.classes.iter_mut().find(|c| c.name == class) {
            Some(entry) => {
                if !entry.has_property(property) {
                    entry.properties.push(property.to_string());
                }
            }
            None => self.classes.push(ClassEntry {
                name: class.to_string(),
                properties: vec![property.to_string()],
            }),
        }
    }

    /// Records a class that declares no scalar property.
    pub fn add_propertyless(&mut self, class: &str) {
        if !self.is_declared(class) {
            self.propertyless.push(class.to_string());
        }
    }

    /// Looks up a class that has properties.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&ClassEntry> {
        self.classes.iter().find(|c| c.name == class)
    }

    /// Properties of `class`, or `None` if it has none or is unknown.
    #[must_use]
    pub fn properties(&self, class: &str) -> Option<&[String]> {
        self.get(class).map(|c| c.properties.as_slice())
    }

    /// Returns true if `class` was declared at all, with or without properties.
    #[must_use]
    pub fn is_declared(&self, class: &str) -> bool {
        self.get(class).is_some() || self.is_propertyless(class)
    }

    /// Returns true if `class` was declared without scalar properties.
    #[must_use]
    pub fn is_propertyless(&self, class: &str) -> bool {
        self.propertyless.iter().any(|c| c == class)
    }

    /// Classes with properties, in first-encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClassEntry> {
        self.classes.iter()
    }

    /// Classes without properties, in first-encounter order.
    #[must_use]
    pub fn propertyless(&self) -> &[String] {
        &self.propertyless
    }

    /// Number of classes with properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no class has properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ClassSchema {
    type Item = &'a ClassEntry;
    type IntoIter = std::slice::Iter<'a, ClassEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

/// One typed edge between two classes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Relationship {
    /// Local name of the relationship, used as the edge type.
    pub name: String,
    /// Absolute identifier of the object property.
    pub iri: String,
    /// Local name of the domain class.
    pub source: String,
    /// Local name of the range class.
    pub target: String,
}

impl Relationship {
    /// `<source>_<name>_<target>`: the lookup key of this edge's template.
    ///
    /// Disambiguates same-named relationships across class pairs.
    #[must_use]
    pub fn relation_key(&self) -> String {
        format!("{}_{}_{}", self.source, self.name, self.target)
    }
}

/// All relationships, one entry per (relationship, domain, range).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelationshipSchema {
    entries: Vec<Relationship>,
}

impl RelationshipSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a relationship.
    pub fn push(&mut self, relationship: Relationship) {
        self.entries.push(relationship);
    }

    /// Relationships in first-encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Relationship> {
        self.entries.iter()
    }

    /// Distinct target classes in first-encounter order.
    #[must_use]
    pub fn targets(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for rel in &self.entries {
            if !out.contains(&rel.target.as_str()) {
                out.push(&rel.target);
            }
        }
        out
    }

    /// Returns true if any relationship points at `class`.
    #[must_use]
    pub fn is_target(&self, class: &str) -> bool {
        self.entries.iter().any(|r| r.target == class)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no relationships.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RelationshipSchema {
    type Item = &'a Relationship;
    type IntoIter = std::slice::Iter<'a, Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Relationship> for RelationshipSchema {
    fn from_iter<I: IntoIterator<Item = Relationship>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Everything one extraction pass produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schema {
    /// Classes and their scalar properties.
    pub classes: ClassSchema,
    /// Relationships between classes.
    pub relationships: RelationshipSchema,
    /// Absolute identifiers of every class, scalar property and relationship.
    pub namespaces: BTreeSet<String>,
}

/// RDF, RDFS and OWL vocabulary used during extraction.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn add_property_dedups_and_keeps_order() {
        let mut s = ClassSchema::new();
        s.add_property("Scope1", "label");
        s.add_property("Scope1", "period");
        s.add_property("Scope1", "label");
        assert_eq!(
            s.properties("Scope1"),
            Some(&["label".to_string(), "period".to_string()][..])
        );
    }

    #[test]
    fn propertyless_is_promoted_when_a_property_arrives() {
        let mut s = ClassSchema::new();
        s.add_propertyless("Report");
        assert!(s.is_propertyless("Report"));
        s.add_property("Report", "year");
        assert!(!s.is_propertyless("Report"));
        assert!(s.is_declared("Report"));
        s.add_propertyless("Report");
        assert!(s.propertyless().is_empty());
    }

    #[test]
    fn relation_key_format() {
        let rel = Relationship {
            name: "emits".into(),
            iri: "http://x.org/onto#emits".into(),
            source: "Company".into(),
            target: "Scope1".into(),
        };
        assert_eq!(rel.relation_key(), "Company_emits_Scope1");
    }

    #[test]
    fn targets_are_distinct() {
        let rel = |s: &str, t: &str| Relationship {
            name: "r".into(),
            iri: "x:r".into(),
            source: s.into(),
            target: t.into(),
        };
        let schema: RelationshipSchema =
            vec![rel("A", "B"), rel("C", "B"), rel("A", "D")].into_iter().collect();
        assert_eq!(schema.targets(), vec!["B", "D"]);
        assert!(schema.is_target("D"));
        assert!(!schema.is_target("A"));
    }
}
