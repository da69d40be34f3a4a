//! Schema extraction from a triple store.
//!
//! Classes are subjects of `rdf:type owl:Class`. A class's scalar properties
//! are the `owl:DatatypeProperty` subjects whose `rdfs:domain` is that class.
//! Relationships are `owl:ObjectProperty` subjects with at least one
//! `rdfs:domain` and one `rdfs:range`; every (domain, range) combination
//! becomes its own entry.
//!
//! Output order follows the store's match order, never hash order, so the
//! templates generated downstream are reproducible.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::SchemaError;
use crate::iri;
use crate::model::iris::*;
use crate::model::{ClassSchema, Relationship, RelationshipSchema, Schema};
use crate::store::{Term, TripleStore};

/// A class IRI together with the IRIs of its scalar properties.
struct ClassFacts<'s> {
    class: &'s str,
    properties: Vec<&'s str>,
}

/// Reads classes, relationships and identifiers out of a [`TripleStore`].
pub struct SchemaExtractor<'s, S: TripleStore + ?Sized> {
    store: &'s S,
    rdf_type: Term,
    domain: Term,
    range: Term,
}

impl<'s, S: TripleStore + ?Sized> SchemaExtractor<'s, S> {
    /// Wraps a store. Nothing is read until an extraction method is called.
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            rdf_type: Term::iri(RDF_TYPE),
            domain: Term::iri(RDFS_DOMAIN),
            range: Term::iri(RDFS_RANGE),
        }
    }

    /// Runs every extraction and bundles the results.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedIdentifier`] if any class, property or
    /// relationship IRI cannot be split into namespace and local name.
    pub fn extract(&self) -> Result<Schema, SchemaError> {
        let schema = Schema {
            classes: self.classes()?,
            relationships: self.relationships()?,
            namespaces: self.namespaces(),
        };
        debug!(
            classes = schema.classes.len(),
            propertyless = schema.classes.propertyless().len(),
            relationships = schema.relationships.len(),
            identifiers = schema.namespaces.len(),
            "extracted schema"
        );
        Ok(schema)
    }

    /// Builds the class schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedIdentifier`] for an IRI without a
    /// delimiter.
    pub fn classes(&self) -> Result<ClassSchema, SchemaError> {
        let mut schema = ClassSchema::new();
        for facts in self.class_facts() {
            let class = iri::local_name(facts.class)?;
            if facts.properties.is_empty() {
                schema.add_propertyless(class);
            }
            for property in facts.properties {
                schema.add_property(class, iri::local_name(property)?);
            }
        }
        Ok(schema)
    }

    /// Builds the relationship schema.
    ///
    /// A relationship missing its domain or range is skipped. One declaring
    /// several domains or ranges is expanded into every combination; both
    /// cases are logged as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedIdentifier`] for an IRI without a
    /// delimiter.
    pub fn relationships(&self) -> Result<RelationshipSchema, SchemaError> {
        let object_property = Term::iri(OWL_OBJECT_PROPERTY);
        let mut schema = RelationshipSchema::new();

        for fact in self
            .store
            .matching(None, Some(&self.rdf_type), Some(&object_property))
        {
            let Some(rel_iri) = fact.subject.as_iri() else {
                continue;
            };
            let domains = self.objects(&fact.subject, &self.domain);
            let ranges = self.objects(&fact.subject, &self.range);

            if domains.is_empty() || ranges.is_empty() {
                warn!(
                    relationship = rel_iri,
                    domains = domains.len(),
                    ranges = ranges.len(),
                    "object property lacks a domain or range, skipped"
                );
                continue;
            }
            if domains.len() > 1 || ranges.len() > 1 {
                warn!(
                    relationship = rel_iri,
                    domains = domains.len(),
                    ranges = ranges.len(),
                    entries = domains.len() * ranges.len(),
                    "multiple domain/range declarations expanded into every combination"
                );
            }

            let name = iri::local_name(rel_iri)?;
            for source in &domains {
                for target in &ranges {
                    schema.push(Relationship {
                        name: name.to_string(),
                        iri: rel_iri.to_string(),
                        source: iri::local_name(source)?.to_string(),
                        target: iri::local_name(target)?.to_string(),
                    });
                }
            }
        }
        Ok(schema)
    }

    /// Absolute identifiers of every class, scalar property and relationship.
    #[must_use]
    pub fn namespaces(&self) -> BTreeSet<String> {
        let object_property = Term::iri(OWL_OBJECT_PROPERTY);
        let mut out = BTreeSet::new();
        for facts in self.class_facts() {
            out.insert(facts.class.to_string());
            out.extend(facts.properties.iter().map(|p| p.to_string()));
        }
        for fact in self
            .store
            .matching(None, Some(&self.rdf_type), Some(&object_property))
        {
            if let Some(rel) = fact.subject.as_iri() {
                out.insert(rel.to_string());
            }
        }
        out
    }

    fn class_facts(&self) -> Vec<ClassFacts<'s>> {
        let owl_class = Term::iri(OWL_CLASS);
        let datatype_property = Term::iri(OWL_DATATYPE_PROPERTY);
        let store = self.store;

        store
            .matching(None, Some(&self.rdf_type), Some(&owl_class))
            .into_iter()
            .filter_map(|fact| {
                let class = fact.subject.as_iri()?;
                let properties = store
                    .matching(None, Some(&self.domain), Some(&fact.subject))
                    .into_iter()
                    .filter(|d| {
                        !store
                            .matching(Some(&d.subject), Some(&self.rdf_type), Some(&datatype_property))
                            .is_empty()
                    })
                    .filter_map(|d| d.subject.as_iri())
                    .collect();
                Some(ClassFacts { class, properties })
            })
            .collect()
    }

    fn objects(&self, subject: &Term, predicate: &Term) -> Vec<&'s str> {
        let store = self.store;
        store
            .matching(Some(subject), Some(predicate), None)
            .into_iter()
            .filter_map(|t| t.object.as_iri())
            .collect()
    }
}
