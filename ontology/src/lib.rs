//! Ontology introspection for ontocypher.
//!
//! Turns an OWL/RDFS ontology into the schema a property graph needs: node
//! labels with their scalar properties, and typed edges between labels.
//!
//! # Entry Point
//!
//! ```
//! use ontocypher_ontology::{fixtures, turtle, SchemaExtractor};
//!
//! let store = turtle::parse_str(fixtures::EMISSIONS).unwrap();
//! let schema = SchemaExtractor::new(&store).extract().unwrap();
//! assert_eq!(schema.classes.len(), 2);
//! assert_eq!(schema.relationships.len(), 1);
//! ```
//!
//! The extractor is generic over [`TripleStore`], so any source that can
//! answer wildcard triple patterns can stand in for the bundled
//! [`MemoryStore`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod extract;
pub mod fixtures;
pub mod iri;
pub mod model;
pub mod store;
pub mod turtle;

pub use error::SchemaError;
pub use extract::SchemaExtractor;
pub use model::{ClassEntry, ClassSchema, Relationship, RelationshipSchema, Schema};
pub use store::{MemoryStore, Term, Triple, TripleStore};

/// Parses a Turtle document and extracts its schema in one step.
///
/// # Errors
///
/// Returns [`SchemaError::Turtle`] for invalid Turtle and
/// [`SchemaError::MalformedIdentifier`] for an undecomposable IRI.
pub fn schema_from_turtle(document: &str) -> Result<Schema, SchemaError> {
    let store = turtle::parse_str(document)?;
    SchemaExtractor::new(&store).extract()
}
