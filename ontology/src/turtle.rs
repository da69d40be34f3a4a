//! Turtle 1.1 loading into a [`MemoryStore`].
//!
//! Parsing is delegated to `sophia_turtle`; this module only converts the
//! parsed terms into [`Term`] values. Literal datatypes and language tags are
//! dropped since schema extraction never looks at literals.

use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::Term as _;
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::turtle;

use crate::error::SchemaError;
use crate::store::{MemoryStore, Term, Triple};

/// Parses a Turtle document into a new store.
///
/// # Errors
///
/// Returns [`SchemaError::Turtle`] if the document is not valid Turtle.
pub fn parse_str(document: &str) -> Result<MemoryStore, SchemaError> {
    let mut store = MemoryStore::new();
    turtle::parse_str(document)
        .for_each_triple(|t| {
            let (Some(subject), Some(predicate), Some(object)) =
                (convert(t.s()), convert(t.p()), convert(t.o()))
            else {
                return;
            };
            store.insert(Triple {
                subject,
                predicate,
                object,
            });
        })
        .map_err(|e| SchemaError::Turtle(e.to_string()))?;
    tracing::debug!(triples = store.len(), "parsed turtle document");
    Ok(store)
}

/// Reads and parses a Turtle file.
///
/// # Errors
///
/// Returns [`SchemaError::Io`] if the file cannot be read and
/// [`SchemaError::Turtle`] if it is not valid Turtle.
pub fn load_file(path: &Path) -> Result<MemoryStore, SchemaError> {
    let document = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&document)
}

fn convert<T: sophia_api::term::Term>(term: T) -> Option<Term> {
    if let Some(iri) = term.iri() {
        return Some(Term::Iri(iri.as_str().to_owned()));
    }
    if let Some(bnode) = term.bnode_id() {
        return Some(Term::BlankNode(bnode.as_str().to_owned()));
    }
    term.lexical_form().map(|lex| Term::Literal(str::to_owned(&lex)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::TripleStore;

    #[test]
    fn prefixed_names_are_expanded() {
        let store = parse_str(
            "@prefix ex: <http://example.org/esg#> .\n\
             @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             ex:Company a owl:Class .\n",
        )
        .unwrap();
        let company = Term::iri("http://example.org/esg#Company");
        assert_eq!(store.matching(Some(&company), None, None).len(), 1);
    }

    #[test]
    fn literals_and_blank_nodes_are_kept() {
        let store = parse_str(
            "<http://example.org/a> <http://example.org/label> \"A\"@en .\n\
             <http://example.org/a> <http://example.org/part> [ <http://example.org/x> 1 ] .\n",
        )
        .unwrap();
        assert_eq!(store.len(), 3);
        assert!(store
            .iter()
            .any(|t| t.object == Term::Literal("A".to_string())));
        assert!(store
            .iter()
            .any(|t| matches!(t.object, Term::BlankNode(_))));
    }

    #[test]
    fn invalid_turtle_is_an_error() {
        assert!(matches!(
            parse_str("ex:Company a owl:Class ."),
            Err(SchemaError::Turtle(_))
        ));
    }
}
