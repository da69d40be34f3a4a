//! Triple store abstraction and an in-memory implementation.
//!
//! Schema extraction only ever needs one primitive: match a triple pattern in
//! which any position may be a wildcard. [`TripleStore`] is that primitive;
//! [`MemoryStore`] is the implementation the Turtle loader fills.

use std::collections::{HashMap, HashSet};

/// An RDF term as seen by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node label (without the `_:` prefix).
    BlankNode(String),
    /// The lexical form of a literal. Datatype and language tag are not kept.
    Literal(String),
}

impl Term {
    /// Builds an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

/// A single fact `(subject, predicate, object)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject term.
    pub subject: Term,
    /// Predicate term.
    pub predicate: Term,
    /// Object term.
    pub object: Term,
}

impl Triple {
    /// Builds a triple whose three positions are IRIs.
    pub fn iris(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: Term::iri(subject),
            predicate: Term::iri(predicate),
            object: Term::iri(object),
        }
    }
}

/// Read-only pattern matching over a set of triples.
///
/// `None` in any position is a wildcard. Implementations must return matches
/// in a stable order so that extraction is deterministic.
pub trait TripleStore {
    /// Returns every triple matching the pattern.
    fn matching(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<&Triple>;
}

/// Insertion-ordered in-memory triple set, indexed by predicate.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    by_predicate: HashMap<Term, Vec<usize>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if !self.seen.insert(triple.clone()) {
            return false;
        }
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(self.triples.len());
        self.triples.push(triple);
        true
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the store holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over all triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }
}

impl TripleStore for MemoryStore {
    fn matching(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<&Triple> {
        let accept = |t: &&Triple| {
            subject.map_or(true, |s| &t.subject == s) && object.map_or(true, |o| &t.object == o)
        };
        match predicate {
            Some(p) => self
                .by_predicate
                .get(p)
                .map(|idx| idx.iter().map(|&i| &self.triples[i]).filter(accept).collect())
                .unwrap_or_default(),
            None => self.triples.iter().filter(accept).collect(),
        }
    }
}

impl FromIterator<Triple> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        store.extend(iter);
        store
    }
}

impl Extend<Triple> for MemoryStore {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> MemoryStore {
        [
            Triple::iris("ex:a", "ex:p", "ex:b"),
            Triple::iris("ex:a", "ex:q", "ex:c"),
            Triple::iris("ex:d", "ex:p", "ex:b"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn duplicates_are_collapsed() {
        let mut s = store();
        assert!(!s.insert(Triple::iris("ex:a", "ex:p", "ex:b")));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn wildcard_positions() {
        let s = store();
        let p = Term::iri("ex:p");
        let b = Term::iri("ex:b");
        let a = Term::iri("ex:a");
        assert_eq!(s.matching(None, Some(&p), None).len(), 2);
        assert_eq!(s.matching(None, None, Some(&b)).len(), 2);
        assert_eq!(s.matching(Some(&a), None, None).len(), 2);
        assert_eq!(s.matching(Some(&a), Some(&p), Some(&b)).len(), 1);
        assert_eq!(s.matching(None, None, None).len(), 3);
    }

    #[test]
    fn matches_keep_insertion_order() {
        let s = store();
        let p = Term::iri("ex:p");
        let subjects: Vec<_> = s
            .matching(None, Some(&p), None)
            .iter()
            .filter_map(|t| t.subject.as_iri())
            .collect();
        assert_eq!(subjects, vec!["ex:a", "ex:d"]);
    }

    #[test]
    fn unknown_predicate_matches_nothing() {
        assert!(store().matching(None, Some(&Term::iri("ex:zzz")), None).is_empty());
    }
}
