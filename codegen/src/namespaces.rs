//! Namespace registration statements for the graph plugin.
//!
//! Every identifier seen in the ontology is registered so that local names
//! stored in the graph can be mapped back to absolute IRIs. Prefixes are
//! numbered over the sorted distinct namespaces, so the output depends only
//! on the identifier set.

use std::collections::BTreeSet;

use ontocypher_ontology::{iri, SchemaError};

use crate::cypher::quote;

/// Prefix registrations for each namespace, then one mapping per identifier.
///
/// # Errors
///
/// Returns [`SchemaError::MalformedIdentifier`] if an identifier has no
/// delimiter.
pub fn compile_namespace_statements(
    identifiers: &BTreeSet<String>,
) -> Result<Vec<String>, SchemaError> {
    let mut namespaces = BTreeSet::new();
    let mut mappings = Vec::with_capacity(identifiers.len());

    for identifier in identifiers {
        let (namespace, local) = iri::resolve(identifier)?;
        namespaces.insert(namespace);
        mappings.push(format!(
            "CALL n10s.mapping.add('{}','{}');",
            quote(identifier),
            quote(local)
        ));
    }

    let mut statements: Vec<String> = namespaces
        .iter()
        .enumerate()
        .map(|(i, ns)| format!("CALL n10s.nsprefixes.add('ns{i}','{}');", quote(ns)))
        .collect();
    statements.extend(mappings);
    Ok(statements)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn prefixes_then_mappings() {
        let stmts = compile_namespace_statements(&ids(&[
            "https://example.org/env/Waste",
            "http://example.org/esg#Company",
            "http://example.org/esg#LEI",
        ]))
        .unwrap();
        assert_eq!(
            stmts,
            vec![
                "CALL n10s.nsprefixes.add('ns0','http://example.org/esg#');",
                "CALL n10s.nsprefixes.add('ns1','https://example.org/env/');",
                "CALL n10s.mapping.add('http://example.org/esg#Company','Company');",
                "CALL n10s.mapping.add('http://example.org/esg#LEI','LEI');",
                "CALL n10s.mapping.add('https://example.org/env/Waste','Waste');",
            ]
        );
    }

    #[test]
    fn malformed_identifier_propagates() {
        let result = compile_namespace_statements(&ids(&["http://example.org/esg#a", "bare"]));
        assert!(matches!(result, Err(SchemaError::MalformedIdentifier(ref id)) if id == "bare"));
    }

    #[test]
    fn empty_set_compiles_to_nothing() {
        assert_eq!(compile_namespace_statements(&BTreeSet::new()).ok(), Some(vec![]));
    }
}
