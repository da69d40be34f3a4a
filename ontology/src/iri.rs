//! Identifier → (namespace, local name) resolution.
//!
//! Every class, property and relationship IRI becomes a graph label,
//! property key or relationship type through this module. The split point is
//! the right-most `#`; failing that the right-most `/`; failing that the
//! right-most `:`. The namespace keeps its trailing delimiter so that
//! `namespace + local_name` reproduces the identifier.

use crate::error::SchemaError;

const DELIMITERS: [char; 3] = ['#', '/', ':'];

/// Splits `iri` into `(namespace, local_name)`.
///
/// # Errors
///
/// Returns [`SchemaError::MalformedIdentifier`] if `iri` contains none of
/// `#`, `/` or `:`.
pub fn resolve(iri: &str) -> Result<(&str, &str), SchemaError> {
    let pos = DELIMITERS
        .iter()
        .find_map(|d| iri.rfind(*d))
        .ok_or_else(|| SchemaError::MalformedIdentifier(iri.to_string()))?;
    // All delimiters are single-byte, so `pos + 1` is a char boundary.
    Ok(iri.split_at(pos + 1))
}

/// Returns the local name of `iri` (everything after the split point).
///
/// # Errors
///
/// Returns [`SchemaError::MalformedIdentifier`] if `iri` has no delimiter.
pub fn local_name(iri: &str) -> Result<&str, SchemaError> {
    resolve(iri).map(|(_, local)| local)
}

/// Returns the namespace of `iri`, including the delimiter.
///
/// # Errors
///
/// Returns [`SchemaError::MalformedIdentifier`] if `iri` has no delimiter.
pub fn namespace(iri: &str) -> Result<&str, SchemaError> {
    resolve(iri).map(|(ns, _)| ns)
}
