//! Errors raised while loading an ontology or resolving its identifiers.

use thiserror::Error;

/// Failures of the ontology layer.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The identifier contains none of `#`, `/` or `:` and cannot be split
    /// into a namespace and a local name.
    #[error("malformed identifier: `{0}` has no `#`, `/` or `:` delimiter")]
    MalformedIdentifier(String),

    /// The Turtle document could not be parsed.
    #[error("failed to parse Turtle: {0}")]
    Turtle(String),

    /// The ontology file could not be read.
    #[error("failed to read ontology {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
