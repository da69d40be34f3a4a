//! Compilation failures.

use ontocypher_conformance::ValidationReport;
use ontocypher_ontology::SchemaError;
use thiserror::Error;

/// Why a schema and configuration did not compile. Nothing is returned
/// alongside an error.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The configuration does not fit the schema. Carries every defect.
    #[error("{0}")]
    SchemaConfig(ValidationReport),

    /// A relationship names a class the schema never declared.
    #[error("relationship `{relation_key}` references class `{class}`, which the schema does not declare")]
    CompilerContractViolation {
        /// Key of the offending relationship entry.
        relation_key: String,
        /// The undeclared source or target class.
        class: String,
    },

    /// Two relationship entries collapse into the same template key.
    #[error("relation key `{relation_key}` is produced by both <{first}> and <{second}>")]
    DuplicateRelationKey {
        /// The colliding key.
        relation_key: String,
        /// Relationship identifier that claimed the key first.
        first: String,
        /// Relationship identifier that collided with it.
        second: String,
    },

    /// An identifier could not be resolved.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
