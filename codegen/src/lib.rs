//! ontocypher template compiler.
//!
//! Compiles an extracted [`Schema`] plus a validated [`ModelConfig`] into the
//! statements needed to load records into a property graph:
//!
//! | Family | Keyed by | Produced by |
//! |--------|----------|-------------|
//! | uniqueness constraints | class | [`constraints::compile_constraints`] |
//! | node upserts | class | [`nodes::compile_node_templates`] |
//! | relationship upserts | `<Source>_<rel>_<Target>` | [`relationships::compile_relationship_templates`] |
//! | namespace registrations | identifier | [`namespaces::compile_namespace_statements`] |
//!
//! plus plugin bootstrap and teardown statements and the [`DataContract`]
//! describing every parameter path the templates read. Compilation is all or
//! nothing.
//!
//! ```
//! use ontocypher_codegen::compile;
//! use ontocypher_conformance::{KeyConfig, ModelConfig, ValueConfig};
//! use ontocypher_ontology::{fixtures, schema_from_turtle};
//!
//! let schema = schema_from_turtle(fixtures::EMISSIONS).unwrap();
//! let keys: KeyConfig = [("Company", vec!["LEI"]), ("Scope1", vec!["label", "period"])]
//!     .into_iter()
//!     .collect();
//! let values: ValueConfig = [("Scope1", "tonsCO2Eq")].into_iter().collect();
//!
//! let artifacts = compile(&schema, &ModelConfig::new(keys, values)).unwrap();
//! assert_eq!(artifacts.constraints.len(), 2);
//! assert!(artifacts.relationship_template("Company_emits_Scope1").is_some());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod artifacts;
pub mod bootstrap;
pub mod constraints;
pub mod contract;
pub mod cypher;
pub mod emit;
pub mod error;
pub mod namespaces;
pub mod nodes;
pub mod relationships;

use ontocypher_conformance::{validate, ModelConfig};
use ontocypher_ontology::{schema_from_turtle, Schema};
use tracing::debug;

pub use artifacts::{ArtifactSummary, CompiledArtifacts, TemplateMap};
pub use bootstrap::ImportScope;
pub use contract::{DataContract, NodeContract, ParameterShape, Placeholder, RelationshipContract};
pub use error::CompileError;

/// Validates `config` against `schema`, then compiles every artifact family.
///
/// # Errors
///
/// Returns [`CompileError::SchemaConfig`] with every defect if validation
/// fails, [`CompileError::CompilerContractViolation`] or
/// [`CompileError::DuplicateRelationKey`] for a relationship that cannot be
/// compiled, and [`CompileError::Schema`] for a malformed identifier.
pub fn compile(schema: &Schema, config: &ModelConfig) -> Result<CompiledArtifacts, CompileError> {
    let report = validate(schema, config);
    if !report.is_clean() {
        return Err(CompileError::SchemaConfig(report));
    }

    let relationships =
        relationships::compile_relationship_templates(schema, &config.keys, &config.values)?;
    let namespaces = namespaces::compile_namespace_statements(&schema.namespaces)?;

    let artifacts = CompiledArtifacts {
        constraints: constraints::compile_constraints(&config.keys),
        nodes: nodes::compile_node_templates(schema, &config.keys, &config.values),
        relationships,
        namespaces,
        bootstrap: bootstrap::init_statements(&config.graph),
        teardown: bootstrap::teardown_statements(&config.keys),
        contract: DataContract::derive(schema, &config.keys, &config.values),
        schema: schema.clone(),
    };

    let summary = artifacts.summary();
    debug!(
        constraints = summary.constraints,
        nodes = summary.nodes,
        relationships = summary.relationships,
        namespaces = summary.namespaces,
        "compiled artifacts"
    );
    Ok(artifacts)
}

/// Parses a Turtle ontology and compiles it.
///
/// # Errors
///
/// Returns [`CompileError::Schema`] if the document cannot be parsed, or any
/// error of [`compile`].
pub fn compile_turtle(document: &str, config: &ModelConfig) -> Result<CompiledArtifacts, CompileError> {
    compile(&schema_from_turtle(document)?, config)
}
