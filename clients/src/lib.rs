//! Shared setup of the ontocypher binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::Path;

use anyhow::{Context, Result};
use ontocypher_conformance::{ModelConfig, ValidationReport};
use ontocypher_ontology::{turtle, Schema, SchemaExtractor};
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber filtered by `RUST_LOG`, `info` by default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the ontology and the configuration file.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed.
pub fn load_inputs(ontology: &Path, config: &Path) -> Result<(Schema, ModelConfig)> {
    let store = turtle::load_file(ontology)
        .with_context(|| format!("Failed to load ontology {}", ontology.display()))?;
    let schema = SchemaExtractor::new(&store)
        .extract()
        .with_context(|| format!("Failed to extract schema from {}", ontology.display()))?;
    let config = ModelConfig::load(config)
        .with_context(|| format!("Failed to load configuration {}", config.display()))?;
    tracing::info!(
        classes = schema.classes.len(),
        relationships = schema.relationships.len(),
        identifiers = schema.namespaces.len(),
        "schema loaded"
    );
    Ok((schema, config))
}

/// Prints one line per defect followed by a summary.
pub fn print_report(report: &ValidationReport) {
    for defect in &report.defects {
        println!("[FAIL] {} — {}", defect.kind.as_str(), defect.message);
    }
    println!();
    println!("Summary: {} defect(s)", report.defect_count());
}
