//! `ontocypher-build` — Compiles an ontology and its configuration into Cypher
//! statements and writes them to the output directory.
//!
//! **Outputs:**
//! - `<out>/bootstrap.cypher`, `<out>/namespaces.cypher`, `<out>/constraints.cypher`
//! - `<out>/teardown.cypher`
//! - `<out>/import.cypher`: loads the ontology itself through the graph plugin
//! - `<out>/nodes/<Class>.cypher`, `<out>/relationships/<key>.cypher`
//! - `<out>/data_needed/<key>.json`: sample parameter bundles
//! - `<out>/artifacts.json`: everything above in one document
//!
//! **Usage:**
//! ```text
//! ontocypher-build --ontology <ttl> --config <toml|json> [--out <path>] [--show]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use ontocypher_clients::{init_tracing, load_inputs, print_report};
use ontocypher_codegen::bootstrap::import_statement;
use ontocypher_codegen::emit::{script, write_artifacts, write_file};
use ontocypher_codegen::{compile, CompileError, CompiledArtifacts, ImportScope};

/// Build Cypher artifacts from an ontology.
#[derive(Parser)]
#[command(name = "ontocypher-build", about = "Compile an ontology into Cypher templates")]
struct Args {
    /// Turtle ontology.
    #[arg(long)]
    ontology: PathBuf,

    /// Configuration file (.toml or .json).
    #[arg(long)]
    config: PathBuf,

    /// Output directory for generated artifacts.
    #[arg(long, default_value = "cypher")]
    out: PathBuf,

    /// Also print every statement and template to stdout.
    #[arg(long)]
    show: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let (schema, config) = load_inputs(&args.ontology, &args.config)?;

    let artifacts = match compile(&schema, &config) {
        Ok(artifacts) => artifacts,
        Err(CompileError::SchemaConfig(report)) => {
            print_report(&report);
            eprintln!("Build FAILED: configuration does not fit the ontology.");
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if args.show {
        show(&artifacts);
    }

    let mut report = write_artifacts(&artifacts, &args.out)?;
    let ontology_path = std::fs::canonicalize(&args.ontology).unwrap_or_else(|_| args.ontology.clone());
    let import = import_statement(&ontology_path.display().to_string(), ImportScope::Ontology, "Turtle");
    write_file(&args.out.join("import.cypher"), &script(&[import]))?;
    report.files.push("import.cypher".to_string());

    let summary = report.summary;
    println!(
        "ontocypher: {} constraints, {} node templates, {} relationship templates, {} namespace statements",
        summary.constraints, summary.nodes, summary.relationships, summary.namespaces
    );
    for file in &report.files {
        println!("  Written: {}", args.out.join(file).display());
    }

    println!("Build complete.");
    Ok(())
}

fn show(artifacts: &CompiledArtifacts) {
    println!("// setup");
    for statement in artifacts.setup_statements() {
        println!("{statement}");
    }
    for (class, template) in artifacts.nodes.iter() {
        println!();
        println!("// node {class}");
        println!("{template}");
    }
    for (relation_key, template) in artifacts.relationships.iter() {
        println!();
        println!("// relationship {relation_key}");
        println!("{template}");
    }
    println!();
}
