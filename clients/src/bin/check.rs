//! `ontocypher-check` — Validates a key/value configuration against an ontology.
//!
//! **Usage:**
//! ```text
//! ontocypher-check --ontology <ttl> --config <toml|json>
//! ```
//!
//! Exits non-zero if any defect is found.

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
use ontocypher_conformance::validate;

/// Check a compilation configuration.
#[derive(Parser)]
#[command(
    name = "ontocypher-check",
    about = "Validate key and value configuration against an ontology"
)]
struct Args {
    /// Turtle ontology.
    #[arg(long)]
    ontology: PathBuf,

    /// Configuration file (.toml or .json).
    #[arg(long)]
    config: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let (schema, config) = load_inputs(&args.ontology, &args.config)?;

    println!("ontocypher Configuration Report");
    println!("===============================");
    println!();

    let report = validate(&schema, &config);
    if !report.is_clean() {
        print_report(&report);
        eprintln!("Configuration FAILED: {} defect(s).", report.defect_count());
        process::exit(1);
    }

    println!(
        "{} classes keyed, {} relationship targets valued.",
        schema.classes.len(),
        schema.relationships.targets().len()
    );
    println!("Configuration PASSED.");
    Ok(())
}
