//! Graph preparation and teardown statements.
//!
//! These run outside the per-record templates: once before loading to
//! configure the RDF plugin, and once to wipe a graph built by an earlier
//! run.

use ontocypher_conformance::{GraphSettings, KeyConfig};

use crate::constraints::constraint_name;
use crate::cypher::{ident, quote};

/// Uniqueness of resource IRIs, required by the plugin before any import.
pub const RESOURCE_CONSTRAINT: &str =
    "CREATE CONSTRAINT n10s_unique_uri IF NOT EXISTS FOR (r:Resource) REQUIRE r.uri IS UNIQUE;";

/// What an import statement loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportScope {
    /// Only the class and property declarations.
    #[default]
    Ontology,
    /// Every triple of the document.
    Rdf,
}

impl ImportScope {
    fn procedure(self) -> &'static str {
        match self {
            Self::Ontology => "n10s.onto.import.fetch",
            Self::Rdf => "n10s.rdf.import.fetch",
        }
    }
}

/// Plugin configuration followed by the resource constraint.
#[must_use]
pub fn init_statements(settings: &GraphSettings) -> Vec<String> {
    vec![graph_config(settings), RESOURCE_CONSTRAINT.to_string()]
}

fn graph_config(settings: &GraphSettings) -> String {
    let multival: Vec<String> = settings
        .multival_prop_list
        .iter()
        .map(|p| format!("'{}'", quote(p)))
        .collect();
    let fields = [
        ("handleVocabUris", format!("'{}'", settings.handle_vocab_uris.as_str())),
        ("handleMultival", format!("'{}'", settings.handle_multival.as_str())),
        ("multivalPropList", format!("[{}]", multival.join(", "))),
        ("handleRDFTypes", format!("'{}'", settings.handle_rdf_types.as_str())),
        ("keepLangTag", settings.keep_lang_tag.to_string()),
        ("keepCustomDataTypes", settings.keep_custom_datatypes.to_string()),
        ("applyNeo4jNaming", settings.apply_neo4j_naming.to_string()),
        ("classLabel", "'CLASS'".to_string()),
        ("subClassOfRel", "'IS_A'".to_string()),
        ("objectPropertyLabel", "'RELATION'".to_string()),
        ("subPropertyOfRel", "'Sub-Property'".to_string()),
        ("domainRel", "'FROM'".to_string()),
        ("rangeRel", "'TO'".to_string()),
    ];
    let body: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!("  {name}: {value}"))
        .collect();
    format!("CALL n10s.graphconfig.init({{\n{}\n}});", body.join(",\n"))
}

/// Deletes every node, then drops the resource constraint and each node
/// constraint [`crate::constraints::compile_constraints`] creates.
#[must_use]
pub fn teardown_statements(keys: &KeyConfig) -> Vec<String> {
    let mut statements = vec![
        "MATCH (n) DETACH DELETE n;".to_string(),
        "DROP CONSTRAINT n10s_unique_uri IF EXISTS;".to_string(),
    ];
    statements.extend(
        keys.iter()
            .filter(|(_, key)| !key.is_empty())
            .map(|(class, _)| format!("DROP CONSTRAINT {} IF EXISTS;", ident(&constraint_name(class)))),
    );
    statements
}

/// Fetches an RDF document into the graph. `location` is a URL or a local
/// path.
#[must_use]
pub fn import_statement(location: &str, scope: ImportScope, serialization: &str) -> String {
    let url = if location.contains("://") {
        location.to_string()
    } else if location.starts_with('/') {
        format!("file://{location}")
    } else {
        format!("file:///{location}")
    };
    format!(
        "CALL {}('{}', '{}');",
        scope.procedure(),
        quote(&url),
        quote(serialization)
    )
}
