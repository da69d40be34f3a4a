//! Relationship upsert templates.
//!
//! A relationship template matches its source and target nodes by their
//! keys and merges the typed edge between them. Bundles are addressed by
//! relation key:
//!
//! ```text
//! data['<S>_<rel>_<T>']['source']['<S>'][<key>]
//! data['<S>_<rel>_<T>']['target']['<T>'][<key> | <value>]
//! ```
//!
//! The target's value property is read from the target bundle and stored on
//! the edge.

use std::collections::HashMap;

use ontocypher_conformance::{KeyConfig, ValueConfig};
use ontocypher_ontology::{Relationship, Schema};
use tracing::warn;

use crate::artifacts::TemplateMap;
use crate::cypher::{ident, param_path, property_map, QueryBuilder};
use crate::CompileError;

/// Bundle side holding the source node's properties.
pub const SOURCE: &str = "source";
/// Bundle side holding the target node's properties.
pub const TARGET: &str = "target";

/// One template per relationship entry, keyed by relation key in schema
/// order.
///
/// # Errors
///
/// Returns [`CompileError::CompilerContractViolation`] if an entry names a
/// class the schema does not declare, and
/// [`CompileError::DuplicateRelationKey`] if two entries share a relation
/// key.
pub fn compile_relationship_templates(
    schema: &Schema,
    keys: &KeyConfig,
    values: &ValueConfig,
) -> Result<TemplateMap, CompileError> {
    let mut templates = TemplateMap::new();
    let mut origins: HashMap<String, &str> = HashMap::new();

    for rel in &schema.relationships {
        let relation_key = rel.relation_key();
        for class in [&rel.source, &rel.target] {
            if !schema.classes.is_declared(class) {
                return Err(CompileError::CompilerContractViolation {
                    relation_key,
                    class: class.clone(),
                });
            }
        }
        if let Some(first) = origins.insert(relation_key.clone(), rel.iri.as_str()) {
            return Err(CompileError::DuplicateRelationKey {
                relation_key,
                first: first.to_string(),
                second: rel.iri.clone(),
            });
        }

        let source_key = keys.get(&rel.source).unwrap_or_default();
        if source_key.is_empty() {
            warn!(
                relation_key = %relation_key,
                source = %rel.source,
                "source class has no key; the template matches every node with its label"
            );
        }
        let target_key = keys.get(&rel.target).unwrap_or_default();
        let template = relationship_template(
            rel,
            &relation_key,
            source_key,
            target_key,
            values.get(&rel.target),
        );
        templates.insert(relation_key, template);
    }

    Ok(templates)
}

fn relationship_template(
    rel: &Relationship,
    relation_key: &str,
    source_key: &[String],
    target_key: &[String],
    value: Option<&str>,
) -> String {
    let side = |role: &str, class: &str, props: &[String]| {
        property_map(
            props
                .iter()
                .map(|p| (p.as_str(), param_path(&[relation_key, role, class, p.as_str()]))),
        )
    };

    let mut q = QueryBuilder::with_data();
    q.line(format!(
        "MATCH (source:{}{})",
        ident(&rel.source),
        side(SOURCE, &rel.source, source_key)
    ));
    q.line(format!(
        "MATCH (target:{}{})",
        ident(&rel.target),
        side(TARGET, &rel.target, target_key)
    ));
    let edge = value.map_or_else(String::new, |v| {
        property_map([(v, param_path(&[relation_key, TARGET, rel.target.as_str(), v]))])
    });
    q.line(format!("MERGE (source)-[r:{}{edge}]->(target)", ident(&rel.name)));
    q.finish_upsert()
}
