//! Node upsert templates.
//!
//! Each class gets one template that merges a node on its key properties and
//! sets every other scalar property from the `data['<Class>']` bundle. The
//! value property of a relationship target is never written to the node; it
//! lives on the incoming edges instead.

use ontocypher_conformance::{KeyConfig, ValueConfig};
use ontocypher_ontology::{ClassEntry, Schema};

use crate::artifacts::TemplateMap;
use crate::cypher::{ident, param_path, property_map, QueryBuilder};

/// The value property of `class` when it is lifted onto incoming edges.
///
/// Only relationship targets lift their value; a `values` entry for any
/// other class is ignored.
#[must_use]
pub fn lifted_value<'c>(schema: &Schema, values: &'c ValueConfig, class: &str) -> Option<&'c str> {
    if schema.relationships.is_target(class) {
        values.get(class)
    } else {
        None
    }
}

/// Properties set on the node after the merge: not a key, not lifted.
pub fn settable<'e>(
    entry: &'e ClassEntry,
    keys: &'e [String],
    lifted: Option<&'e str>,
) -> impl Iterator<Item = &'e String> {
    entry
        .properties
        .iter()
        .filter(move |p| !keys.contains(p) && Some(p.as_str()) != lifted)
}

/// One template per class with scalar properties, in schema order.
///
/// Expects a configuration that passed validation; a class without a key
/// merges on its label alone.
#[must_use]
pub fn compile_node_templates(schema: &Schema, keys: &KeyConfig, values: &ValueConfig) -> TemplateMap {
    let mut templates = TemplateMap::new();
    for entry in &schema.classes {
        let key = keys.get(&entry.name).unwrap_or_default();
        let lifted = lifted_value(schema, values, &entry.name);
        templates.insert(entry.name.clone(), node_template(entry, key, lifted));
    }
    templates
}

fn node_template(entry: &ClassEntry, key: &[String], lifted: Option<&str>) -> String {
    let class = &entry.name;
    let mut q = QueryBuilder::with_data();
    let pattern = property_map(key.iter().map(|k| (k.as_str(), param_path(&[class, k]))));
    q.line(format!("MERGE (n:{}{pattern})", ident(class)));
    for property in settable(entry, key, lifted) {
        q.line(format!(
            "SET n.{} = {}",
            ident(property),
            param_path(&[class, property])
        ));
    }
    q.finish_upsert()
}
