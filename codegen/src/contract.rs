//! Parameter contract of the compiled templates.
//!
//! For every node and relationship template the contract lists each
//! parameter the template reads, with its full path inside the `$data`
//! bundle. It is derived from the schema and configuration alone, in a pass
//! of its own, and is what a data producer fills in:
//!
//! ```json
//! {"Company_emits_Scope1": {
//!     "source": {"Company": {"LEI": "<HERE_LEI_VALUE>"}},
//!     "target": {"Scope1": {"label": "<HERE_label_VALUE>",
//!                           "period": "<HERE_period_VALUE>",
//!                           "tonsCO2Eq": "<HERE_tonsCO2Eq_VALUE>"}}}}
//! ```

use ontocypher_conformance::{KeyConfig, ValueConfig};
use ontocypher_ontology::{ClassEntry, Relationship, Schema};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cypher::param_path;
use crate::nodes::{lifted_value, settable};
use crate::relationships::{SOURCE, TARGET};

/// One template parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// Property the parameter fills.
    pub property: String,
    /// Path from the root of the `$data` bundle.
    pub path: Vec<String>,
}

impl Placeholder {
    fn new(property: &str, path: &[&str]) -> Self {
        Self {
            property: property.to_string(),
            path: path.iter().map(ToString::to_string).collect(),
        }
    }

    /// Marker used in sample bundles.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("<HERE_{}_VALUE>", self.property)
    }

    /// The Cypher expression reading this parameter.
    #[must_use]
    pub fn expression(&self) -> String {
        param_path(&self.path)
    }

    /// Returns true if `bundle` holds a non-null value at this path.
    #[must_use]
    pub fn is_bound_in(&self, bundle: &Value) -> bool {
        self.path
            .iter()
            .try_fold(bundle, |value, segment| value.get(segment))
            .is_some_and(|value| !value.is_null())
    }
}

/// Shared behaviour of node and relationship contracts.
pub trait ParameterShape {
    /// Key under which the template is compiled.
    fn template_key(&self) -> &str;

    /// Every parameter, in template order.
    fn placeholders(&self) -> Vec<&Placeholder>;

    /// A bundle with a marker in place of every parameter.
    fn sample(&self) -> Value {
        let mut root = Map::new();
        for placeholder in self.placeholders() {
            insert_at(&mut root, &placeholder.path, Value::String(placeholder.marker()));
        }
        Value::Object(root)
    }

    /// Parameters `bundle` leaves unbound.
    fn missing<'c>(&'c self, bundle: &Value) -> Vec<&'c Placeholder> {
        self.placeholders()
            .into_iter()
            .filter(|p| !p.is_bound_in(bundle))
            .collect()
    }
}

fn insert_at(root: &mut Map<String, Value>, path: &[String], leaf: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut cursor = root;
    for segment in parents {
        let entry = cursor
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(next) = entry else {
            return;
        };
        cursor = next;
    }
    cursor.insert(last.clone(), leaf);
}

/// Parameters of one node template: the key, then every settable property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeContract {
    /// Class label.
    pub class: String,
    /// Parameters under `data['<class>']`.
    pub parameters: Vec<Placeholder>,
}

impl NodeContract {
    fn derive(entry: &ClassEntry, keys: &KeyConfig, lifted: Option<&str>) -> Self {
        let class = entry.name.as_str();
        let key = keys.get(class).unwrap_or_default();
        let parameters = key
            .iter()
            .chain(settable(entry, key, lifted))
            .map(|p| Placeholder::new(p, &[class, p.as_str()]))
            .collect();
        Self {
            class: class.to_string(),
            parameters,
        }
    }
}

impl ParameterShape for NodeContract {
    fn template_key(&self) -> &str {
        &self.class
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        self.parameters.iter().collect()
    }
}

/// Parameters of one relationship template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipContract {
    /// `<Source>_<rel>_<Target>`.
    pub relation_key: String,
    /// Source key, under `data[key]['source'][<Source>]`.
    pub source: Vec<Placeholder>,
    /// Target key, under `data[key]['target'][<Target>]`.
    pub target: Vec<Placeholder>,
    /// The target's value property, stored on the edge.
    pub edge: Option<Placeholder>,
}

impl RelationshipContract {
    fn derive(rel: &Relationship, keys: &KeyConfig, values: &ValueConfig) -> Self {
        let relation_key = rel.relation_key();
        let side = |role: &str, class: &str| -> Vec<Placeholder> {
            keys.get(class)
                .unwrap_or_default()
                .iter()
                .map(|p| Placeholder::new(p, &[relation_key.as_str(), role, class, p.as_str()]))
                .collect()
        };
        let source = side(SOURCE, &rel.source);
        let target = side(TARGET, &rel.target);
        let edge = values
            .get(&rel.target)
            .map(|v| Placeholder::new(v, &[relation_key.as_str(), TARGET, rel.target.as_str(), v]));
        Self {
            relation_key,
            source,
            target,
            edge,
        }
    }
}

impl ParameterShape for RelationshipContract {
    fn template_key(&self) -> &str {
        &self.relation_key
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        self.source
            .iter()
            .chain(&self.target)
            .chain(self.edge.as_ref())
            .collect()
    }
}

/// Contracts of every compiled template, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataContract {
    /// Node contracts in schema class order.
    pub nodes: Vec<NodeContract>,
    /// Relationship contracts in schema relationship order.
    pub relationships: Vec<RelationshipContract>,
}

impl DataContract {
    /// Derives the contract for a validated schema and configuration.
    #[must_use]
    pub fn derive(schema: &Schema, keys: &KeyConfig, values: &ValueConfig) -> Self {
        let nodes = schema
            .classes
            .iter()
            .map(|entry| NodeContract::derive(entry, keys, lifted_value(schema, values, &entry.name)))
            .collect();
        let relationships = schema
            .relationships
            .iter()
            .map(|rel| RelationshipContract::derive(rel, keys, values))
            .collect();
        Self {
            nodes,
            relationships,
        }
    }

    /// Contract of the node template for `class`.
    #[must_use]
    pub fn node(&self, class: &str) -> Option<&NodeContract> {
        self.nodes.iter().find(|n| n.class == class)
    }

    /// Contract of the relationship template for `relation_key`.
    #[must_use]
    pub fn relationship(&self, relation_key: &str) -> Option<&RelationshipContract> {
        self.relationships
            .iter()
            .find(|r| r.relation_key == relation_key)
    }

    /// Every contract, nodes first.
    pub fn shapes(&self) -> impl Iterator<Item = &dyn ParameterShape> {
        self.nodes
            .iter()
            .map(|n| n as &dyn ParameterShape)
            .chain(self.relationships.iter().map(|r| r as &dyn ParameterShape))
    }
}
