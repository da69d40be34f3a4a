//! Value configuration validator.
//!
//! Every relationship target must name exactly one of its own properties as
//! the value carried by its incoming edges, and that property must not be
//! part of the target's key. A target that declares no property at all
//! cannot satisfy this; that is reported once and the class is not checked
//! further. Targets the ontology never declares are left to the compiler.

use ontocypher_ontology::{ClassSchema, RelationshipSchema};

use crate::config::{KeyConfig, ValueConfig};
use crate::report::Defect;

/// Checks `values` for every target class in `relationships`.
#[must_use]
pub fn validate_value_props(
    classes: &ClassSchema,
    relationships: &RelationshipSchema,
    values: &ValueConfig,
) -> Vec<Defect> {
    let mut defects = Vec::new();

    for target in relationships.targets() {
        if classes.is_propertyless(target) {
            defects.push(Defect::propertyless_target(target));
            continue;
        }
        // Undeclared targets are a compiler contract violation, not a
        // configuration defect.
        let Some(entry) = classes.get(target) else {
            continue;
        };
        match values.get(target) {
            None => defects.push(Defect::missing_value_property(target)),
            Some(property) if !entry.has_property(property) => {
                defects.push(Defect::unknown_value_property(target, property));
            }
            Some(_) => {}
        }
    }

    defects
}

/// Checks that no target's value property is also one of its key
/// properties. The value must stay off the shared target node.
#[must_use]
pub fn validate_value_not_key(
    relationships: &RelationshipSchema,
    keys: &KeyConfig,
    values: &ValueConfig,
) -> Vec<Defect> {
    relationships
        .targets()
        .into_iter()
        .filter_map(|target| {
            let property = values.get(target)?;
            let key = keys.get(target)?;
            key.iter()
                .any(|k| k == property)
                .then(|| Defect::value_is_key(target, property))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::report::DefectKind;
    use ontocypher_ontology::Relationship;

    fn classes() -> ClassSchema {
        let mut s = ClassSchema::new();
        s.add_property("Company", "LEI");
        for class in ["Scope1", "Land"] {
            s.add_property(class, "label");
            s.add_property(class, "period");
        }
        s.add_property("Scope1", "tonsCO2Eq");
        s.add_property("Land", "hectares");
        s.add_propertyless("Report");
        s
    }

    fn rel(name: &str, target: &str) -> Relationship {
        Relationship {
            name: name.into(),
            iri: format!("http://example.org/esg#{name}"),
            source: "Company".into(),
            target: target.into(),
        }
    }

    fn relationships() -> RelationshipSchema {
        vec![rel("emits", "Scope1"), rel("occupies", "Land"), rel("reports", "Scope1")]
            .into_iter()
            .collect()
    }

    #[test]
    fn correct_values_pass() {
        let values: ValueConfig = [("Scope1", "tonsCO2Eq"), ("Land", "hectares")]
            .into_iter()
            .collect();
        assert!(validate_value_props(&classes(), &relationships(), &values).is_empty());
    }

    #[test]
    fn foreign_value_property_is_one_defect() {
        let values: ValueConfig = [("Scope1", "tonsCO2Eq"), ("Land", "area")]
            .into_iter()
            .collect();
        let defects = validate_value_props(&classes(), &relationships(), &values);
        assert_eq!(defects.len(), 1);
        assert_eq!(defects[0].kind, DefectKind::UnknownValueProperty);
        assert_eq!(defects[0].class, "Land");
        assert_eq!(defects[0].property.as_deref(), Some("area"));
    }

    #[test]
    fn targets_reached_twice_are_reported_once() {
        let defects = validate_value_props(&classes(), &relationships(), &ValueConfig::new());
        let classes: Vec<_> = defects.iter().map(|d| d.class.as_str()).collect();
        assert_eq!(classes, vec!["Scope1", "Land"]);
        assert!(defects.iter().all(|d| d.kind == DefectKind::MissingValueProperty));
    }

    #[test]
    fn propertyless_target_is_a_distinct_defect() {
        let rels: RelationshipSchema = vec![rel("publishes", "Report")].into_iter().collect();
        let values: ValueConfig = [("Report", "title")].into_iter().collect();
        let defects = validate_value_props(&classes(), &rels, &values);
        assert_eq!(defects.len(), 1);
        assert_eq!(defects[0].kind, DefectKind::PropertylessTarget);
        assert!(defects[0].kind.is_schema_defect());
    }

    #[test]
    fn value_entries_for_non_targets_are_ignored() {
        let values: ValueConfig = [("Scope1", "tonsCO2Eq"), ("Land", "hectares"), ("Company", "nope")]
            .into_iter()
            .collect();
        assert!(validate_value_props(&classes(), &relationships(), &values).is_empty());
    }

    #[test]
    fn undeclared_target_is_left_to_the_compiler() {
        let rels: RelationshipSchema = vec![rel("emits", "Scope9")].into_iter().collect();
        assert!(validate_value_props(&classes(), &rels, &ValueConfig::new()).is_empty());
    }

    #[test]
    fn value_property_inside_the_key_is_a_defect() {
        let keys: KeyConfig = [("Scope1", vec!["label", "tonsCO2Eq"]), ("Land", vec!["label"])]
            .into_iter()
            .collect();
        let values: ValueConfig = [("Scope1", "tonsCO2Eq"), ("Land", "hectares")]
            .into_iter()
            .collect();
        let defects = validate_value_not_key(&relationships(), &keys, &values);
        assert_eq!(defects.len(), 1);
        assert_eq!(defects[0].kind, DefectKind::ValueIsKey);
        assert_eq!(defects[0].class, "Scope1");
        assert_eq!(defects[0].property.as_deref(), Some("tonsCO2Eq"));
    }
}
