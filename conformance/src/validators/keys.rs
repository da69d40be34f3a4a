//! Key configuration validator.
//!
//! Every class that declares scalar properties needs a non-empty key made
//! only of its own properties:
//! - a class missing from the key table is a defect
//! - an empty key list is a defect
//! - each listed property the class does not declare is its own defect

use ontocypher_ontology::ClassSchema;

use crate::config::KeyConfig;
use crate::report::Defect;

/// Checks `keys` against `classes` and returns every defect found.
#[must_use]
pub fn validate_keys(classes: &ClassSchema, keys: &KeyConfig) -> Vec<Defect> {
    let mut defects = Vec::new();

    for class in classes {
        match keys.get(&class.name) {
            None => defects.push(Defect::missing_key(&class.name)),
            Some([]) => defects.push(Defect::empty_key(&class.name)),
            Some(list) => defects.extend(
                list.iter()
                    .filter(|key| !class.has_property(key))
                    .map(|key| Defect::unknown_key_property(&class.name, key)),
            ),
        }
    }

    // Entries for classes the ontology does not describe are harmless to
    // compile but usually a typo.
    for (class, _) in keys.iter() {
        if classes.get(class).is_none() {
            tracing::warn!(class, "key configured for a class without scalar properties");
        }
    }

    defects
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::report::DefectKind;

    fn classes() -> ClassSchema {
        let mut s = ClassSchema::new();
        s.add_property("Company", "LEI");
        s.add_property("Company", "name");
        s.add_property("Waste", "label");
        s.add_property("Waste", "period");
        s.add_property("Waste", "tons");
        s
    }

    #[test]
    fn complete_keys_pass() {
        let keys: KeyConfig = [("Company", vec!["LEI"]), ("Waste", vec!["label", "period"])]
            .into_iter()
            .collect();
        assert!(validate_keys(&classes(), &keys).is_empty());
    }

    #[test]
    fn omitted_class_is_one_defect() {
        let keys: KeyConfig = [("Company", vec!["LEI"])].into_iter().collect();
        let defects = validate_keys(&classes(), &keys);
        assert_eq!(defects.len(), 1);
        assert_eq!(defects[0].kind, DefectKind::MissingKey);
        assert_eq!(defects[0].class, "Waste");
    }

    #[test]
    fn every_defect_is_collected() {
        let keys: KeyConfig = [
            ("Company", vec![]),
            ("Waste", vec!["label", "site", "plant"]),
        ]
        .into_iter()
        .collect();
        let defects = validate_keys(&classes(), &keys);
        let kinds: Vec<_> = defects.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DefectKind::EmptyKey,
                DefectKind::UnknownKeyProperty,
                DefectKind::UnknownKeyProperty,
            ]
        );
        assert_eq!(defects[1].property.as_deref(), Some("site"));
        assert_eq!(defects[2].property.as_deref(), Some("plant"));
    }

    #[test]
    fn propertyless_classes_need_no_key() {
        let mut s = classes();
        s.add_propertyless("Report");
        let keys: KeyConfig = [("Company", vec!["LEI"]), ("Waste", vec!["label"])]
            .into_iter()
            .collect();
        assert!(validate_keys(&s, &keys).is_empty());
    }
}
