//! ontocypher configuration conformance.
//!
//! Loads the hand-authored key/value configuration and checks it against a
//! schema extracted from an ontology. Validation never stops at the first
//! problem: every defect in both tables is collected into one
//! [`ValidationReport`].
//!
//! | Table | Rule |
//! |-------|------|
//! | `keys` | every class with scalar properties has a non-empty key of its own properties |
//! | `values` | every relationship target names one of its own properties as the edge value |
//! | `keys` × `values` | a target's edge value is never part of its key |
//!
//! # Entry Point
//!
//! ```
//! use ontocypher_conformance::{validate, KeyConfig, ModelConfig, ValueConfig};
//! use ontocypher_ontology::{fixtures, schema_from_turtle};
//!
//! let schema = schema_from_turtle(fixtures::EMISSIONS).unwrap();
//! let keys: KeyConfig = [("Company", vec!["LEI"]), ("Scope1", vec!["label", "period"])]
//!     .into_iter()
//!     .collect();
//! let values: ValueConfig = [("Scope1", "tonsCO2Eq")].into_iter().collect();
//!
//! let report = validate(&schema, &ModelConfig::new(keys, values));
//! assert!(report.is_clean());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod report;
pub mod validators;

use ontocypher_ontology::Schema;
use thiserror::Error;

pub use config::{GraphSettings, KeyConfig, ModelConfig, MultiValue, RdfTypes, ValueConfig, VocabUris};
pub use report::{Defect, DefectKind, ValidationReport};
pub use validators::keys::validate_keys;
pub use validators::values::{validate_value_not_key, validate_value_props};

/// Failures of configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration does not fit the schema. Carries every defect.
    #[error("{0}")]
    SchemaConfig(ValidationReport),

    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML configuration.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid JSON configuration.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither `.toml` nor `.json`.
    #[error("unsupported configuration format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Validates both configuration tables against `schema`.
///
/// Key defects come first, then value defects, then values that are also
/// keys.
#[must_use]
pub fn validate(schema: &Schema, config: &ModelConfig) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.extend(validate_keys(&schema.classes, &config.keys));
    report.extend(validate_value_props(
        &schema.classes,
        &schema.relationships,
        &config.values,
    ));
    report.extend(validate_value_not_key(
        &schema.relationships,
        &config.keys,
        &config.values,
    ));
    if !report.is_clean() {
        tracing::debug!(defects = report.defect_count(), "configuration rejected");
    }
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ontocypher_ontology::{fixtures, schema_from_turtle};

    fn esg() -> Schema {
        schema_from_turtle(fixtures::ESG).unwrap()
    }

    fn esg_keys() -> KeyConfig {
        [
            ("Company", vec!["LEI"]),
            ("Scope1", vec!["label", "period"]),
            ("Scope2", vec!["label", "period"]),
            ("Waste", vec!["label", "period"]),
            ("Land", vec!["label", "period"]),
        ]
        .into_iter()
        .collect()
    }

    fn esg_values() -> ValueConfig {
        [
            ("Scope1", "tonsCO2Eq"),
            ("Scope2", "tonsCO2Eq"),
            ("Waste", "tons"),
            ("Land", "hectares"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn esg_configuration_is_clean() {
        let report = validate(&esg(), &ModelConfig::new(esg_keys(), esg_values()));
        assert!(report.is_clean(), "{report}");
    }

    #[test]
    fn waste_without_key_is_exactly_one_defect() {
        let keys: KeyConfig = esg_keys()
            .iter()
            .filter(|(class, _)| *class != "Waste")
            .map(|(c, k)| (c.to_string(), k.to_vec()))
            .collect();
        let report = validate(&esg(), &ModelConfig::new(keys, esg_values()));
        assert_eq!(report.defect_count(), 1);
        assert_eq!(report.defects[0].class, "Waste");
        assert_eq!(report.defects[0].kind, DefectKind::MissingKey);
    }

    #[test]
    fn land_with_foreign_value_is_exactly_one_defect() {
        let mut values = esg_values();
        values.insert("Land", "area");
        let report = validate(&esg(), &ModelConfig::new(esg_keys(), values));
        assert_eq!(report.defect_count(), 1);
        let defect = &report.defects[0];
        assert_eq!(defect.class, "Land");
        assert_eq!(defect.property.as_deref(), Some("area"));
        assert!(defect.message.contains("Land") && defect.message.contains("area"));
    }

    #[test]
    fn independent_defects_are_all_reported() {
        let mut keys = esg_keys();
        keys.insert("Company", vec![]);
        keys.insert("Scope2", vec!["label".into(), "year".into()]);
        let mut values = esg_values();
        values.insert("Waste", "kilograms");
        values.insert("Scope1", "tons");
        let report = validate(&esg(), &ModelConfig::new(keys, values));
        assert_eq!(report.defect_count(), 4);
    }

    #[test]
    fn report_converts_into_schema_config_error() {
        let report = validate(&esg(), &ModelConfig::default());
        let defects = report.defect_count();
        assert!(matches!(
            report.into_result(),
            Err(ConfigError::SchemaConfig(r)) if r.defect_count() == defects
        ));
    }

    #[test]
    fn propertyless_target_from_turtle() {
        let schema = schema_from_turtle(fixtures::PROPERTYLESS_TARGET).unwrap();
        let keys: KeyConfig = [("Company", vec!["LEI"])].into_iter().collect();
        let report = validate(&schema, &ModelConfig::new(keys, ValueConfig::new()));
        let kinds: Vec<_> = report.defects.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DefectKind::PropertylessTarget]);
    }

    #[test]
    fn value_property_used_as_key_is_rejected() {
        let mut keys = esg_keys();
        keys.insert("Scope1", vec!["label".into(), "tonsCO2Eq".into()]);
        let report = validate(&esg(), &ModelConfig::new(keys, esg_values()));
        assert_eq!(report.defect_count(), 1);
        assert_eq!(report.defects[0].kind, DefectKind::ValueIsKey);
        assert_eq!(report.defects[0].class, "Scope1");
    }
}
