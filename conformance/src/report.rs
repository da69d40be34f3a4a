//! Validation report types: defect kinds, individual defects, and the
//! aggregated report.

use std::fmt;

/// What is wrong with a configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefectKind {
    /// A class with properties has no entry in the key configuration.
    MissingKey,
    /// A class's key list is empty.
    EmptyKey,
    /// A listed key property does not belong to the class.
    UnknownKeyProperty,
    /// A relationship target declares no scalar property, so no value can be
    /// lifted onto its incoming edges. The ontology itself must change.
    PropertylessTarget,
    /// A relationship target has no entry in the value configuration.
    MissingValueProperty,
    /// A target's configured value property does not belong to it.
    UnknownValueProperty,
    /// A target's value property is also one of its key properties.
    ValueIsKey,
}

impl DefectKind {
    /// Short identifier used when rendering reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DefectKind::MissingKey => "keys/missing",
            DefectKind::EmptyKey => "keys/empty",
            DefectKind::UnknownKeyProperty => "keys/unknown-property",
            DefectKind::PropertylessTarget => "values/propertyless-target",
            DefectKind::MissingValueProperty => "values/missing",
            DefectKind::UnknownValueProperty => "values/unknown-property",
            DefectKind::ValueIsKey => "values/is-key",
        }
    }

    /// Returns true for defects that cannot be fixed in the configuration.
    #[must_use]
    pub fn is_schema_defect(self) -> bool {
        self == DefectKind::PropertylessTarget
    }
}

/// A single configuration defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    /// What kind of defect this is.
    pub kind: DefectKind,
    /// Class the defect concerns.
    pub class: String,
    /// Property the defect concerns, if any.
    pub property: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl Defect {
    /// `class` has properties but no key entry.
    pub fn missing_key(class: impl Into<String>) -> Self {
        let class = class.into();
        Self {
            kind: DefectKind::MissingKey,
            message: format!("no key property provided for class \"{class}\""),
            class,
            property: None,
        }
    }

    /// `class` has an empty key list.
    pub fn empty_key(class: impl Into<String>) -> Self {
        let class = class.into();
        Self {
            kind: DefectKind::EmptyKey,
            message: format!("key list for class \"{class}\" is empty"),
            class,
            property: None,
        }
    }

    /// `property` is listed as a key of `class` but is not one of its
    /// properties.
    pub fn unknown_key_property(class: impl Into<String>, property: impl Into<String>) -> Self {
        let (class, property) = (class.into(), property.into());
        Self {
            kind: DefectKind::UnknownKeyProperty,
            message: format!("key property \"{property}\" is not a property of class \"{class}\""),
            class,
            property: Some(property),
        }
    }

    /// Relationship target `class` has no scalar property.
    pub fn propertyless_target(class: impl Into<String>) -> Self {
        let class = class.into();
        Self {
            kind: DefectKind::PropertylessTarget,
            message: format!(
                "target class \"{class}\" has no properties, so relationship values cannot be set"
            ),
            class,
            property: None,
        }
    }

    /// Relationship target `class` has no value property configured.
    pub fn missing_value_property(class: impl Into<String>) -> Self {
        let class = class.into();
        Self {
            kind: DefectKind::MissingValueProperty,
            message: format!("no value property provided for target class \"{class}\""),
            class,
            property: None,
        }
    }

    /// The value property configured for `class` is not one of its
    /// properties.
    pub fn unknown_value_property(class: impl Into<String>, property: impl Into<String>) -> Self {
        let (class, property) = (class.into(), property.into());
        Self {
            kind: DefectKind::UnknownValueProperty,
            message: format!(
                "value property \"{property}\" is not a property of target class \"{class}\""
            ),
            class,
            property: Some(property),
        }
    }

    /// The value property of target `class` is part of its key.
    pub fn value_is_key(class: impl Into<String>, property: impl Into<String>) -> Self {
        let (class, property) = (class.into(), property.into());
        Self {
            kind: DefectKind::ValueIsKey,
            message: format!(
                "value property \"{property}\" of target class \"{class}\" is also a key property; \
                 it belongs on the edge, not the shared node"
            ),
            class,
            property: Some(property),
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

/// Every defect found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects in discovery order: key defects first, then value defects.
    pub defects: Vec<Defect>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends defects to this report.
    pub fn extend(&mut self, defects: impl IntoIterator<Item = Defect>) {
        self.defects.extend(defects);
    }

    /// Number of defects.
    #[must_use]
    pub fn defect_count(&self) -> usize {
        self.defects.len()
    }

    /// Returns true if no defect was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    /// Defects of the given kind.
    pub fn of_kind(&self, kind: DefectKind) -> impl Iterator<Item = &Defect> {
        self.defects.iter().filter(move |d| d.kind == kind)
    }

    /// Converts a non-empty report into [`crate::ConfigError::SchemaConfig`].
    ///
    /// # Errors
    ///
    /// Returns the report itself, wrapped, if it holds any defect.
    pub fn into_result(self) -> Result<(), crate::ConfigError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(crate::ConfigError::SchemaConfig(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} configuration defect(s)", self.defects.len())?;
        for defect in &self.defects {
            write!(f, "\n  {defect}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clean_report_is_ok() {
        assert!(ValidationReport::new().into_result().is_ok());
    }

    #[test]
    fn display_lists_every_defect() {
        let mut report = ValidationReport::new();
        report.extend([Defect::missing_key("Waste"), Defect::unknown_value_property("Land", "area")]);
        let text = report.to_string();
        assert!(text.starts_with("2 configuration defect(s)"));
        assert!(text.contains("[keys/missing] no key property provided for class \"Waste\""));
        assert!(text.contains("\"area\""));
    }

    #[test]
    fn only_propertyless_targets_are_schema_defects() {
        assert!(DefectKind::PropertylessTarget.is_schema_defect());
        assert!(!DefectKind::MissingValueProperty.is_schema_defect());
    }
}
