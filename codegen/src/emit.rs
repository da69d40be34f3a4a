//! Writes compiled artifacts to disk.
//!
//! Layout under the output directory:
//!
//! ```text
//! bootstrap.cypher
//! namespaces.cypher
//! constraints.cypher
//! teardown.cypher
//! nodes/<Class>.cypher
//! relationships/<Source>_<rel>_<Target>.cypher
//! data_needed/<Class | relation key>.json
//! artifacts.json          every family, the contract and the source schema
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::artifacts::{ArtifactSummary, CompiledArtifacts};
use crate::contract::ParameterShape;

/// Report of what was written.
#[derive(Debug, Default, Serialize)]
pub struct EmitReport {
    /// Statement counts.
    pub summary: ArtifactSummary,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
}

/// Writes `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Joins statements into a script, one per paragraph.
#[must_use]
pub fn script(statements: &[String]) -> String {
    let mut out = statements.join("\n\n");
    out.push('\n');
    out
}

/// Writes every artifact family and the data-needed samples into `out_dir`.
///
/// # Errors
///
/// Returns an error if any file cannot be written or serialized.
pub fn write_artifacts(artifacts: &CompiledArtifacts, out_dir: &Path) -> Result<EmitReport> {
    let mut report = EmitReport {
        summary: artifacts.summary(),
        files: Vec::new(),
    };
    let mut emit = |relative: String, content: &str| -> Result<()> {
        write_file(&out_dir.join(&relative), content)?;
        report.files.push(relative);
        Ok(())
    };

    emit("bootstrap.cypher".into(), &script(&artifacts.bootstrap))?;
    emit("namespaces.cypher".into(), &script(&artifacts.namespaces))?;
    emit("constraints.cypher".into(), &script(&artifacts.constraints))?;
    emit("teardown.cypher".into(), &script(&artifacts.teardown))?;

    for (class, template) in artifacts.nodes.iter() {
        emit(format!("nodes/{class}.cypher"), &format!("{template}\n"))?;
    }
    for (relation_key, template) in artifacts.relationships.iter() {
        emit(format!("relationships/{relation_key}.cypher"), &format!("{template}\n"))?;
    }
    for shape in artifacts.contract.shapes() {
        let sample = serde_json::to_string_pretty(&shape.sample())
            .with_context(|| format!("Failed to serialize sample for {}", shape.template_key()))?;
        emit(format!("data_needed/{}.json", shape.template_key()), &sample)?;
    }

    let summary = serde_json::to_string_pretty(artifacts).context("Failed to serialize artifacts")?;
    emit("artifacts.json".into(), &summary)?;

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::artifacts::TemplateMap;
    use crate::contract::DataContract;
    use ontocypher_ontology::Schema;

    #[test]
    fn script_separates_statements() {
        assert_eq!(script(&["A;".into(), "B;".into()]), "A;\n\nB;\n");
        assert_eq!(script(&[]), "\n");
    }

    #[test]
    fn writes_layout() {
        let dir = std::env::temp_dir().join(format!("ontocypher-emit-{}", std::process::id()));
        let mut nodes = TemplateMap::new();
        nodes.insert("Company".into(), "MERGE (n:Company)".into());
        let artifacts = CompiledArtifacts {
            constraints: vec![],
            nodes,
            relationships: TemplateMap::new(),
            namespaces: vec![],
            bootstrap: vec!["B;".into()],
            teardown: vec![],
            contract: DataContract::default(),
            schema: Schema::default(),
        };
        let report = write_artifacts(&artifacts, &dir);
        assert!(report.is_ok());
        let files = report.map(|r| r.files).unwrap();
        assert!(files.contains(&"nodes/Company.cypher".to_string()));
        assert!(files.contains(&"artifacts.json".to_string()));
        let node = std::fs::read_to_string(dir.join("nodes/Company.cypher")).unwrap();
        assert_eq!(node, "MERGE (n:Company)\n");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
