//! Uniqueness constraint statements.

use ontocypher_conformance::KeyConfig;

use crate::cypher::ident;

/// Name of the uniqueness constraint on `class`.
#[must_use]
pub fn constraint_name(class: &str) -> String {
    format!("constraint_for_node_{class}")
}

/// One `CREATE CONSTRAINT ... IF NOT EXISTS` statement per class with a
/// non-empty key, in class-name order.
#[must_use]
pub fn compile_constraints(keys: &KeyConfig) -> Vec<String> {
    keys.iter()
        .filter(|(_, key)| !key.is_empty())
        .map(|(class, key)| {
            let columns: Vec<String> = key.iter().map(|k| format!("n.{}", ident(k))).collect();
            format!(
                "CREATE CONSTRAINT {} IF NOT EXISTS FOR (n:{}) REQUIRE ({}) IS UNIQUE;",
                ident(&constraint_name(class)),
                ident(class),
                columns.join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn composite_key_constraint() {
        let keys: KeyConfig = [("Scope1", vec!["label", "period"])].into_iter().collect();
        assert_eq!(
            compile_constraints(&keys),
            vec![
                "CREATE CONSTRAINT constraint_for_node_Scope1 IF NOT EXISTS FOR (n:Scope1) \
                 REQUIRE (n.label, n.period) IS UNIQUE;"
                    .to_string()
            ]
        );
    }

    #[test]
    fn empty_keys_produce_no_constraint() {
        let keys: KeyConfig = [
            ("Company", vec!["LEI"]),
            ("Report", vec![]),
            ("Scope1", vec!["label"]),
        ]
        .into_iter()
        .collect();
        let stmts = compile_constraints(&keys);
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].contains("(n:Company) REQUIRE (n.LEI)"));
        assert!(stmts[1].contains("(n:Scope1)"));
    }

    #[test]
    fn odd_labels_are_escaped() {
        let keys: KeyConfig = [("Land-Use", vec!["site id"])].into_iter().collect();
        assert_eq!(
            compile_constraints(&keys)[0],
            "CREATE CONSTRAINT `constraint_for_node_Land-Use` IF NOT EXISTS \
             FOR (n:`Land-Use`) REQUIRE (n.`site id`) IS UNIQUE;"
        );
    }
}
