//! Cypher text helpers shared by every template family.

/// Name of the single map parameter every template binds.
pub const PARAM: &str = "data";

/// Accumulates a multi-line statement.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    /// Statement text so far.
    pub buf: String,
}

impl QueryBuilder {
    /// Starts a template that binds `$data` as `data`.
    #[must_use]
    pub fn with_data() -> Self {
        let mut q = Self::default();
        q.line(format!("WITH ${PARAM} AS {PARAM}"));
        q
    }

    /// Appends one clause on its own line.
    pub fn line(&mut self, clause: impl AsRef<str>) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        self.buf.push_str(clause.as_ref());
    }

    /// Closes an upsert template with the row count every template returns.
    #[must_use]
    pub fn finish_upsert(mut self) -> String {
        self.line("RETURN count(*) AS total");
        self.buf
    }
}

/// Escapes a label, relationship type or property key when it is not a
/// plain identifier.
#[must_use]
pub fn ident(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        name.to_string()
    } else {
        format!("`{}`", name.replace('`', "``"))
    }
}

/// Escapes text for a single-quoted string literal.
#[must_use]
pub fn quote(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// `data['a']['b']...`: the expression reading one nested bundle entry.
#[must_use]
pub fn param_path<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::from(PARAM);
    for segment in path {
        out.push_str("['");
        out.push_str(&quote(segment.as_ref()));
        out.push_str("']");
    }
    out
}

/// ` {k1: v1, k2: v2}` for a MERGE/MATCH pattern, or nothing when empty.
#[must_use]
pub fn property_map<'a>(entries: impl IntoIterator<Item = (&'a str, String)>) -> String {
    let body: Vec<String> = entries
        .into_iter()
        .map(|(key, value)| format!("{}: {value}", ident(key)))
        .collect();
    if body.is_empty() {
        String::new()
    } else {
        format!(" {{{}}}", body.join(", "))
    }
}
