//! Property-based tests for identifier resolution.
//!
//! The split must be total on identifiers with a delimiter, lossless, and
//! must pick `#` over `/` over `:`.

use ontocypher_ontology::iri::resolve;
use proptest::prelude::*;

// Path segments and local names never contain a delimiter themselves.
const SEGMENT: &str = "[A-Za-z0-9_.-]{1,12}";

proptest! {
    /// namespace + local name reproduces the identifier.
    #[test]
    fn prop_split_is_lossless(iri in "[A-Za-z0-9_.:/#-]{0,40}") {
        if let Ok((ns, local)) = resolve(&iri) {
            prop_assert_eq!(format!("{ns}{local}"), iri);
        } else {
            prop_assert!(!iri.contains(['#', '/', ':']));
        }
    }

    /// With a `#` present, the split is at the last `#`.
    #[test]
    fn prop_hash_has_priority(base in "[a-z]{1,8}://[a-z]{1,8}(/[a-z]{1,8}){0,3}", frag in SEGMENT) {
        let iri = format!("{base}#{frag}");
        let (ns, local) = resolve(&iri).unwrap();
        prop_assert_eq!(ns, format!("{base}#"));
        prop_assert_eq!(local, frag);
    }

    /// With `/` but no `#`, the split is at the last `/`.
    #[test]
    fn prop_slash_when_no_hash(host in SEGMENT, path in proptest::collection::vec(SEGMENT, 1..4)) {
        let iri = format!("http://{host}/{}", path.join("/"));
        let (_, local) = resolve(&iri).unwrap();
        prop_assert_eq!(local, path.last().map(String::as_str).unwrap());
    }

    /// With neither `#` nor `/`, the split is at the last `:`.
    #[test]
    fn prop_colon_fallback(parts in proptest::collection::vec(SEGMENT, 2..5)) {
        let iri = parts.join(":");
        let (ns, local) = resolve(&iri).unwrap();
        prop_assert!(ns.ends_with(':'));
        prop_assert_eq!(local, parts.last().map(String::as_str).unwrap());
    }
}
