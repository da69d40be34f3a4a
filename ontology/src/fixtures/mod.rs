//! Turtle ontologies used by the tests of every workspace crate.
//!
//! Each constant is a self-contained Turtle 1.1 document. They are public so
//! that the conformance and codegen crates can exercise the full
//! load → extract → validate → compile pipeline against the same inputs.

mod emissions;
mod esg;
mod malformed;

pub use emissions::EMISSIONS;
pub use esg::ESG;
pub use malformed::{AMBIGUOUS_RELATION, PROPERTYLESS_TARGET, UNDECLARED_SOURCE, UNDECLARED_TARGET};
