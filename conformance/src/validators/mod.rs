//! Configuration validators, one per configuration table.

pub mod keys;
pub mod values;
