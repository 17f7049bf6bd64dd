//! Circuit graph representation and validation.
//!
//! A [`Circuit`] is an ordered list of two-terminal [`Element`]s, each with a
//! type, a tail node, a head node and a unique name. Node indices are dense
//! integers; the last node serves as the reference in every reduced matrix.

mod graph;
mod types;
mod validate;

pub use graph::Circuit;
pub use types::*;
pub use validate::validate_circuit;
