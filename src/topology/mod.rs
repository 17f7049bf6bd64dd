//! Circuit topology: incidence matrices and spanning-tree selection.
//!
//! The incidence matrix encodes which nodes each branch touches and with what
//! orientation. Dropping the reference node's row leaves one independent KCL
//! equation per remaining node. Row-reducing that matrix reveals a set of
//! linearly independent columns, which are exactly the branches of a
//! spanning tree.

mod incidence;
mod spanning_tree;

pub use incidence::{to_incidence, to_reduced_incidence};
pub use spanning_tree::{partition_spanning_tree, select_spanning_tree, SpanningTree};
