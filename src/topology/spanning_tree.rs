//! Spanning-tree selection by rank-revealing elimination.

use log::{debug, trace};

use super::incidence::to_reduced_incidence;
use crate::circuit::{Circuit, Element};
use crate::error::{KirchhoffError, Result};
use crate::matrix::Scalar;

/// A circuit reordered so that tree branches precede link branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    circuit: Circuit,
    tree_count: usize,
}

impl SpanningTree {
    /// The tree-ordered circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }

    /// Branches of the spanning tree (the first `N - 1`).
    pub fn tree_branches(&self) -> &[Element] {
        &self.circuit.elements()[..self.tree_count]
    }

    /// Branches that each close one fundamental loop.
    pub fn link_branches(&self) -> &[Element] {
        &self.circuit.elements()[self.tree_count..]
    }

    pub fn tree_count(&self) -> usize {
        self.tree_count
    }

    pub fn link_count(&self) -> usize {
        self.circuit.branch_count() - self.tree_count
    }
}

/// Partition the branches into a spanning tree and its links.
///
/// The reduced incidence matrix is brought to echelon form with a permissive
/// forward pass. Walking its columns left to right, a column holding the
/// pivot of the current echelon row is a tree branch and consumes that row;
/// every other column is a link. Both groups keep their relative order.
///
/// Fails with [`KirchhoffError::DisconnectedCircuit`] when fewer than
/// `N - 1` tree branches are found.
pub fn partition_spanning_tree<T: Scalar>(circuit: &Circuit) -> Result<SpanningTree> {
    let reduced = to_reduced_incidence::<T>(circuit)?;
    let echelon = reduced.echelon()?;
    trace!("reduced incidence echelon form:\n{}", echelon.matrix);

    let rows = echelon.matrix.rows();
    let mut tree = Vec::with_capacity(rows);
    let mut links = Vec::with_capacity(circuit.branch_count().saturating_sub(rows));
    let mut row = 0;

    for col in 0..circuit.branch_count() {
        if row < rows && echelon.matrix[(row, col)].approx_eq(T::one()) {
            tree.push(col);
            row += 1;
        } else {
            links.push(col);
        }
    }

    if tree.len() < rows {
        return Err(KirchhoffError::DisconnectedCircuit {
            nodes: circuit.node_count(),
            required: rows,
            tree_branches: tree.len(),
        });
    }

    let tree_count = tree.len();
    let circuit = circuit.reordered(tree.into_iter().chain(links));
    debug!(
        "spanning tree: [{}], links: [{}]",
        names(&circuit.elements()[..tree_count]),
        names(&circuit.elements()[tree_count..])
    );

    Ok(SpanningTree {
        circuit,
        tree_count,
    })
}

/// Reorder a circuit so that a spanning tree occupies its first `N - 1`
/// branches.
pub fn select_spanning_tree<T: Scalar>(circuit: &Circuit) -> Result<Circuit> {
    partition_spanning_tree::<T>(circuit).map(SpanningTree::into_circuit)
}

fn names(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
