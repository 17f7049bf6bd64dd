//! Node-branch incidence matrices.

use crate::circuit::Circuit;
use crate::error::Result;
use crate::matrix::{Matrix, Scalar};

/// Build the `nodes x branches` incidence matrix.
///
/// Entry `[node][branch]` is `+1` when the branch leaves `node` (its tail),
/// `-1` when it enters `node` (its head) and `0` otherwise. A self-loop
/// contributes `+1 - 1` to the same cell and so yields a zero column.
pub fn to_incidence<T: Scalar>(circuit: &Circuit) -> Matrix<T> {
    let mut incidence = Matrix::zeros(circuit.node_count(), circuit.branch_count());

    for (col, element) in circuit.iter().enumerate() {
        incidence[(element.tail, col)] = incidence[(element.tail, col)] + T::one();
        incidence[(element.head, col)] = incidence[(element.head, col)] - T::one();
    }

    incidence
}

/// The incidence matrix without the reference node's row.
///
/// The dropped row is the negated sum of the others, so the remaining rows
/// are the independent KCL equations. Requires at least two nodes.
pub fn to_reduced_incidence<T: Scalar>(circuit: &Circuit) -> Result<Matrix<T>> {
    to_incidence(circuit).reduce_last_row()
}
