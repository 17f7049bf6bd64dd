//! Fundamental loop and cut-set matrices.

use log::trace;

use crate::error::{KirchhoffError, Result};
use crate::matrix::{Matrix, Scalar};

/// The fundamental loop matrix `B` and cut-set matrix `D` of a tree-ordered
/// circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct FundamentalMatrices {
    /// `B = [B_T | 1]`, one KVL row per link branch.
    pub loops: Matrix<i32>,
    /// `D = [1 | D_L]`, one KCL row per tree branch.
    pub cutsets: Matrix<i32>,
}

impl FundamentalMatrices {
    /// Derive `B` and `D` from the reduced incidence matrix `A = [A_T | A_L]`
    /// of a circuit whose first `N - 1` branches form a spanning tree.
    ///
    /// ```text
    /// B_T = -(A_T^-1 * A_L)^T      B = [B_T | 1]
    /// D_L = -B_T^T                 D = [1 | D_L]
    /// ```
    ///
    /// `A_T` is inverted in `T`; the entries of both results are integral
    /// and are rounded into `i32`.
    pub fn from_incidence<T: Scalar>(incidence: &Matrix<T>) -> Result<Self> {
        let (nodes, branches) = incidence.shape();
        if branches < nodes {
            return Err(KirchhoffError::dimension(
                "fundamental matrices",
                format!("{branches} branches cannot hold a spanning tree over {nodes} independent nodes"),
            ));
        }
        let links = branches - nodes;

        let a_tree = incidence.slice(nodes, nodes, 0, 0)?;
        let a_link = incidence.slice(nodes, links, 0, nodes)?;

        let b_tree = (-a_tree.invert()?.multiply(&a_link)?).transpose();
        let loops = Matrix::augment(&[&b_tree, &Matrix::identity(links)])?;

        let d_link = b_tree.negate().transpose();
        let cutsets = Matrix::augment(&[&Matrix::identity(nodes), &d_link])?;

        trace!("B:\n{loops}\nD:\n{cutsets}");

        Ok(Self {
            loops: loops.round_to()?,
            cutsets: cutsets.round_to()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Circuit, Element};
    use crate::topology::{select_spanning_tree, to_reduced_incidence};

    fn fundamental(circuit: &Circuit) -> FundamentalMatrices {
        let tree = select_spanning_tree::<f64>(&circuit.normalize()).unwrap();
        let a: Matrix<f64> = to_reduced_incidence(&tree).unwrap();
        FundamentalMatrices::from_incidence(&a).unwrap()
    }

    fn sample() -> Circuit {
        Circuit::new(vec![
            Element::resistor("R", 0, 1),
            Element::inductor("L1", 1, 2),
            Element::capacitor("C", 1, 2),
            Element::voltage_source("E", 2, 0),
            Element::inductor("L2", 1, 2),
        ])
    }

    fn book() -> Circuit {
        Circuit::new(vec![
            Element::voltage_source("E1", 0, 3),
            Element::capacitor("C1", 0, 1),
            Element::capacitor("C2", 1, 3),
            Element::capacitor("C3", 4, 0),
            Element::inductor("L1", 1, 4),
            Element::inductor("L2", 3, 4),
            Element::inductor("L3", 1, 2),
            Element::inductor("L4", 2, 4),
        ])
    }

    #[test]
    fn test_sample_matrices() {
        let f = fundamental(&sample());
        assert_eq!(
            f.loops.to_rows(),
            vec![
                vec![1, 1, 1, 0, 0],
                vec![0, -1, 0, 1, 0],
                vec![0, -1, 0, 0, 1],
            ]
        );
        assert_eq!(
            f.cutsets.to_rows(),
            vec![vec![1, 0, -1, 0, 0], vec![0, 1, -1, 1, 1]]
        );
    }

    #[test]
    fn test_cutsets_are_orthogonal_to_loops() {
        for circuit in [sample(), book()] {
            let f = fundamental(&circuit);
            let product = f.cutsets.multiply(&f.loops.transpose()).unwrap();
            assert!(product.is_zero(), "D * B^T = {product}");
        }
    }

    #[test]
    fn test_shapes() {
        let f = fundamental(&book());
        assert_eq!(f.loops.shape(), (4, 8));
        assert_eq!(f.cutsets.shape(), (4, 8));
    }

    #[test]
    fn test_tree_only_circuit_has_no_loops() {
        let c = Circuit::new(vec![
            Element::voltage_source("E", 0, 1),
            Element::resistor("R", 1, 2),
        ]);
        let f = fundamental(&c);
        assert_eq!(f.loops.shape(), (0, 2));
        assert_eq!(f.cutsets.to_rows(), vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn test_loop_rows_annihilate_incidence() {
        let tree = select_spanning_tree::<f64>(&book().normalize()).unwrap();
        let a: Matrix<f64> = to_reduced_incidence(&tree).unwrap();
        let f = FundamentalMatrices::from_incidence(&a).unwrap();
        let b: Matrix<f64> = f.loops.map(|x| x as f64);
        assert!(a.multiply(&b.transpose()).unwrap().is_zero());
    }

    #[test]
    fn test_too_few_branches() {
        let a = Matrix::<f64>::identity(3).slice(3, 2, 0, 0).unwrap();
        assert!(matches!(
            FundamentalMatrices::from_incidence(&a),
            Err(KirchhoffError::DimensionMismatch { .. })
        ));
    }
}
