//! Main analysis interface.

use log::{debug, info};

use crate::circuit::{validate_circuit, Circuit};
use crate::error::Result;
use crate::matrix::{Matrix, Scalar};
use crate::topology::{partition_spanning_tree, to_reduced_incidence, SpanningTree};
use crate::{CURRENT_SYMBOL, VOLTAGE_SYMBOL};

use super::equations::{matrix_to_equations, Equations, SystemOfEquations};
use super::fundamental::FundamentalMatrices;
use super::model::model_equations;

/// Configuration for the analysis.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Stable-sort the branches by type before selecting the spanning tree.
    pub normalize: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { normalize: true }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable normalization.
    ///
    /// With normalization off, the tree is chosen from the branches in the
    /// order they were given.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

/// The full topological analysis of one circuit.
///
/// Everything is computed up front by [`Analysis::new`]; the accessors only
/// borrow the results.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The circuit as given
    circuit: Circuit,
    /// The circuit the tree was selected from
    normalized: Circuit,
    /// Tree-first reordering of `normalized`
    tree: SpanningTree,
    /// Reduced incidence of the tree-ordered circuit
    incidence: Matrix<i32>,
    fundamental: FundamentalMatrices,
    kcl: Equations,
    kvl: Equations,
    incidence_kcl: Equations,
    model: SystemOfEquations,
}

impl Analysis {
    /// Analyze a circuit with the default configuration and `f64` elimination.
    pub fn new(circuit: Circuit) -> Result<Self> {
        Self::with_config::<f64>(circuit, AnalysisConfig::default())
    }

    /// Analyze a circuit, running every elimination in the scalar type `T`.
    pub fn with_config<T: Scalar>(circuit: Circuit, config: AnalysisConfig) -> Result<Self> {
        validate_circuit(&circuit)?;
        info!(
            "analyzing circuit with {} nodes and {} branches",
            circuit.node_count(),
            circuit.branch_count()
        );

        let normalized = if config.normalize {
            circuit.normalize()
        } else {
            circuit.clone()
        };

        let tree = partition_spanning_tree::<T>(&normalized)?;
        let incidence = to_reduced_incidence::<T>(tree.circuit())?;
        let fundamental = FundamentalMatrices::from_incidence(&incidence)?;
        debug!(
            "B is {}x{}, D is {}x{}",
            fundamental.loops.rows(),
            fundamental.loops.cols(),
            fundamental.cutsets.rows(),
            fundamental.cutsets.cols()
        );

        let kcl = matrix_to_equations(&fundamental.cutsets, tree.circuit(), CURRENT_SYMBOL)?;
        let kvl = matrix_to_equations(&fundamental.loops, tree.circuit(), VOLTAGE_SYMBOL)?;
        let incidence_kcl = matrix_to_equations(&incidence, tree.circuit(), CURRENT_SYMBOL)?;
        let model = model_equations::<T>(&normalized)?;
        debug!(
            "model has {} unknowns and {} equations",
            model.unknowns.len(),
            model.equations.len()
        );

        Ok(Self {
            circuit,
            normalized,
            tree,
            incidence: incidence.round_to()?,
            fundamental,
            kcl,
            kvl,
            incidence_kcl,
            model,
        })
    }

    /// The circuit as given.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The circuit after normalization (identical to the input when disabled).
    pub fn normalized_circuit(&self) -> &Circuit {
        &self.normalized
    }

    pub fn spanning_tree(&self) -> &SpanningTree {
        &self.tree
    }

    pub fn node_count(&self) -> usize {
        self.circuit.node_count()
    }

    pub fn independent_node_count(&self) -> usize {
        self.circuit.independent_node_count()
    }

    pub fn branch_count(&self) -> usize {
        self.circuit.branch_count()
    }

    pub fn link_count(&self) -> usize {
        self.tree.link_count()
    }

    /// Reduced incidence matrix `A`, columns in tree order.
    pub fn incidence(&self) -> &Matrix<i32> {
        &self.incidence
    }

    /// Fundamental loop matrix `B`.
    pub fn loop_matrix(&self) -> &Matrix<i32> {
        &self.fundamental.loops
    }

    /// Fundamental cut-set matrix `D`.
    pub fn cutset_matrix(&self) -> &Matrix<i32> {
        &self.fundamental.cutsets
    }

    /// Independent KCL equations, one per tree branch.
    pub fn kcl_equations(&self) -> &Equations {
        &self.kcl
    }

    /// Independent KVL equations, one per link branch.
    pub fn kvl_equations(&self) -> &Equations {
        &self.kvl
    }

    /// KCL read directly off the incidence rows, one per independent node.
    pub fn incidence_kcl_equations(&self) -> &Equations {
        &self.incidence_kcl
    }

    pub fn model_equations(&self) -> &SystemOfEquations {
        &self.model
    }

    /// Constitutive relation of every branch, in tree order.
    pub fn constitutive_equations(&self) -> Vec<String> {
        self.tree
            .circuit()
            .iter()
            .map(|e| e.constitutive_relation())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Element;
    use crate::error::KirchhoffError;

    fn sample() -> Circuit {
        Circuit::new(vec![
            Element::resistor("R", 0, 1),
            Element::inductor("L1", 1, 2),
            Element::capacitor("C", 1, 2),
            Element::voltage_source("E", 2, 0),
            Element::inductor("L2", 1, 2),
        ])
    }

    fn lines(equations: &Equations) -> Vec<String> {
        equations.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_sample_kirchhoff_equations() {
        let analysis = Analysis::new(sample()).unwrap();
        assert_eq!(
            lines(analysis.kcl_equations()),
            vec!["I(E) - I(R) = 0", "I(C) - I(R) + I(L1) + I(L2) = 0"]
        );
        assert_eq!(
            lines(analysis.kvl_equations()),
            vec![
                "U(E) + U(C) + U(R) = 0",
                "-U(C) + U(L1) = 0",
                "-U(C) + U(L2) = 0",
            ]
        );
    }

    #[test]
    fn test_equation_counts() {
        let analysis = Analysis::new(sample()).unwrap();
        assert_eq!(analysis.kcl_equations().len(), analysis.independent_node_count());
        assert_eq!(analysis.kvl_equations().len(), analysis.link_count());
        assert_eq!(
            analysis.kcl_equations().len() + analysis.kvl_equations().len(),
            analysis.branch_count()
        );
        assert!(analysis.model_equations().is_square());
    }

    #[test]
    fn test_sample_model_unknowns() {
        let analysis = Analysis::new(sample()).unwrap();
        assert_eq!(
            analysis.model_equations().unknowns,
            vec!["V_0", "V_1", "I_E", "I_L1", "I_L2"]
        );
    }

    #[test]
    fn test_incidence_kcl() {
        let analysis = Analysis::new(sample()).unwrap();
        assert_eq!(
            lines(analysis.incidence_kcl_equations()),
            vec!["-I(E) + I(R) = 0", "I(C) - I(R) + I(L1) + I(L2) = 0"]
        );
    }

    #[test]
    fn test_constitutive_equations_follow_tree_order() {
        let analysis = Analysis::new(sample()).unwrap();
        assert_eq!(
            analysis.constitutive_equations(),
            vec![
                "U(E) = E",
                "I(C) = C * dU(C)/dt",
                "U(R) = R * I(R)",
                "U(L1) = L1 * dI(L1)/dt",
                "U(L2) = L2 * dI(L2)/dt",
            ]
        );
    }

    #[test]
    fn test_without_normalization() {
        let config = AnalysisConfig::new().with_normalize(false);
        let analysis = Analysis::with_config::<f64>(sample(), config).unwrap();
        assert_eq!(analysis.normalized_circuit(), analysis.circuit());
        assert_eq!(
            analysis.spanning_tree().circuit().names(),
            vec!["R", "L1", "C", "E", "L2"]
        );
        let product = analysis
            .cutset_matrix()
            .multiply(&analysis.loop_matrix().transpose())
            .unwrap();
        assert!(product.is_zero());
    }

    #[test]
    fn test_single_precision_matches_double() {
        let single = Analysis::with_config::<f32>(sample(), AnalysisConfig::default()).unwrap();
        let double = Analysis::new(sample()).unwrap();
        assert_eq!(single.loop_matrix(), double.loop_matrix());
        assert_eq!(single.model_equations(), double.model_equations());
    }

    #[test]
    fn test_huge_node_indices_rejected_before_matrices() {
        let netlist = format!("R1 0 {max}\nE1 {max} 0\n", max = usize::MAX);
        let circuit = crate::dsl::parse(&netlist).unwrap();
        assert!(matches!(
            Analysis::new(circuit),
            Err(KirchhoffError::UnconnectedNode { node: 1 })
        ));

        let circuit = crate::dsl::parse("R1 0 4000000000\nE1 4000000000 0\n").unwrap();
        assert!(matches!(
            Analysis::new(circuit),
            Err(KirchhoffError::UnconnectedNode { node: 1 })
        ));
    }

    #[test]
    fn test_invalid_circuits_rejected() {
        assert!(matches!(
            Analysis::new(Circuit::default()),
            Err(KirchhoffError::InvalidTopology { .. })
        ));
        let self_loop = Circuit::new(vec![
            Element::resistor("R1", 0, 1),
            Element::resistor("R2", 1, 1),
        ]);
        assert!(matches!(
            Analysis::new(self_loop),
            Err(KirchhoffError::SelfLoop { .. })
        ));
        let open = Circuit::new(vec![
            Element::resistor("R1", 0, 1),
            Element::resistor("R2", 2, 3),
        ]);
        assert!(matches!(
            Analysis::new(open),
            Err(KirchhoffError::DisconnectedCircuit { .. })
        ));
    }
}
