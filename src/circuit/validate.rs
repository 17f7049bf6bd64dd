//! Circuit validation.

use std::collections::{BTreeSet, HashSet};

use crate::error::{KirchhoffError, Result};

use super::Circuit;

/// Validate a circuit for topological analysis.
///
/// Checks:
/// - The circuit has at least one branch and at least two nodes
/// - No branch connects a node to itself
/// - Branch names are unique
/// - Every node index up to the highest is touched by some branch
///
/// Connectivity is checked by spanning-tree selection, which is where a
/// missing tree branch first becomes visible.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    if circuit.is_empty() {
        return Err(KirchhoffError::topology("circuit has no elements"));
    }

    if circuit.node_count() < 2 {
        return Err(KirchhoffError::topology(format!(
            "circuit needs at least 2 nodes, found {}",
            circuit.node_count()
        )));
    }

    let mut names = HashSet::with_capacity(circuit.branch_count());
    let mut nodes = BTreeSet::new();
    for element in circuit {
        nodes.insert(element.tail);
        nodes.insert(element.head);

        if element.is_self_loop() {
            return Err(KirchhoffError::SelfLoop {
                name: element.name.clone(),
                node: element.tail,
            });
        }
        if !names.insert(element.name.as_str()) {
            return Err(KirchhoffError::DuplicateElement {
                name: element.name.clone(),
            });
        }
    }

    // Indices are dense exactly when the touched set has node_count entries.
    if nodes.len() < circuit.node_count() {
        let node = nodes
            .iter()
            .zip(0..)
            .find(|&(&touched, expected)| touched != expected)
            .map_or(nodes.len(), |(_, expected)| expected);
        return Err(KirchhoffError::UnconnectedNode { node });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Element;

    #[test]
    fn test_valid_circuit() {
        let c = Circuit::new(vec![
            Element::voltage_source("E", 0, 1),
            Element::resistor("R", 1, 0),
        ]);
        assert!(validate_circuit(&c).is_ok());
    }

    #[test]
    fn test_empty_circuit() {
        assert!(matches!(
            validate_circuit(&Circuit::default()),
            Err(KirchhoffError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_self_loop_rejected() {
        let c = Circuit::new(vec![
            Element::resistor("R1", 0, 1),
            Element::capacitor("C1", 1, 1),
        ]);
        match validate_circuit(&c) {
            Err(KirchhoffError::SelfLoop { name, node }) => {
                assert_eq!(name, "C1");
                assert_eq!(node, 1);
            }
            other => panic!("expected self loop error, got {other:?}"),
        }
    }

    #[test]
    fn test_single_node_rejected() {
        let c = Circuit::new(vec![Element::resistor("R1", 0, 0)]);
        assert!(matches!(
            validate_circuit(&c),
            Err(KirchhoffError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_gap_in_node_indices_rejected() {
        let c = Circuit::new(vec![
            Element::resistor("R1", 0, 4_000_000_000),
            Element::voltage_source("E1", 4_000_000_000, 0),
        ]);
        assert!(matches!(
            validate_circuit(&c),
            Err(KirchhoffError::UnconnectedNode { node: 1 })
        ));

        let c = Circuit::new(vec![
            Element::resistor("R1", 0, 2),
            Element::resistor("R2", 2, 3),
            Element::resistor("R3", 3, 0),
        ]);
        assert!(matches!(
            validate_circuit(&c),
            Err(KirchhoffError::UnconnectedNode { node: 1 })
        ));
    }

    #[test]
    fn test_maximum_node_index_rejected() {
        let c = Circuit::new(vec![
            Element::resistor("R1", 0, usize::MAX),
            Element::voltage_source("E1", usize::MAX, 0),
        ]);
        assert!(matches!(
            validate_circuit(&c),
            Err(KirchhoffError::UnconnectedNode { node: 1 })
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let c = Circuit::new(vec![
            Element::resistor("R1", 0, 1),
            Element::resistor("R1", 1, 0),
        ]);
        assert!(matches!(
            validate_circuit(&c),
            Err(KirchhoffError::DuplicateElement { name }) if name == "R1"
        ));
    }
}
