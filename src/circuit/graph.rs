//! Circuit graph structure.

use std::fmt;
use std::ops::Index;

use super::types::Element;

/// An ordered list of branches.
///
/// Column `i` of every matrix derived from a circuit corresponds to branch
/// `i`, so transformations that reorder branches return a new circuit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Circuit {
    elements: Vec<Element>,
}

impl Circuit {
    /// Create a circuit from its branches.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of branches.
    pub fn branch_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of nodes: the highest node index plus one.
    ///
    /// Saturates at `usize::MAX`; [`validate_circuit`](super::validate_circuit)
    /// rejects such circuits because most of those nodes are unconnected.
    pub fn node_count(&self) -> usize {
        self.elements
            .iter()
            .map(|e| e.tail.max(e.head).saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes excluding the reference node.
    pub fn independent_node_count(&self) -> usize {
        self.node_count().saturating_sub(1)
    }

    /// Number of branches outside a spanning tree.
    pub fn link_count(&self) -> usize {
        self.branch_count().saturating_sub(self.independent_node_count())
    }

    /// Branch names in order.
    pub fn names(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.name.as_str()).collect()
    }

    /// Stable sort by element type.
    pub fn normalize(&self) -> Circuit {
        let mut elements = self.elements.clone();
        elements.sort_by_key(|e| e.element_type);
        Circuit { elements }
    }

    /// A new circuit with the branches at `order` taken in that order.
    pub(crate) fn reordered(&self, order: impl IntoIterator<Item = usize>) -> Circuit {
        Circuit {
            elements: order.into_iter().map(|i| self.elements[i].clone()).collect(),
        }
    }
}

impl Index<usize> for Circuit {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<Element> for Circuit {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for element in &self.elements {
            writeln!(f, "\t{element}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Circuit {
        Circuit::new(vec![
            Element::resistor("R", 0, 1),
            Element::inductor("L1", 1, 2),
            Element::capacitor("C", 1, 2),
            Element::voltage_source("E", 2, 0),
            Element::inductor("L2", 1, 2),
        ])
    }

    #[test]
    fn test_counts() {
        let c = sample();
        assert_eq!(c.node_count(), 3);
        assert_eq!(c.independent_node_count(), 2);
        assert_eq!(c.branch_count(), 5);
        assert_eq!(c.link_count(), 3);
        assert_eq!(Circuit::default().node_count(), 0);
    }

    #[test]
    fn test_node_count_saturates() {
        let c = Circuit::new(vec![Element::resistor("R1", 0, usize::MAX)]);
        assert_eq!(c.node_count(), usize::MAX);
    }

    #[test]
    fn test_normalize_is_stable() {
        let c = sample().normalize();
        assert_eq!(c.names(), vec!["E", "C", "R", "L1", "L2"]);
        // the input is left untouched
        assert_eq!(sample().names(), vec!["R", "L1", "C", "E", "L2"]);
    }

    #[test]
    fn test_reordered() {
        let c = sample().reordered([3, 0]);
        assert_eq!(c.names(), vec!["E", "R"]);
        assert_eq!(c[1], Element::resistor("R", 0, 1));
    }

    #[test]
    fn test_display() {
        let c = Circuit::new(vec![Element::resistor("R1", 0, 1)]);
        assert_eq!(c.to_string(), "{\n\t{ resistor, 0, 1, R1 }\n}");
    }
}
