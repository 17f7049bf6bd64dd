//! Symbolic equations: signed named terms summing to zero.

use std::fmt;
use std::ops::Deref;

use crate::circuit::Circuit;
use crate::error::{KirchhoffError, Result};
use crate::matrix::{Matrix, Scalar};

/// One signed term of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    /// The symbolic expression, e.g. `I(R1)` or `C1 * dV_0/dt`.
    pub expr: String,
    /// True when the term is subtracted.
    pub negative: bool,
}

impl Term {
    pub fn new(expr: impl Into<String>, negative: bool) -> Self {
        Self {
            expr: expr.into(),
            negative,
        }
    }

    pub fn positive(expr: impl Into<String>) -> Self {
        Self::new(expr, false)
    }

    pub fn negative(expr: impl Into<String>) -> Self {
        Self::new(expr, true)
    }
}

/// An ordered sum of signed terms, equal to zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Equation {
    terms: Vec<Term>,
}

impl Equation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<Term> for Equation {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<Term> for Equation {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0 = 0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            let sign = match (i, term.negative) {
                (0, false) => "",
                (0, true) => "-",
                (_, false) => " + ",
                (_, true) => " - ",
            };
            write!(f, "{sign}{}", term.expr)?;
        }
        write!(f, " = 0")
    }
}

/// A list of equations, rendered one per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Equations(pub Vec<Equation>);

impl Deref for Equations {
    type Target = [Equation];

    fn deref(&self) -> &[Equation] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Equations {
    type Item = &'a Equation;
    type IntoIter = std::slice::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Equation> for Equations {
    fn from_iter<I: IntoIterator<Item = Equation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Equations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for equation in &self.0 {
            writeln!(f, "{equation}")?;
        }
        Ok(())
    }
}

/// Equations together with the unknowns they are solved for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemOfEquations {
    pub unknowns: Vec<String>,
    pub equations: Equations,
}

impl SystemOfEquations {
    /// Same number of equations as unknowns.
    pub fn is_square(&self) -> bool {
        self.unknowns.len() == self.equations.len()
    }
}

impl fmt::Display for SystemOfEquations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "unknowns: ({})^T", self.unknowns.join(", "))?;
        write!(f, "{}", self.equations)
    }
}

/// Read each matrix row as an equation over the circuit's branches.
///
/// Every non-zero entry in column `b` contributes `symbol(name_b)`, negated
/// when the entry is negative. An all-zero row gives an empty equation.
pub fn matrix_to_equations<T: Scalar>(
    matrix: &Matrix<T>,
    circuit: &Circuit,
    symbol: &str,
) -> Result<Equations> {
    if matrix.cols() != circuit.branch_count() {
        return Err(KirchhoffError::dimension(
            "matrix_to_equations",
            format!(
                "matrix has {} columns but the circuit has {} branches",
                matrix.cols(),
                circuit.branch_count()
            ),
        ));
    }

    let equations: Equations = matrix
        .row_iter()
        .map(|row| {
            row.iter()
                .zip(circuit)
                .filter(|(value, _)| !value.is_approx_zero())
                .map(|(&value, element)| {
                    Term::new(format!("{symbol}({})", element.name), value < T::zero())
                })
                .collect::<Equation>()
        })
        .collect();

    Ok(equations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Element;

    #[test]
    fn test_equation_display() {
        let eq: Equation = vec![
            Term::negative("I(R)"),
            Term::positive("I(C)"),
            Term::negative("I(L)"),
        ]
        .into_iter()
        .collect();
        assert_eq!(eq.to_string(), "-I(R) + I(C) - I(L) = 0");
        assert_eq!(Equation::new().to_string(), "0 = 0");
    }

    #[test]
    fn test_system_display() {
        let system = SystemOfEquations {
            unknowns: vec!["V_0".to_string(), "I_E".to_string()],
            equations: Equations(vec![
                vec![Term::positive("V_0"), Term::negative("E")].into_iter().collect(),
                vec![Term::positive("I_E")].into_iter().collect(),
            ]),
        };
        assert!(system.is_square());
        assert_eq!(
            system.to_string(),
            "unknowns: (V_0, I_E)^T\nV_0 - E = 0\nI_E = 0\n"
        );
    }

    #[test]
    fn test_matrix_rows_become_equations() {
        let circuit = Circuit::new(vec![
            Element::voltage_source("E", 2, 0),
            Element::capacitor("C", 1, 2),
            Element::resistor("R", 0, 1),
        ]);
        let m = Matrix::from_rows(vec![vec![1, 1, 1], vec![0, 0, 0], vec![0, -1, 2]]).unwrap();
        let eqs = matrix_to_equations(&m, &circuit, "U").unwrap();
        assert_eq!(eqs.len(), 3);
        assert_eq!(eqs[0].to_string(), "U(E) + U(C) + U(R) = 0");
        assert!(eqs[1].is_empty());
        assert_eq!(eqs[2].to_string(), "-U(C) + U(R) = 0");
    }

    #[test]
    fn test_matrix_to_equations_checks_width() {
        let circuit = Circuit::new(vec![Element::resistor("R", 0, 1)]);
        let m = Matrix::<i32>::identity(2);
        assert!(matrix_to_equations(&m, &circuit, "I").is_err());
    }
}
