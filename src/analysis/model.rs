//! Mixed nodal / branch-current model equations.
//!
//! Unknowns are the potentials of the independent nodes plus the current of
//! every voltage-defined branch. One KCL equation is written per independent
//! node, with current-defined branches replaced by their constitutive law in
//! terms of node potentials. Each voltage-defined branch adds one equation
//! fixing its branch voltage.

use crate::circuit::{Circuit, Element, ElementType};
use crate::error::Result;
use crate::matrix::{Matrix, Scalar};
use crate::topology::to_reduced_incidence;
use crate::{CURRENT_SYMBOL, POTENTIAL_SYMBOL};

use super::equations::{Equation, Equations, SystemOfEquations, Term};

/// Name of the potential unknown of `node`.
pub fn potential_unknown(node: usize) -> String {
    format!("{POTENTIAL_SYMBOL}_{node}")
}

/// Name of the current unknown of a voltage-defined branch.
pub fn current_unknown(element: &Element) -> String {
    format!("{CURRENT_SYMBOL}_{}", element.name)
}

/// Build the square mixed system for `circuit`, in its given branch order.
pub fn model_equations<T: Scalar>(circuit: &Circuit) -> Result<SystemOfEquations> {
    let incidence = to_reduced_incidence::<T>(circuit)?;
    let potentials = branch_potentials(&incidence);
    let nodes = incidence.rows();
    let voltage_defined = circuit.iter().filter(|e| e.is_voltage_defined()).count();

    let unknowns = (0..nodes)
        .map(potential_unknown)
        .chain(
            circuit
                .iter()
                .filter(|e| e.is_voltage_defined())
                .map(current_unknown),
        )
        .collect();

    let mut equations = Vec::with_capacity(nodes + voltage_defined);

    for (node, row) in incidence.row_iter().enumerate() {
        let mut equation = Equation::new();
        for ((&entry, element), branch_potential) in row.iter().zip(circuit).zip(&potentials) {
            if entry.is_approx_zero() {
                continue;
            }
            let leaving = entry > T::zero();
            equation.extend(current_terms(element, branch_potential, !leaving));
        }
        log::trace!("node {node}: {equation}");
        equations.push(equation);
    }

    for (element, branch_potential) in circuit.iter().zip(&potentials) {
        if !element.is_voltage_defined() {
            continue;
        }
        let mut equation: Equation = branch_potential.iter().cloned().collect();
        equation.extend(voltage_law_term(element));
        equations.push(equation);
    }

    Ok(SystemOfEquations {
        unknowns,
        equations: Equations(equations),
    })
}

/// For each branch, its voltage `V_tail - V_head` as potential terms.
///
/// The reference node has potential zero and does not appear.
fn branch_potentials<T: Scalar>(incidence: &Matrix<T>) -> Vec<Vec<Term>> {
    (0..incidence.cols())
        .map(|branch| {
            incidence
                .column(branch)
                .iter()
                .enumerate()
                .filter(|(_, entry)| !entry.is_approx_zero())
                .map(|(node, entry)| Term::new(potential_unknown(node), entry < T::zero()))
                .collect()
        })
        .collect()
}

/// Terms for the current a branch carries out of a node.
///
/// `negative` is set when the branch enters the node. Current-defined
/// branches are expanded through their constitutive law, one term per
/// potential of the branch voltage, with the signs combined.
fn current_terms(element: &Element, potentials: &[Term], negative: bool) -> Vec<Term> {
    let name = &element.name;
    let expand = |render: &dyn Fn(&str) -> String| -> Vec<Term> {
        potentials
            .iter()
            .map(|p| Term::new(render(&p.expr), negative ^ p.negative))
            .collect()
    };

    match element.element_type {
        ElementType::VoltageSource | ElementType::Inductor => {
            vec![Term::new(current_unknown(element), negative)]
        }
        ElementType::Capacitor => expand(&|v: &str| format!("{name} * d{v}/dt")),
        ElementType::Resistor => expand(&|v: &str| format!("{v}/{name}")),
        ElementType::CurrentSource => vec![Term::new(name.clone(), negative)],
    }
}

/// The non-potential part of a voltage-defined branch equation.
fn voltage_law_term(element: &Element) -> Option<Term> {
    let name = &element.name;
    match element.element_type {
        ElementType::VoltageSource => Some(Term::positive(name.clone())),
        ElementType::Inductor => Some(Term::negative(format!(
            "{name} * d{}/dt",
            current_unknown(element)
        ))),
        ElementType::Capacitor | ElementType::Resistor | ElementType::CurrentSource => None,
    }
}
