//! Equation synthesis on top of the topology.
//!
//! Once the branches are ordered tree-first, the reduced incidence matrix
//! `A = [A_T | A_L]` yields the fundamental loop matrix `B` and cut-set
//! matrix `D`:
//!
//! ```text
//! B * u = 0      one KVL equation per link branch
//! D * i = 0      one KCL equation per tree branch
//! ```
//!
//! The model system goes one step further and substitutes each branch's
//! constitutive law, leaving node potentials and the currents of
//! voltage-defined branches as unknowns.

mod analyzer;
mod equations;
mod fundamental;
mod model;

pub use analyzer::{Analysis, AnalysisConfig};
pub use equations::{matrix_to_equations, Equation, Equations, SystemOfEquations, Term};
pub use fundamental::FundamentalMatrices;
pub use model::{current_unknown, model_equations, potential_unknown};
