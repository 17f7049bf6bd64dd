//! # Kirchhoff Core
//!
//! Derives the independent circuit equations of an electrical network from
//! its topology alone.
//!
//! This library provides:
//! - A line-oriented netlist format for two-terminal elements
//! - A generic dense matrix type with Gauss-Jordan elimination and inversion
//! - Spanning-tree selection by row-reducing the incidence matrix
//! - Fundamental loop and cut-set matrices, and the KVL/KCL equations they encode
//! - A mixed model system over node potentials and voltage-defined branch currents
//!
//! ## Architecture
//!
//! - [`dsl`] - Netlist lexer and parser
//! - [`circuit`] - Elements, circuits and validation
//! - [`matrix`] - Dense matrix algebra
//! - [`topology`] - Incidence matrices and spanning-tree partition
//! - [`analysis`] - Fundamental matrices and symbolic equations
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! kirchhoff circuit.net --equations all --matrices
//! ```
//!
//! ### Library
//!
//! ```
//! use kirchhoff_core::{dsl, Analysis};
//!
//! let circuit = dsl::parse("R 0 1\nL1 1 2\nC 1 2\nE 2 0\nL2 1 2\n")?;
//! let analysis = Analysis::new(circuit)?;
//!
//! assert_eq!(analysis.kvl_equations().len(), 3);
//! assert_eq!(analysis.kcl_equations()[0].to_string(), "I(E) - I(R) = 0");
//! # Ok::<(), kirchhoff_core::KirchhoffError>(())
//! ```
//!
//! ## Method
//!
//! 1. Normalize the branch order by element type
//! 2. Row-reduce the reduced incidence matrix `A`; pivot columns are tree branches
//! 3. Reorder branches tree-first so that `A = [A_T | A_L]`
//! 4. `B = [-(A_T^-1 A_L)^T | 1]` and `D = [1 | A_T^-1 A_L]`
//! 5. Read the rows of `D` as KCL and the rows of `B` as KVL

pub mod analysis;
pub mod circuit;
pub mod dsl;
pub mod error;
pub mod matrix;
pub mod topology;

// Re-export main types for convenience
pub use analysis::{Analysis, AnalysisConfig};
pub use circuit::{Circuit, Element, ElementType};
pub use error::{KirchhoffError, Result};
pub use matrix::{Matrix, EPSILON};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmAnalyzer;

/// Symbol of branch currents in KCL equations.
pub const CURRENT_SYMBOL: &str = "I";

/// Symbol of branch voltages in KVL equations.
pub const VOLTAGE_SYMBOL: &str = "U";

/// Symbol of node potentials in the model system.
pub const POTENTIAL_SYMBOL: &str = "V";
