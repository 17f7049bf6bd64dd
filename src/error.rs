//! Error types for the Kirchhoff equation generator.
//!
//! This module provides a unified error type [`KirchhoffError`] that covers
//! every failure that can occur while reading a netlist, validating a circuit,
//! running the matrix algebra and selecting a spanning tree.

use thiserror::Error;

/// Result type alias using [`KirchhoffError`].
pub type Result<T> = std::result::Result<T, KirchhoffError>;

/// Unified error type for all Kirchhoff operations.
#[derive(Error, Debug)]
pub enum KirchhoffError {
    // ============ Netlist Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Element name whose first character selects no known type
    #[error("Unknown element '{name}' at line {line}")]
    UnknownElementType { name: String, line: usize },

    /// Element name declared twice in a netlist
    #[error("Duplicate element name '{name}' at line {line}")]
    DuplicateElementAt { name: String, line: usize },

    // ============ Circuit Validation Errors ============
    /// Duplicate element name in a circuit built outside the netlist reader
    #[error("Duplicate element name '{name}'")]
    DuplicateElement { name: String },

    /// Branch whose tail and head are the same node
    #[error("Element '{name}' connects node {node} to itself")]
    SelfLoop { name: String, node: usize },

    /// The branch list does not connect all nodes
    #[error("Circuit is not connected: a spanning tree over {nodes} nodes needs {required} branches, found {tree_branches}")]
    DisconnectedCircuit {
        nodes: usize,
        required: usize,
        tree_branches: usize,
    },

    /// Node index below the highest one that no branch touches
    #[error("Node {node} is not connected to any branch")]
    UnconnectedNode { node: usize },

    /// Invalid circuit topology
    #[error("Invalid circuit topology: {message}")]
    InvalidTopology { message: String },

    // ============ Matrix Errors ============
    /// Operands with incompatible shapes
    #[error("Dimension mismatch in {operation}: {message}")]
    DimensionMismatch {
        operation: &'static str,
        message: String,
    },

    /// Rows of different lengths passed to a matrix constructor
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Requested sub-matrix window exceeds the source matrix
    #[error(
        "Slice of {rows}x{cols} at ({row_start}, {col_start}) exceeds a {matrix_rows}x{matrix_cols} matrix"
    )]
    SliceOutOfBounds {
        rows: usize,
        cols: usize,
        row_start: usize,
        col_start: usize,
        matrix_rows: usize,
        matrix_cols: usize,
    },

    /// Operation that requires a square matrix
    #[error("Expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Operation that requires a minimum number of rows
    #[error("{operation} requires at least {required} rows, got {rows}")]
    TooFewRows {
        operation: &'static str,
        rows: usize,
        required: usize,
    },

    /// Strict elimination met an all-zero pivot column
    #[error("Singular matrix: no pivot in column {column}")]
    SingularMatrix { column: usize },

    /// Strict elimination ran out of columns before every row had a pivot
    #[error("Matrix is rank deficient: {rows} rows but only {pivots} pivots")]
    RankDeficient { rows: usize, pivots: usize },

    /// Pivot division that an integer element type cannot represent
    #[error("Inexact division {value} / {pivot} for an integer element type")]
    InexactDivision { value: String, pivot: String },

    /// Element that cannot be represented in the target scalar type
    #[error("Value {value} cannot be converted to the target element type")]
    ScalarConversion { value: String },

    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl KirchhoffError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension(operation: &'static str, message: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            operation,
            message: message.into(),
        }
    }

    /// Create an invalid topology error
    pub fn topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_line() {
        let err = KirchhoffError::UnknownElementType {
            name: "X1".to_string(),
            line: 4,
        };
        assert_eq!(err.to_string(), "Unknown element 'X1' at line 4");

        let err = KirchhoffError::parse(7, "expected element name");
        assert_eq!(err.to_string(), "Parse error at line 7: expected element name");
    }

    #[test]
    fn test_disconnected_message() {
        let err = KirchhoffError::DisconnectedCircuit {
            nodes: 4,
            required: 3,
            tree_branches: 2,
        };
        assert_eq!(
            err.to_string(),
            "Circuit is not connected: a spanning tree over 4 nodes needs 3 branches, found 2"
        );
    }
}
