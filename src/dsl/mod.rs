//! Netlist reader.
//!
//! A netlist lists one two-terminal element per line:
//!
//! ```text
//! netlist  = { line }
//! line     = [ element ] [ comment ] newline
//! element  = name tail head
//! comment  = ('#' | ';') { any_char }
//!
//! name     = prefix { letter | digit | '_' }
//! prefix   = 'E' | 'C' | 'R' | 'L' | 'I'      (case-insensitive)
//! tail     = digit+
//! head     = digit+
//! ```
//!
//! | Prefix | Element |
//! |--------|---------|
//! | E | Voltage source |
//! | C | Capacitor |
//! | R | Resistor |
//! | L | Inductor |
//! | I | Current source |
//!
//! Current flows from `tail` to `head`. Nodes are numbered from 0 and the
//! highest-numbered node is the reference.
//!
//! # Example
//!
//! ```text
//! # RLC with a voltage source
//! R  0 1
//! L1 1 2
//! C  1 2
//! E  2 0
//! L2 1 2
//! ```

mod lexer;
mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::circuit::Circuit;
use crate::error::Result;

/// Parse a netlist string into a circuit.
pub fn parse(input: &str) -> Result<Circuit> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Circuit> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::KirchhoffError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_comments() {
        let circuit = parse(
            "# sample\n\
             R  0 1   ; load\n\
             E  1 0\n",
        )
        .unwrap();
        assert_eq!(circuit.names(), vec!["R", "E"]);
        assert_eq!(circuit.node_count(), 2);
    }

    #[test]
    fn test_empty_netlist() {
        assert!(parse("\n# nothing\n").unwrap().is_empty());
    }
}
