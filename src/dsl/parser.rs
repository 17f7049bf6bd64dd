//! Parser for the netlist format.

use std::collections::HashSet;

use log::debug;

use super::lexer::{Lexer, Token, TokenKind};
use crate::circuit::{Circuit, Element, ElementType};
use crate::error::{KirchhoffError, Result};

/// Parser for netlists.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire netlist, one element per line.
    pub fn parse(&mut self) -> Result<Circuit> {
        let mut elements = Vec::new();
        let mut names = HashSet::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            let line = self.current.line;
            let element = self.parse_element()?;
            if !names.insert(element.name.clone()) {
                return Err(KirchhoffError::DuplicateElementAt {
                    name: element.name,
                    line,
                });
            }
            elements.push(element);

            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => {}
                _ => {
                    return Err(KirchhoffError::parse(
                        self.current.line,
                        format!("unexpected trailing token '{}'", self.current.text),
                    ));
                }
            }
        }

        debug!("parsed {} elements", elements.len());
        Ok(Circuit::new(elements))
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn parse_element(&mut self) -> Result<Element> {
        let line = self.current.line;
        if self.current.kind != TokenKind::Identifier {
            return Err(KirchhoffError::parse(
                line,
                format!("expected element name, got '{}'", self.current.text),
            ));
        }

        let name = self.current.text.clone();
        let element_type = name
            .chars()
            .next()
            .and_then(ElementType::from_prefix)
            .ok_or_else(|| KirchhoffError::UnknownElementType {
                name: name.clone(),
                line,
            })?;
        self.advance()?;

        let tail = self.parse_node(line, "tail")?;
        let head = self.parse_node(line, "head")?;

        Ok(Element::new(element_type, tail, head, name))
    }

    fn parse_node(&mut self, line: usize, role: &str) -> Result<usize> {
        match self.current.kind {
            TokenKind::Number => {
                let node = self.current.text.parse::<usize>().map_err(|_| {
                    KirchhoffError::parse(
                        line,
                        format!("invalid {role} node number '{}'", self.current.text),
                    )
                })?;
                self.advance()?;
                Ok(node)
            }
            TokenKind::Identifier => Err(KirchhoffError::parse(
                line,
                format!("invalid {role} node number '{}'", self.current.text),
            )),
            TokenKind::Newline | TokenKind::Eof => Err(KirchhoffError::parse(
                line,
                format!("missing {role} node number"),
            )),
        }
    }
}
