//! Core types for circuit representation.

use std::fmt;

/// The kind of a two-terminal branch.
///
/// Variant order is the normalization order: sorting a circuit by type
/// groups voltage sources first and current sources last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementType {
    /// Independent voltage source (E)
    VoltageSource,
    /// Capacitor (C)
    Capacitor,
    /// Resistor (R)
    Resistor,
    /// Inductor (L)
    Inductor,
    /// Independent current source (I)
    CurrentSource,
}

impl ElementType {
    /// All element types in normalization order.
    pub const ALL: [ElementType; 5] = [
        Self::VoltageSource,
        Self::Capacitor,
        Self::Resistor,
        Self::Inductor,
        Self::CurrentSource,
    ];

    /// Parse an element type from the first character of its name.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'E' => Some(Self::VoltageSource),
            'C' => Some(Self::Capacitor),
            'R' => Some(Self::Resistor),
            'L' => Some(Self::Inductor),
            'I' => Some(Self::CurrentSource),
            _ => None,
        }
    }

    /// The netlist prefix character.
    pub fn prefix(&self) -> char {
        match self {
            Self::VoltageSource => 'E',
            Self::Capacitor => 'C',
            Self::Resistor => 'R',
            Self::Inductor => 'L',
            Self::CurrentSource => 'I',
        }
    }

    /// Whether the constitutive relation fixes the branch voltage.
    ///
    /// Every branch is assumed to be exactly one of voltage-defined or
    /// current-defined; the model does not handle mixed branches.
    pub fn is_voltage_defined(&self) -> bool {
        match self {
            Self::VoltageSource | Self::Inductor => true,
            Self::Capacitor | Self::Resistor | Self::CurrentSource => false,
        }
    }

    /// Whether the constitutive relation fixes the branch current.
    pub fn is_current_defined(&self) -> bool {
        !self.is_voltage_defined()
    }

    /// Whether this is an independent source.
    pub fn is_source(&self) -> bool {
        match self {
            Self::VoltageSource | Self::CurrentSource => true,
            Self::Capacitor | Self::Resistor | Self::Inductor => false,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VoltageSource => "voltage source",
            Self::Capacitor => "capacitor",
            Self::Resistor => "resistor",
            Self::Inductor => "inductor",
            Self::CurrentSource => "current source",
        };
        f.write_str(name)
    }
}

/// One branch of a circuit.
///
/// Current and voltage are oriented from `tail` to `head`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    pub element_type: ElementType,
    pub tail: usize,
    pub head: usize,
    pub name: String,
}

impl Element {
    /// Create a new element.
    pub fn new(element_type: ElementType, tail: usize, head: usize, name: impl Into<String>) -> Self {
        Self {
            element_type,
            tail,
            head,
            name: name.into(),
        }
    }

    pub fn voltage_source(name: impl Into<String>, tail: usize, head: usize) -> Self {
        Self::new(ElementType::VoltageSource, tail, head, name)
    }

    pub fn capacitor(name: impl Into<String>, tail: usize, head: usize) -> Self {
        Self::new(ElementType::Capacitor, tail, head, name)
    }

    pub fn resistor(name: impl Into<String>, tail: usize, head: usize) -> Self {
        Self::new(ElementType::Resistor, tail, head, name)
    }

    pub fn inductor(name: impl Into<String>, tail: usize, head: usize) -> Self {
        Self::new(ElementType::Inductor, tail, head, name)
    }

    pub fn current_source(name: impl Into<String>, tail: usize, head: usize) -> Self {
        Self::new(ElementType::CurrentSource, tail, head, name)
    }

    pub fn is_voltage_defined(&self) -> bool {
        self.element_type.is_voltage_defined()
    }

    pub fn is_current_defined(&self) -> bool {
        self.element_type.is_current_defined()
    }

    pub fn is_source(&self) -> bool {
        self.element_type.is_source()
    }

    /// Tail and head are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }

    /// The branch constitutive relation, e.g. `U(R1) = R1 * I(R1)`.
    pub fn constitutive_relation(&self) -> String {
        let n = &self.name;
        match self.element_type {
            ElementType::VoltageSource => format!("U({n}) = {n}"),
            ElementType::Capacitor => format!("I({n}) = {n} * dU({n})/dt"),
            ElementType::Resistor => format!("U({n}) = {n} * I({n})"),
            ElementType::Inductor => format!("U({n}) = {n} * dI({n})/dt"),
            ElementType::CurrentSource => format!("I({n}) = {n}"),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ {}, {}, {}, {} }}",
            self.element_type, self.tail, self.head, self.name
        )
    }
}
