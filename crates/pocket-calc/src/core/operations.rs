//! Binary operators and the arithmetic core
//!
//! Error prevention: the operator set is a closed enum, so every pending
//! operation has exactly one evaluation rule.

use serde::{Deserialize, Serialize};

/// Binary operator selected on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph shown on the keypad and in the history line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
        }
    }

    /// Returns the ASCII spelling used by keyboards and element ids
    #[must_use]
    pub const fn ascii(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns a lowercase name, used for element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Resolves a glyph or one of its ASCII aliases
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "\u{2212}" | "-" => Some(Self::Subtract),
            "\u{d7}" | "*" | "x" | "X" => Some(Self::Multiply),
            "\u{f7}" | "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluates `a op b`.
///
/// Division by zero yields `0` rather than an infinity or an error. Callers
/// depend on this exact behaviour, so it must not be changed to IEEE semantics.
#[must_use]
pub fn evaluate(a: f64, b: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                0.0
            } else {
                a / b
            }
        }
    }
}
