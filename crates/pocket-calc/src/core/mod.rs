//! Calculator core: state, actions and the arithmetic engine
//!
//! Error prevention: every transition is a total function over
//! [`CalculatorAction`], so the engine has no error path.

mod engine;
pub mod number;
mod operations;

pub use engine::{Calculator, SubscriptionId};
pub use operations::{evaluate, Operator};

use serde::{Deserialize, Serialize};

use number::format_number;

/// Complete calculator state
///
/// `previous_value` and `pending_operator` share a lifecycle: both are set by
/// an operator press and both are cleared by equals or clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text of the value being entered or shown
    pub display: String,
    /// Left operand of the pending operation
    pub previous_value: Option<f64>,
    /// Operator waiting for its right operand
    pub pending_operator: Option<Operator>,
    /// Next digit overwrites the display instead of appending
    pub awaiting_fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: Self::DEFAULT_DISPLAY.to_string(),
            previous_value: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
        }
    }
}

impl CalculatorState {
    /// Display text of a freshly cleared calculator
    pub const DEFAULT_DISPLAY: &'static str = "0";

    /// Creates the default state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this is the cleared state
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Numeric value of the display
    #[must_use]
    pub fn current_value(&self) -> f64 {
        number::parse_display(&self.display)
    }

    /// Text of the history line: `"{previous} {symbol}"` while an operation
    /// is pending, empty otherwise
    #[must_use]
    pub fn history_line(&self) -> String {
        match (self.previous_value, self.pending_operator) {
            (Some(previous), Some(op)) => format!("{} {}", format_number(previous), op.symbol()),
            _ => String::new(),
        }
    }

    /// Both display lines for the presentation layer
    #[must_use]
    pub fn lines(&self) -> DisplayLines {
        DisplayLines {
            history: self.history_line(),
            current: self.display.clone(),
        }
    }
}

/// One user action from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorAction {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset to the default state
    Clear,
    /// Negate the display
    ToggleSign,
    /// Divide the display by 100
    Percent,
}

/// The two strings rendered after every transition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayLines {
    /// Pending operation, e.g. `"12 +"`, or empty
    pub history: String,
    /// Value being entered or the last result
    pub current: String,
}

impl DisplayLines {
    /// Serializes the frame to JSON for a presentation bridge
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a frame from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl std::fmt::Display for DisplayLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.history)?;
        write!(f, "{}", self.current)
    }
}
