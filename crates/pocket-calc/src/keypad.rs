//! Keypad layout and input decoding
//!
//! Visual feedback: the presentation layer renders these buttons and forwards
//! clicks (by label or element id) and keyboard keys back as actions.

use crate::core::{CalculatorAction, Operator};
use crate::error::{KeypadError, KeypadResult};
use serde::{Deserialize, Serialize};

impl CalculatorAction {
    /// Builds a digit action, rejecting values above 9
    pub fn digit(value: u8) -> KeypadResult<Self> {
        if value <= 9 {
            Ok(Self::Digit(value))
        } else {
            Err(KeypadError::InvalidDigit { value })
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "\u{b1}".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Returns the element id a presentation layer uses for this action
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::ToggleSign => "btn-sign".to_string(),
            Self::Percent => "btn-percent".to_string(),
        }
    }

    /// Decodes a button label. ASCII aliases (`-`, `*`, `x`, `/`, `+/-`) are accepted.
    pub fn from_label(label: &str) -> KeypadResult<Self> {
        let label = label.trim();
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Self::Operator(op));
        }

        match label {
            "." => Ok(Self::Decimal),
            "=" => Ok(Self::Equals),
            "C" | "c" | "AC" => Ok(Self::Clear),
            "\u{b1}" | "+/-" => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percent),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => ch
                        .to_digit(10)
                        .map(|d| Self::Digit(d as u8))
                        .ok_or_else(|| KeypadError::unknown_label(label)),
                    _ => Err(KeypadError::unknown_label(label)),
                }
            }
        }
    }

    /// Decodes a keyboard key name (`"7"`, `"*"`, `"Enter"`, `"Escape"`, ...)
    pub fn from_key(key: &str) -> KeypadResult<Self> {
        match key {
            "Enter" | "=" => Ok(Self::Equals),
            "Escape" | "c" | "C" => Ok(Self::Clear),
            "." | "," => Ok(Self::Decimal),
            "%" => Ok(Self::Percent),
            "\u{b1}" => Ok(Self::ToggleSign),
            _ => {
                if let Some(op) = Operator::from_symbol(key) {
                    return Ok(Self::Operator(op));
                }
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_digit() => {
                        Ok(Self::Digit(ch as u8 - b'0'))
                    }
                    _ => Err(KeypadError::UnknownKey {
                        key: key.to_string(),
                    }),
                }
            }
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: CalculatorAction,
    /// The glyph printed on the button
    pub label: String,
    /// Stable element id
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    /// Creates a single-cell button
    #[must_use]
    pub fn new(action: CalculatorAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: CalculatorAction, row: usize, col: usize, span: usize) -> Self {
        Self {
            action,
            label: action.label(),
            id: action.element_id(),
            row,
            col,
            span,
        }
    }

    /// Returns true if this button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Calculator keypad layout
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [    0    ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        use crate::core::CalculatorAction::{Clear, Decimal, Digit, Equals, Percent, ToggleSign};
        let op = CalculatorAction::Operator;

        let buttons = vec![
            // Row 0: C ± % ÷
            KeypadButton::new(Clear, 0, 0),
            KeypadButton::new(ToggleSign, 0, 1),
            KeypadButton::new(Percent, 0, 2),
            KeypadButton::new(op(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::new(Digit(7), 1, 0),
            KeypadButton::new(Digit(8), 1, 1),
            KeypadButton::new(Digit(9), 1, 2),
            KeypadButton::new(op(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 −
            KeypadButton::new(Digit(4), 2, 0),
            KeypadButton::new(Digit(5), 2, 1),
            KeypadButton::new(Digit(6), 2, 2),
            KeypadButton::new(op(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(Digit(1), 3, 0),
            KeypadButton::new(Digit(2), 3, 1),
            KeypadButton::new(Digit(3), 3, 2),
            KeypadButton::new(op(Operator::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButton::spanning(Digit(0), 4, 0, 2),
            KeypadButton::new(Decimal, 4, 2),
            KeypadButton::new(Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by its label, accepting the same aliases as
    /// [`CalculatorAction::from_label`]
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let action = CalculatorAction::from_label(label).ok()?;
        self.find_by_action(action)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_by_action(&self, action: CalculatorAction) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Processes a click on an element id and returns the action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<CalculatorAction> {
        self.find_by_id(element_id).map(|btn| btn.action)
    }
}
