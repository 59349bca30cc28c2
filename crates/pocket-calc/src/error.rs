//! Error types for input decoding
//!
//! Engine transitions are total; only turning raw labels and key presses into
//! [`CalculatorAction`](crate::CalculatorAction)s can fail.

use thiserror::Error;

/// Result type for keypad decoding
pub type KeypadResult<T> = Result<T, KeypadError>;

/// Errors raised while decoding presentation-layer input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    /// Button label with no matching action
    #[error("Unknown keypad label: {label:?}")]
    UnknownLabel {
        /// The label that failed to decode
        label: String,
    },

    /// Keyboard character with no matching action
    #[error("Unknown key: {key:?}")]
    UnknownKey {
        /// The key that failed to decode
        key: String,
    },

    /// Digit value outside 0-9
    #[error("Invalid digit: {value} (expected 0-9)")]
    InvalidDigit {
        /// The rejected value
        value: u8,
    },
}

impl KeypadError {
    /// Create an unknown-label error
    #[must_use]
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
        }
    }
}
