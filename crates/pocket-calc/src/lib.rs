//! Pocket Calculator Engine
//!
//! The input/evaluation state machine behind a single-screen keypad
//! calculator. A presentation layer forwards one action per button press and
//! renders the two [`DisplayLines`] it gets back.
//!
//! # Principles
//!
//! - **Error prevention**: transitions are total; there is no error state
//! - **Sequential fold**: operators apply left to right as pressed, no precedence
//! - **Visual feedback**: every transition yields the history and current lines
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.enter_digit(2);
//! calc.apply_operator(Operator::Add);
//! calc.enter_digit(3);
//! let lines = calc.apply_operator(Operator::Multiply);
//! assert_eq!(lines.history, "5 ×");
//!
//! calc.enter_digit(4);
//! assert_eq!(calc.equals().current, "20");
//!
//! // Division by zero shows 0
//! calc.dispatch_all([
//!     CalculatorAction::Digit(5),
//!     CalculatorAction::Operator(Operator::Divide),
//!     CalculatorAction::Digit(0),
//!     CalculatorAction::Equals,
//! ]);
//! assert_eq!(calc.state().display, "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;

pub use config::CalculatorConfig;
pub use crate::core::{
    evaluate, Calculator, CalculatorAction, CalculatorState, DisplayLines, Operator,
    SubscriptionId,
};
pub use error::{KeypadError, KeypadResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::core::number::{format_number, parse_display};
    pub use crate::core::{
        evaluate, Calculator, CalculatorAction, CalculatorState, DisplayLines, Operator,
        SubscriptionId,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::error::{KeypadError, KeypadResult};
    pub use crate::keypad::{Keypad, KeypadButton};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.enter_digit(4);
        assert_eq!(calc.lines().current, "4");
    }

    #[test]
    fn test_keypad_drives_engine() {
        let keypad = Keypad::new();
        let mut calc = Calculator::new();
        for label in ["1", "2", "×", "3", "="] {
            let button = keypad.find_by_label(label).unwrap();
            calc.dispatch(button.action);
        }
        assert_eq!(calc.state().display, "36");
    }

    #[test]
    fn test_running_total_shown_in_history() {
        let mut calc = Calculator::new();
        let lines = calc.dispatch_all([
            CalculatorAction::Digit(1),
            CalculatorAction::Digit(0),
            CalculatorAction::Operator(Operator::Subtract),
            CalculatorAction::Digit(4),
            CalculatorAction::Operator(Operator::Divide),
        ]);
        assert_eq!(lines.history, "6 ÷");
        assert_eq!(lines.current, "6");
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Calculator::new();
        let b = Calculator::new();
        a.enter_digit(9);
        assert_eq!(a.state().display, "9");
        assert!(b.state().is_default());
    }

    #[test]
    fn test_round_trip_through_display() {
        for text in ["0", "0.", "53", "-12.5", "0.000001", "1e+21"] {
            let value = parse_display(text);
            assert_eq!(parse_display(&format_number(value)), value);
        }
    }
}
