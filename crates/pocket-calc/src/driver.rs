//! Calculator driver: label-level access for presentation layers and tests
//!
//! Write the behaviour checks once against [`CalculatorDriver`], then run them
//! against any front end that can press buttons and read the two display lines.

use crate::core::{Calculator, CalculatorAction, DisplayLines};
use crate::error::KeypadResult;
use crate::keypad::Keypad;
use crate::CalculatorConfig;

/// Abstract driver for button-level calculator interaction
pub trait CalculatorDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str) -> KeypadResult<()>;

    /// Gets the history line (pending operand and operator)
    fn history_line(&self) -> String;

    /// Gets the current line
    fn current_line(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// Presses each whitespace-separated label in turn
    fn press_sequence(&mut self, labels: &str) -> KeypadResult<()> {
        for label in labels.split_whitespace() {
            self.press(label)?;
        }
        Ok(())
    }
}

/// Driver over the in-process [`Calculator`] engine
#[derive(Debug)]
pub struct EngineDriver {
    calculator: Calculator,
    keypad: Keypad,
}

impl Default for EngineDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineDriver {
    /// Creates a driver over a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates a driver with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::with_calculator(Calculator::with_config(config))
    }

    /// Creates a driver over an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            keypad: Keypad::new(),
        }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the underlying calculator mutably
    pub fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Clicks a keypad element by id. Returns the new lines, or `None` if no
    /// button has that id.
    pub fn click(&mut self, element_id: &str) -> Option<DisplayLines> {
        let action = self.keypad.handle_click(element_id)?;
        Some(self.calculator.dispatch(action))
    }

    /// Feeds a keyboard key
    pub fn key(&mut self, key: &str) -> KeypadResult<DisplayLines> {
        let action = CalculatorAction::from_key(key)?;
        Ok(self.calculator.dispatch(action))
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, label: &str) -> KeypadResult<()> {
        let action = CalculatorAction::from_label(label)?;
        self.calculator.dispatch(action);
        Ok(())
    }

    fn history_line(&self) -> String {
        self.calculator.state().history_line()
    }

    fn current_line(&self) -> String {
        self.calculator.state().display.clone()
    }

    fn clear(&mut self) {
        self.calculator.clear();
    }
}

// ===== Shared behaviour checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit entry replaces after an operator instead of appending
pub fn verify_replace_vs_append<D: CalculatorDriver>(driver: &mut D) -> KeypadResult<()> {
    driver.clear();
    driver.press_sequence("5 3")?;
    assert_eq!(driver.current_line(), "53");
    driver.press("+")?;
    driver.press("2")?;
    assert_eq!(driver.current_line(), "2");
    driver.clear();
    Ok(())
}

/// Verifies operators fold left to right without precedence
pub fn verify_sequential_fold<D: CalculatorDriver>(driver: &mut D) -> KeypadResult<()> {
    driver.clear();
    driver.press_sequence("2 + 3 ×")?;
    assert_eq!(driver.history_line(), "5 ×");
    driver.press_sequence("4 =")?;
    assert_eq!(driver.current_line(), "20");
    assert_eq!(driver.history_line(), "");
    driver.clear();
    Ok(())
}

/// Verifies division by zero shows zero
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> KeypadResult<()> {
    driver.clear();
    driver.press_sequence("5 ÷ 0 =")?;
    assert_eq!(driver.current_line(), "0");
    driver.clear();
    Ok(())
}

/// Verifies a second equals changes nothing
pub fn verify_idempotent_equals<D: CalculatorDriver>(driver: &mut D) -> KeypadResult<()> {
    driver.clear();
    driver.press_sequence("9 − 4 =")?;
    let first = (driver.history_line(), driver.current_line());
    driver.press("=")?;
    assert_eq!((driver.history_line(), driver.current_line()), first);
    assert_eq!(first.1, "5");
    driver.clear();
    Ok(())
}

/// Verifies clear returns to the initial display
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> KeypadResult<()> {
    driver.press_sequence("7 × 6 ± %")?;
    driver.press("C")?;
    assert_eq!(driver.history_line(), "");
    assert_eq!(driver.current_line(), "0");
    Ok(())
}

/// Verifies a repeated decimal point is ignored
pub fn verify_decimal_dedup<D: CalculatorDriver>(driver: &mut D) -> KeypadResult<()> {
    driver.clear();
    driver.press_sequence(". .")?;
    assert_eq!(driver.current_line(), "0.");
    driver.press_sequence("5 .")?;
    assert_eq!(driver.current_line(), "0.5");
    driver.clear();
    Ok(())
}

/// Verifies sign toggle and percent edit the display in place
pub fn verify_sign_and_percent<D: CalculatorDriver>(driver: &mut D) -> KeypadResult<()> {
    driver.clear();
    driver.press_sequence("2 5 ±")?;
    assert_eq!(driver.current_line(), "-25");
    driver.press("%")?;
    assert_eq!(driver.current_line(), "-0.25");
    driver.clear();
    Ok(())
}

/// Runs every behaviour check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) -> KeypadResult<()> {
    verify_replace_vs_append(driver)?;
    verify_sequential_fold(driver)?;
    verify_division_by_zero(driver)?;
    verify_idempotent_equals(driver)?;
    verify_clear(driver)?;
    verify_decimal_dedup(driver)?;
    verify_sign_and_percent(driver)
}
