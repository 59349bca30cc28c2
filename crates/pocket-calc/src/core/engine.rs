//! Calculator engine: the input/evaluation state machine
//!
//! Operators fold strictly left to right as they are pressed; there is no
//! precedence. Every transition returns the new [`DisplayLines`] and notifies
//! subscribers.

use super::number::{accepts_digits, format_number, has_decimal_point, parse_display};
use super::operations::{evaluate, Operator};
use super::{CalculatorAction, CalculatorState, DisplayLines};
use crate::config::CalculatorConfig;

/// Handle returned by [`Calculator::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&DisplayLines)>;

/// Calculator engine owning one [`CalculatorState`]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a calculator resuming from an existing state
    #[must_use]
    pub fn with_state(state: CalculatorState, config: CalculatorConfig) -> Self {
        Self {
            state,
            ..Self::with_config(config)
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the current display lines
    #[must_use]
    pub fn lines(&self) -> DisplayLines {
        self.state.lines()
    }

    /// Registers a callback invoked with the new lines after every transition
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&DisplayLines) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Routes one action to its transition
    pub fn dispatch(&mut self, action: CalculatorAction) -> DisplayLines {
        let changed = match action {
            CalculatorAction::Digit(digit) => match char::from_digit(u32::from(digit), 10) {
                Some(ch) => self.enter(ch),
                None => false,
            },
            CalculatorAction::Decimal => self.enter('.'),
            CalculatorAction::Operator(op) => {
                self.operator(op);
                true
            }
            CalculatorAction::Equals => self.evaluate_pending(),
            CalculatorAction::Clear => {
                self.state = CalculatorState::default();
                true
            }
            CalculatorAction::ToggleSign => {
                self.state.display = format_number(-self.state.current_value());
                true
            }
            CalculatorAction::Percent => {
                self.state.display = format_number(self.state.current_value() / 100.0);
                true
            }
        };

        let lines = self.state.lines();
        self.trace(action, changed, &lines);
        for (_, observer) in &mut self.observers {
            observer(&lines);
        }
        lines
    }

    /// Dispatches a sequence of actions, returning the final lines
    pub fn dispatch_all<I>(&mut self, actions: I) -> DisplayLines
    where
        I: IntoIterator<Item = CalculatorAction>,
    {
        for action in actions {
            self.dispatch(action);
        }
        self.lines()
    }

    /// Enters a digit. Values above 9 are ignored.
    pub fn enter_digit(&mut self, digit: u8) -> DisplayLines {
        self.dispatch(CalculatorAction::Digit(digit))
    }

    /// Enters the decimal point; ignored if the display already has one
    pub fn enter_decimal(&mut self) -> DisplayLines {
        self.dispatch(CalculatorAction::Decimal)
    }

    /// Selects an operator, folding any pending operation first
    pub fn apply_operator(&mut self, op: Operator) -> DisplayLines {
        self.dispatch(CalculatorAction::Operator(op))
    }

    /// Evaluates the pending operation; a no-op when nothing is pending
    pub fn equals(&mut self) -> DisplayLines {
        self.dispatch(CalculatorAction::Equals)
    }

    /// Resets to the default state
    pub fn clear(&mut self) -> DisplayLines {
        self.dispatch(CalculatorAction::Clear)
    }

    /// Negates the display without starting a fresh entry
    pub fn toggle_sign(&mut self) -> DisplayLines {
        self.dispatch(CalculatorAction::ToggleSign)
    }

    /// Divides the display by 100 without starting a fresh entry
    pub fn apply_percent(&mut self) -> DisplayLines {
        self.dispatch(CalculatorAction::Percent)
    }

    fn enter(&mut self, ch: char) -> bool {
        let state = &mut self.state;

        if state.awaiting_fresh_entry
            || state.display == CalculatorState::DEFAULT_DISPLAY
            || !accepts_digits(&state.display)
        {
            state.display = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            state.awaiting_fresh_entry = false;
            return true;
        }

        if ch == '.' && has_decimal_point(&state.display) {
            return false;
        }
        if !self.config.allows_append(state.display.len()) {
            return false;
        }

        state.display.push(ch);
        true
    }

    fn operator(&mut self, op: Operator) {
        let state = &mut self.state;
        let current = parse_display(&state.display);

        match (state.previous_value, state.pending_operator) {
            (None, _) => state.previous_value = Some(current),
            (Some(previous), Some(pending)) => {
                let result = evaluate(previous, current, pending);
                state.previous_value = Some(result);
                state.display = format_number(result);
            }
            (Some(_), None) => {}
        }

        state.pending_operator = Some(op);
        state.awaiting_fresh_entry = true;
    }

    fn evaluate_pending(&mut self) -> bool {
        let state = &mut self.state;
        let (Some(previous), Some(pending)) = (state.previous_value, state.pending_operator) else {
            return false;
        };

        let result = evaluate(previous, parse_display(&state.display), pending);
        state.display = format_number(result);
        state.previous_value = None;
        state.pending_operator = None;
        state.awaiting_fresh_entry = true;
        true
    }

    fn trace(&self, action: CalculatorAction, changed: bool, lines: &DisplayLines) {
        if !self.config.trace_transitions {
            return;
        }
        if changed {
            tracing::debug!(
                ?action,
                history = %lines.history,
                current = %lines.current,
                fresh_entry = self.state.awaiting_fresh_entry,
                "calculator transition"
            );
        } else {
            tracing::trace!(?action, current = %lines.current, "calculator action ignored");
        }
    }
}
