//! Property-based tests for the calculator engine
//!
//! Error prevention: random action sequences must never leave the engine in a
//! state the presentation layer cannot render or re-parse.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use pocket_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn action_strategy() -> impl Strategy<Value = CalculatorAction> {
    prop_oneof![
        6 => (0u8..=9u8).prop_map(CalculatorAction::Digit),
        1 => Just(CalculatorAction::Decimal),
        2 => operator_strategy().prop_map(CalculatorAction::Operator),
        1 => Just(CalculatorAction::Equals),
        1 => Just(CalculatorAction::Clear),
        1 => Just(CalculatorAction::ToggleSign),
        1 => Just(CalculatorAction::Percent),
    ]
}

fn actions_strategy() -> impl Strategy<Value = Vec<CalculatorAction>> {
    prop::collection::vec(action_strategy(), 0..40)
}

/// Display text is a numeric literal or one of the non-finite spellings
fn is_renderable(display: &str) -> bool {
    if matches!(display, "Infinity" | "-Infinity" | "NaN") {
        return true;
    }
    let body = display.strip_prefix('-').unwrap_or(display);
    let mut mantissa_and_exp = body.splitn(2, 'e');
    let mantissa = mantissa_and_exp.next().unwrap_or("");
    let exponent_ok = mantissa_and_exp.next().map_or(true, |exp| {
        let digits = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    });
    !mantissa.is_empty()
        && mantissa.chars().filter(|&c| c == '.').count() <= 1
        && mantissa.chars().all(|c| c.is_ascii_digit() || c == '.')
        && mantissa.chars().any(|c| c.is_ascii_digit())
        && exponent_ok
}

proptest! {
    /// Every reachable display renders as a valid literal
    #[test]
    fn prop_display_always_renderable(actions in actions_strategy()) {
        let mut calc = Calculator::new();
        for action in actions {
            calc.dispatch(action);
            prop_assert!(is_renderable(&calc.state().display), "bad display {:?}", calc.state().display);
        }
    }

    /// Re-rendering a parsed display and parsing it again is lossless
    #[test]
    fn prop_round_trip(actions in actions_strategy()) {
        let mut calc = Calculator::new();
        for action in actions {
            calc.dispatch(action);
            let value = parse_display(&calc.state().display);
            let again = parse_display(&format_number(value));
            if value.is_nan() {
                prop_assert!(again.is_nan());
            } else {
                prop_assert_eq!(again, value);
            }
        }
    }

    /// Clear always yields the default state
    #[test]
    fn prop_clear_resets_fully(actions in actions_strategy()) {
        let mut calc = Calculator::new();
        calc.dispatch_all(actions);
        let lines = calc.clear();
        prop_assert!(calc.state().is_default());
        prop_assert_eq!(lines.current, "0");
        prop_assert_eq!(lines.history, "");
    }

    /// A second equals never changes anything
    #[test]
    fn prop_equals_idempotent(actions in actions_strategy()) {
        let mut calc = Calculator::new();
        calc.dispatch_all(actions);
        calc.equals();
        let after_first = calc.state().clone();
        calc.equals();
        prop_assert_eq!(calc.state(), &after_first);
    }

    /// Operand and operator are set and cleared together
    #[test]
    fn prop_pending_lifecycle(actions in actions_strategy()) {
        let mut calc = Calculator::new();
        for action in actions {
            calc.dispatch(action);
            let state = calc.state();
            prop_assert_eq!(state.previous_value.is_some(), state.pending_operator.is_some());
            prop_assert_eq!(calc.lines().history.is_empty(), state.pending_operator.is_none());
        }
    }

    /// The display never carries two decimal points
    #[test]
    fn prop_single_decimal_point(actions in actions_strategy()) {
        let mut calc = Calculator::new();
        for action in actions {
            calc.dispatch(action);
            prop_assert!(calc.state().display.matches('.').count() <= 1);
        }
    }

    /// Entering a digit string shows exactly those digits
    #[test]
    fn prop_digit_entry_appends(digits in prop::collection::vec(1u8..=9u8, 1..15)) {
        let mut calc = Calculator::new();
        for &d in &digits {
            calc.enter_digit(d);
        }
        let expected: String = digits.iter().map(|d| d.to_string()).collect();
        prop_assert_eq!(&calc.state().display, &expected);
    }

    /// Two operands and equals match evaluate() directly
    #[test]
    fn prop_binary_matches_evaluate(a in 0u8..=9u8, b in 0u8..=9u8, op in operator_strategy()) {
        let mut calc = Calculator::new();
        calc.enter_digit(a);
        calc.apply_operator(op);
        calc.enter_digit(b);
        let lines = calc.equals();
        let expected = evaluate(f64::from(a), f64::from(b), op);
        prop_assert_eq!(lines.current, format_number(expected));
    }

    /// Sign toggle twice restores the value
    #[test]
    fn prop_toggle_sign_involution(digits in prop::collection::vec(0u8..=9u8, 1..10)) {
        let mut calc = Calculator::new();
        for &d in &digits {
            calc.enter_digit(d);
        }
        let value = calc.state().current_value();
        calc.toggle_sign();
        calc.toggle_sign();
        prop_assert_eq!(calc.state().current_value(), value);
    }
}

// ===== Scenario tests =====

#[test]
fn test_fold_without_precedence() {
    let mut calc = Calculator::new();
    calc.enter_digit(2);
    calc.apply_operator(Operator::Add);
    calc.enter_digit(3);
    calc.apply_operator(Operator::Multiply);
    calc.enter_digit(4);
    assert_eq!(calc.equals().current, "20");
}

#[test]
fn test_divide_by_zero_display() {
    let mut calc = Calculator::new();
    calc.enter_digit(5);
    calc.apply_operator(Operator::Divide);
    calc.enter_digit(0);
    assert_eq!(calc.equals().current, "0");
}

#[test]
fn test_is_renderable_helper() {
    assert!(is_renderable("0."));
    assert!(is_renderable("-12.5"));
    assert!(is_renderable("1e+21"));
    assert!(is_renderable("5e-89"));
    assert!(!is_renderable("1..2"));
    assert!(!is_renderable("-"));
}
