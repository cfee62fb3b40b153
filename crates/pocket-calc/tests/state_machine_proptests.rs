//! Property-based tests for the calculator state machine

use pocket_calc::core::number::format_number;
use pocket_calc::core::{CalcError, Calculator, Operator};
use pocket_calc::keypad::KeypadAction;
use pocket_calc::theme::Theme;
use proptest::prelude::*;

fn type_text(calc: &mut Calculator, text: &str) {
    for c in text.chars() {
        calc.input_digit(c);
    }
}

fn run(calc: &mut Calculator, actions: &[KeypadAction]) {
    let mut theme = Theme::default();
    for action in actions {
        action.apply(calc, &mut theme);
    }
}

// ===== Strategy definitions =====

/// Actions that keep every intermediate value finite
fn bounded_action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        4 => (0u8..=9u8).prop_map(KeypadAction::Digit),
        1 => Just(KeypadAction::Decimal),
        2 => prop::sample::select(vec![
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ])
        .prop_map(KeypadAction::Operator),
        1 => Just(KeypadAction::Percent),
        1 => Just(KeypadAction::Equals),
        1 => Just(KeypadAction::Clear),
        1 => Just(KeypadAction::Backspace),
    ]
}

fn chain_operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![Operator::Add, Operator::Subtract, Operator::Multiply])
}

// ===== Entry properties =====

proptest! {
    #[test]
    fn prop_digit_entry_concatenates(
        int_part in "[0-9]{0,8}",
        frac_part in prop::option::of("[0-9]{0,6}"),
    ) {
        let mut calc = Calculator::new();
        type_text(&mut calc, &int_part);
        if let Some(frac) = &frac_part {
            calc.input_dot();
            type_text(&mut calc, frac);
        }

        let trimmed = int_part.trim_start_matches('0');
        let mut expected = if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };
        if let Some(frac) = &frac_part {
            expected.push('.');
            expected.push_str(frac);
        }
        prop_assert_eq!(calc.current(), expected);
    }

    #[test]
    fn prop_second_dot_ignored(digits in "[1-9][0-9]{0,4}", more in "[0-9]{1,4}") {
        let mut calc = Calculator::new();
        type_text(&mut calc, &digits);
        calc.input_dot();
        type_text(&mut calc, &more);
        let before = calc.current().to_string();
        calc.input_dot();
        prop_assert_eq!(calc.current(), before);
    }
}

// ===== Arithmetic properties =====

proptest! {
    #[test]
    fn prop_addition(a in 0u32..100_000, b in 0u32..100_000) {
        let mut calc = Calculator::new();
        type_text(&mut calc, &a.to_string());
        calc.choose_operator(Operator::Add);
        type_text(&mut calc, &b.to_string());
        calc.evaluate();

        prop_assert_eq!(calc.current(), (u64::from(a) + u64::from(b)).to_string());
        let expected_expression = format!("{a} + {b}");
        prop_assert_eq!(calc.last_expression(), Some(expected_expression.as_str()));
        prop_assert_eq!(calc.error(), None);
    }

    #[test]
    fn prop_divide_by_zero_keeps_pending(a in 1u32..1_000_000) {
        let mut calc = Calculator::new();
        type_text(&mut calc, &a.to_string());
        calc.choose_operator(Operator::Divide);
        calc.input_digit('0');
        calc.evaluate();

        prop_assert_eq!(calc.error(), Some(&CalcError::DivideByZero));
        prop_assert_eq!(calc.current(), "0");
        prop_assert_eq!(calc.operand(), Some(f64::from(a)));
        prop_assert_eq!(calc.operator(), Some(Operator::Divide));
        prop_assert!(calc.history().is_empty());
    }

    #[test]
    fn prop_left_to_right_fold(
        first in 0u32..1000,
        rest in prop::collection::vec((chain_operator_strategy(), 0u32..1000), 1..6),
    ) {
        let mut calc = Calculator::new();
        type_text(&mut calc, &first.to_string());
        let mut expected = f64::from(first);
        for (op, n) in &rest {
            calc.choose_operator(*op);
            type_text(&mut calc, &n.to_string());
            expected = op.apply(expected, f64::from(*n)).unwrap();
        }
        calc.evaluate();
        prop_assert_eq!(calc.current(), format_number(expected));
    }

    #[test]
    fn prop_negative_base_fractional_exponent(base in 1u32..1000, whole in 0u32..10) {
        let mut calc = Calculator::new();
        calc.choose_operator(Operator::Subtract);
        type_text(&mut calc, &base.to_string());
        calc.evaluate();
        calc.power();
        type_text(&mut calc, &whole.to_string());
        calc.input_dot();
        calc.input_digit('5');
        calc.evaluate();

        prop_assert_eq!(calc.error(), Some(&CalcError::InvalidExponent));
    }
}

// ===== History properties =====

proptest! {
    #[test]
    fn prop_history_bounded_newest_first(count in 1usize..30) {
        let mut calc = Calculator::new();
        for i in 1..=count {
            calc.clear();
            type_text(&mut calc, &i.to_string());
            calc.choose_operator(Operator::Add);
            calc.input_digit('1');
            calc.evaluate();
        }

        let lines = calc.history().lines();
        prop_assert_eq!(lines.len(), count.min(10));
        prop_assert_eq!(&lines[0], &format!("{count} + 1 = {}", count + 1));
        let oldest = count.saturating_sub(9).max(1);
        prop_assert_eq!(lines.last().unwrap(), &format!("{oldest} + 1 = {}", oldest + 1));
    }

    #[test]
    fn prop_history_respects_configured_limit(limit in 1usize..20, count in 0usize..40) {
        let mut calc = Calculator::with_history_limit(limit);
        for _ in 0..count {
            calc.clear();
            calc.input_digit('2');
            calc.choose_operator(Operator::Multiply);
            calc.input_digit('3');
            calc.evaluate();
        }
        prop_assert_eq!(calc.history().len(), count.min(limit));
    }
}

// ===== Clearing properties =====

proptest! {
    #[test]
    fn prop_clear_resets_current_and_error_only(
        actions in prop::collection::vec(bounded_action_strategy(), 0..40),
    ) {
        let mut calc = Calculator::new();
        run(&mut calc, &actions);
        let before = calc.snapshot();
        calc.clear();
        let after = calc.snapshot();

        prop_assert_eq!(after.current.as_str(), "0");
        prop_assert_eq!(after.error, None);
        prop_assert_eq!(after.operand, before.operand);
        prop_assert_eq!(after.operator, before.operator);
        prop_assert_eq!(after.last_expression, before.last_expression);
        prop_assert_eq!(after.history, before.history);
    }

    #[test]
    fn prop_all_clear_resets_everything(
        actions in prop::collection::vec(bounded_action_strategy(), 0..40),
    ) {
        let mut calc = Calculator::new();
        run(&mut calc, &actions);
        calc.all_clear();
        prop_assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn prop_backspace_in_error_only_dismisses(
        actions in prop::collection::vec(bounded_action_strategy(), 0..30),
    ) {
        let mut calc = Calculator::new();
        run(&mut calc, &actions);
        calc.choose_operator(Operator::Divide);
        calc.input_digit('0');
        calc.evaluate();
        prop_assume!(calc.error().is_some());

        let before = calc.snapshot();
        calc.backspace();
        let after = calc.snapshot();

        prop_assert_eq!(after.error, None);
        prop_assert_eq!(after.error_kind, None);
        prop_assert_eq!(after.current, before.current);
        prop_assert_eq!(after.operand, before.operand);
        prop_assert_eq!(after.operator, before.operator);
        prop_assert_eq!(after.history, before.history);
    }
}
