//! Validator evaluation engine.
//!
//! Pure functions mapping (value, rule, form snapshot) to a boolean
//! outcome, plus the character counters the scanning rules are built on.
//!
//! Every malformed-input path degrades to "still valid": a parameter of
//! the wrong shape, an unrecognized rule kind or an absent value never
//! fails a field and never panics; the anomaly is traced for diagnostics
//! instead. Only a rule whose preconditions are met can flip a field
//! invalid.

use crate::core::{FieldMap, FieldValue, FormState, RuleValue, ValidationKind, Validator};

/// Count the characters of `text` satisfying `predicate`.
///
/// # Example
///
/// ```rust
/// use formset::validate::count_matching;
///
/// assert_eq!(count_matching("hello there", |c| c == ' '), 1);
/// ```
pub fn count_matching(text: &str, predicate: impl Fn(char) -> bool) -> usize {
    text.chars().filter(|c| predicate(*c)).count()
}

/// Count ASCII uppercase characters (`'A'..='Z'`, no Unicode folding).
pub fn count_uppercase(text: &str) -> usize {
    count_matching(text, |c| c.is_ascii_uppercase())
}

/// Count ASCII digits (`'0'..='9'`).
pub fn count_digits(text: &str) -> usize {
    count_matching(text, |c| c.is_ascii_digit())
}

/// Evaluate a single rule against a value and a form snapshot.
///
/// The snapshot is only consulted by custom rules; built-in rules look at
/// the value alone.
pub fn evaluate(
    kind: &ValidationKind,
    value: &FieldValue,
    parameter: &RuleValue,
    state: &FormState,
) -> bool {
    match kind {
        ValidationKind::Required => required(value),
        ValidationKind::MinLength => length_within(value, parameter, |len, rule| len >= rule),
        ValidationKind::MaxLength => length_within(value, parameter, |len, rule| len <= rule),
        ValidationKind::MinValue => value_within(value, parameter, |n, rule| n >= rule),
        ValidationKind::MaxValue => value_within(value, parameter, |n, rule| n <= rule),
        ValidationKind::MinUppercaseCount => {
            count_within(value, parameter, count_uppercase, |n, rule| n >= rule)
        }
        ValidationKind::MaxUppercaseCount => {
            count_within(value, parameter, count_uppercase, |n, rule| n <= rule)
        }
        ValidationKind::MinDigitCount => {
            count_within(value, parameter, count_digits, |n, rule| n >= rule)
        }
        ValidationKind::MaxDigitCount => {
            count_within(value, parameter, count_digits, |n, rule| n <= rule)
        }
        ValidationKind::CustomRule => match parameter {
            RuleValue::Rule(rule) => rule.check(value, state),
            _ => {
                tracing::trace!("custom_rule parameter is not a predicate; rule skipped");
                true
            }
        },
        ValidationKind::Unrecognized(key) => {
            tracing::trace!(key = %key, "unrecognized validation rule; rule skipped");
            true
        }
    }
}

/// A value is required: lists must be non-empty, scalars must have a
/// non-blank string form. An absent value does not satisfy this rule.
fn required(value: &FieldValue) -> bool {
    match value {
        FieldValue::Empty => false,
        FieldValue::TextList(items) => !items.is_empty(),
        other => !other.display_string().trim().is_empty(),
    }
}

fn length_within(value: &FieldValue, parameter: &RuleValue, cmp: fn(f64, f64) -> bool) -> bool {
    if value.is_empty() {
        return true;
    }
    match parameter {
        RuleValue::Number(rule) => cmp(value.constraint_len() as f64, *rule),
        _ => {
            tracing::trace!("length rule parameter is not numeric; rule skipped");
            true
        }
    }
}

fn value_within(value: &FieldValue, parameter: &RuleValue, cmp: fn(f64, f64) -> bool) -> bool {
    if value.is_empty() {
        return true;
    }
    match parameter {
        // NaN from a failed coercion fails both comparisons.
        RuleValue::Number(rule) => cmp(value.as_number(), *rule),
        _ => {
            tracing::trace!("value rule parameter is not numeric; rule skipped");
            true
        }
    }
}

fn count_within(
    value: &FieldValue,
    parameter: &RuleValue,
    counter: fn(&str) -> usize,
    cmp: fn(f64, f64) -> bool,
) -> bool {
    if value.is_empty() {
        return true;
    }
    match parameter {
        RuleValue::Number(rule) => cmp(counter(&value.display_string()) as f64, *rule),
        _ => {
            tracing::trace!("count rule parameter is not numeric; rule skipped");
            true
        }
    }
}

/// Run every validator of a field against `value` and fold the outcomes
/// with logical AND, in declaration order.
///
/// The fold deliberately does not short-circuit: each validator is
/// evaluated even after an earlier one has failed, so a custom rule with
/// observable behavior runs on every validation pass.
pub fn validate_field(value: &FieldValue, validators: &[Validator], state: &FormState) -> bool {
    let mut is_valid = true;
    for validator in validators {
        let outcome = evaluate(&validator.kind, value, &validator.parameter, state);
        is_valid = is_valid && outcome;
    }
    is_valid
}

/// Aggregate validity over a field map: the AND of every field's stored
/// flag. No validator is re-run here.
pub fn validate_form(fields: &FieldMap) -> bool {
    fields.values().all(|field| field.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CustomRule, FieldMap, FieldState};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn empty_state() -> FormState {
        FormState::new(FieldMap::new(), false)
    }

    /// Evaluate the same rules against a value expected to pass and a value
    /// expected to fail; returns both outcomes.
    fn validation_result(
        valid: FieldValue,
        invalid: FieldValue,
        state: Option<&FormState>,
        rules: Vec<(ValidationKind, RuleValue)>,
    ) -> (bool, bool) {
        let fallback = empty_state();
        let state = state.unwrap_or(&fallback);
        let validators: Vec<Validator> = rules
            .into_iter()
            .map(|(kind, parameter)| Validator::new(kind, parameter))
            .collect();
        (
            validate_field(&valid, &validators, state),
            validate_field(&invalid, &validators, state),
        )
    }

    #[test]
    fn can_count_digits() {
        assert_eq!(count_digits("Hello47There12 9548 General 10"), 10);
        assert_eq!(count_digits("Hello There"), 0);
    }

    #[test]
    fn can_count_uppercase() {
        assert_eq!(
            count_uppercase("Hello there. General Kenobi. You're a bold one."),
            4
        );
        assert_eq!(
            count_uppercase("hello there. general kenobi. you're a bold one."),
            0
        );
    }

    #[test]
    fn can_count_custom() {
        let text = "hello there. general kenobi. you're a bold one.";
        assert_eq!(count_matching(text, |c| c == ' '), 7);
    }

    #[test]
    fn handles_required_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::text("hello there"),
            FieldValue::text(""),
            None,
            vec![(ValidationKind::Required, RuleValue::Flag(true))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn required_rejects_absent_values_and_empty_lists() {
        let state = empty_state();
        let validators = [Validator::new(ValidationKind::Required, RuleValue::Flag(true))];

        assert!(!validate_field(&FieldValue::Empty, &validators, &state));
        assert!(!validate_field(
            &FieldValue::TextList(Vec::new()),
            &validators,
            &state
        ));
        assert!(validate_field(
            &FieldValue::TextList(vec!["a".to_string()]),
            &validators,
            &state
        ));
    }

    #[test]
    fn handles_min_length_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::text("hello there"),
            FieldValue::text("hello"),
            None,
            vec![(ValidationKind::MinLength, RuleValue::Number(8.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn handles_max_length_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::text("hello"),
            FieldValue::text("hello there"),
            None,
            vec![(ValidationKind::MaxLength, RuleValue::Number(8.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn length_rules_count_list_entries() {
        let (valid, invalid) = validation_result(
            FieldValue::from(vec!["a".to_string(), "b".to_string()]),
            FieldValue::from(vec!["a".to_string()]),
            None,
            vec![(ValidationKind::MinLength, RuleValue::Number(2.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn handles_min_value_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::from(10.0),
            FieldValue::from(2.0),
            None,
            vec![(ValidationKind::MinValue, RuleValue::Number(8.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn handles_max_value_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::from(15.0),
            FieldValue::from(31.0),
            None,
            vec![(ValidationKind::MaxValue, RuleValue::Number(20.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn value_rules_coerce_text_and_fail_on_nan() {
        let state = empty_state();
        let validators = [Validator::new(
            ValidationKind::MinValue,
            RuleValue::Number(8.0),
        )];

        assert!(validate_field(&FieldValue::text("10"), &validators, &state));
        assert!(!validate_field(&FieldValue::text("5"), &validators, &state));
        assert!(!validate_field(
            &FieldValue::text("not a number"),
            &validators,
            &state
        ));
    }

    #[test]
    fn handles_min_uppercase_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::text("Hello There"),
            FieldValue::text("hello there"),
            None,
            vec![(ValidationKind::MinUppercaseCount, RuleValue::Number(2.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn handles_max_uppercase_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::text("Hello There"),
            FieldValue::text("Hello there, General Kenobi"),
            None,
            vec![(ValidationKind::MaxUppercaseCount, RuleValue::Number(2.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn handles_min_digit_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::text("b1ill 3van5"),
            FieldValue::text("m1les d4vis"),
            None,
            vec![(ValidationKind::MinDigitCount, RuleValue::Number(3.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn handles_max_digit_rule() {
        let (valid, invalid) = validation_result(
            FieldValue::text("b1ill 3van5"),
            FieldValue::text("m1l3s d4v15"),
            None,
            vec![(ValidationKind::MaxDigitCount, RuleValue::Number(3.0))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn handles_mix_of_rules() {
        let rules = || {
            vec![
                (ValidationKind::MinLength, RuleValue::Number(30.0)),
                (ValidationKind::MaxLength, RuleValue::Number(50.0)),
                (ValidationKind::MaxDigitCount, RuleValue::Number(2.0)),
                (ValidationKind::MinDigitCount, RuleValue::Number(1.0)),
                (ValidationKind::MinUppercaseCount, RuleValue::Number(1.0)),
                (ValidationKind::MaxUppercaseCount, RuleValue::Number(1.0)),
            ]
        };

        let (valid1, invalid1) = validation_result(
            FieldValue::text("The late 50's was a great time for jazz."),
            FieldValue::text("The late 50's was a great time for Jazz."),
            None,
            rules(),
        );
        let (valid2, invalid2) = validation_result(
            FieldValue::text("There are over 20 droids outside, watch out!."),
            FieldValue::text("There are over 9000 droids outside, run!."),
            None,
            rules(),
        );
        let (valid3, invalid3) = validation_result(
            FieldValue::text("Did you know that 3 squared, surprisingly, is 9? "),
            FieldValue::text("chick corea, a great master of jazz died recently. may he rest in peace."),
            None,
            rules(),
        );

        assert!(valid1 && valid2 && valid3);
        assert!(!invalid1 && !invalid2 && !invalid3);
    }

    #[test]
    fn handles_custom_rule_with_form_context() {
        let mut fields = FieldMap::new();
        fields.insert(
            "some_test_input".to_string(),
            FieldState::new(
                FieldValue::text("Kind of Blue"),
                true,
                true,
                Vec::new(),
                Vec::new(),
            ),
        );
        let state = FormState::new(fields, false);

        let rule = CustomRule::new(|value, state| {
            state
                .field("some_test_input")
                .is_some_and(|f| f.is_valid() && f.value() == value)
        });
        let (valid, invalid) = validation_result(
            FieldValue::text("Kind of Blue"),
            FieldValue::text("kind of blue"),
            Some(&state),
            vec![(ValidationKind::CustomRule, RuleValue::Rule(rule))],
        );
        assert!(valid);
        assert!(!invalid);
    }

    #[test]
    fn malformed_parameter_is_vacuously_satisfied() {
        let state = empty_state();
        let validators = [
            Validator::new(ValidationKind::MinLength, RuleValue::Flag(true)),
            Validator::new(ValidationKind::MinValue, RuleValue::Text("9".to_string())),
            Validator::new(ValidationKind::CustomRule, RuleValue::Number(1.0)),
        ];
        assert!(validate_field(&FieldValue::text("x"), &validators, &state));
    }

    #[test]
    fn absent_value_vacuously_satisfies_threshold_rules() {
        let state = empty_state();
        let validators = [
            Validator::new(ValidationKind::MinLength, RuleValue::Number(5.0)),
            Validator::new(ValidationKind::MinValue, RuleValue::Number(5.0)),
            Validator::new(ValidationKind::MinUppercaseCount, RuleValue::Number(5.0)),
        ];
        assert!(validate_field(&FieldValue::Empty, &validators, &state));
    }

    #[test]
    fn unrecognized_rule_contributes_no_constraint() {
        let state = empty_state();
        let validators = [
            Validator::new(
                ValidationKind::Unrecognized("ayy".to_string()),
                RuleValue::Text(String::new()),
            ),
            Validator::new(ValidationKind::MinValue, RuleValue::Number(6.0)),
        ];

        assert!(!validate_field(&FieldValue::from(5.0), &validators, &state));
        assert!(validate_field(&FieldValue::from(6.0), &validators, &state));
    }

    #[test]
    fn every_validator_runs_even_after_a_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_seen = Arc::clone(&calls);
        let observing_rule = CustomRule::new(move |_, _| {
            calls_seen.fetch_add(1, Ordering::SeqCst);
            true
        });

        let state = empty_state();
        let validators = [
            Validator::new(ValidationKind::MinLength, RuleValue::Number(100.0)),
            Validator::new(ValidationKind::CustomRule, RuleValue::Rule(observing_rule)),
        ];

        assert!(!validate_field(&FieldValue::text("short"), &validators, &state));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn form_validity_is_the_and_of_stored_flags() {
        let mut fields = FieldMap::new();
        fields.insert(
            "a".to_string(),
            FieldState::new(FieldValue::Empty, true, false, Vec::new(), Vec::new()),
        );
        fields.insert(
            "b".to_string(),
            FieldState::new(FieldValue::Empty, true, false, Vec::new(), Vec::new()),
        );
        assert!(validate_form(&fields));

        fields.insert(
            "c".to_string(),
            FieldState::new(FieldValue::Empty, false, false, Vec::new(), Vec::new()),
        );
        assert!(!validate_form(&fields));

        assert!(validate_form(&FieldMap::new()));
    }
}
