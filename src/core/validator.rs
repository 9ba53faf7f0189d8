//! Validator descriptors: rule kinds, rule parameters and custom predicates.
//!
//! A validator is declarative data (`kind` + `parameter`); turning it into a
//! boolean outcome is the job of the evaluation engine in [`crate::validate`].

use super::field::FormState;
use super::value::{FieldId, FieldValue};
use std::fmt;
use std::sync::Arc;

/// Kind of a validation rule.
///
/// The known kinds form a closed set dispatched exhaustively at evaluation
/// time. Option keys that match no known kind are carried as
/// `Unrecognized` and contribute no constraint; this keeps field
/// construction permissive without letting typos flip a field invalid.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ValidationKind {
    /// Value must be present: a non-empty list or a non-blank scalar.
    Required,
    /// Minimum list length / trimmed text length.
    MinLength,
    /// Maximum list length / trimmed text length.
    MaxLength,
    /// Minimum numeric value after loose coercion.
    MinValue,
    /// Maximum numeric value after loose coercion.
    MaxValue,
    /// Minimum count of ASCII uppercase characters.
    MinUppercaseCount,
    /// Maximum count of ASCII uppercase characters.
    MaxUppercaseCount,
    /// Minimum count of ASCII digits.
    MinDigitCount,
    /// Maximum count of ASCII digits.
    MaxDigitCount,
    /// Caller-supplied predicate over the value and the whole form.
    CustomRule,
    /// Option key that matched no known rule. Ignored during evaluation.
    Unrecognized(String),
}

impl ValidationKind {
    /// Map an options-map key to its rule kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formset::core::ValidationKind;
    ///
    /// assert_eq!(ValidationKind::from_key("min_length"), ValidationKind::MinLength);
    /// assert_eq!(
    ///     ValidationKind::from_key("ayy"),
    ///     ValidationKind::Unrecognized("ayy".to_string())
    /// );
    /// ```
    pub fn from_key(key: &str) -> Self {
        match key {
            "required" => Self::Required,
            "min_length" => Self::MinLength,
            "max_length" => Self::MaxLength,
            "min_value" => Self::MinValue,
            "max_value" => Self::MaxValue,
            "min_uppercase_count" => Self::MinUppercaseCount,
            "max_uppercase_count" => Self::MaxUppercaseCount,
            "min_digit_count" => Self::MinDigitCount,
            "max_digit_count" => Self::MaxDigitCount,
            "custom_rule" => Self::CustomRule,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The options-map key for this kind, for display and diagnostics.
    pub fn key(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::MinValue => "min_value",
            Self::MaxValue => "max_value",
            Self::MinUppercaseCount => "min_uppercase_count",
            Self::MaxUppercaseCount => "max_uppercase_count",
            Self::MinDigitCount => "min_digit_count",
            Self::MaxDigitCount => "max_digit_count",
            Self::CustomRule => "custom_rule",
            Self::Unrecognized(key) => key,
        }
    }
}

/// Caller-supplied predicate over a field value and the whole form state.
///
/// Predicates must be pure (deterministic, no side effects on form state)
/// and thread-safe. They are shared by reference, so cloning a field or a
/// form never duplicates the closure.
///
/// # Example
///
/// ```rust
/// use formset::core::{CustomRule, FieldValue, FormState};
///
/// let non_blank = CustomRule::new(|value: &FieldValue, _state: &FormState| {
///     !value.display_string().trim().is_empty()
/// });
///
/// let empty = FormState::new(Default::default(), false);
/// assert!(non_blank.check(&FieldValue::from("hi"), &empty));
/// assert!(!non_blank.check(&FieldValue::from("   "), &empty));
/// ```
#[derive(Clone)]
pub struct CustomRule {
    predicate: Arc<dyn Fn(&FieldValue, &FormState) -> bool + Send + Sync>,
}

impl CustomRule {
    /// Create a rule from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&FieldValue, &FormState) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate against a value and a form snapshot.
    pub fn check(&self, value: &FieldValue, state: &FormState) -> bool {
        (self.predicate)(value, state)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRule(..)")
    }
}

/// Two rules compare equal only if they share the same predicate.
/// Closures have no structural identity, so pointer identity is the best
/// available notion of equality; it holds across clones.
impl PartialEq for CustomRule {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

/// Parameter attached to a validation rule.
///
/// Threshold rules expect `Number`, `required` expects `Flag`, custom rules
/// expect `Rule`. A parameter of the wrong shape never fails a field; the
/// evaluation engine treats the rule as vacuously satisfied instead.
///
/// `Rule` carries a function and is therefore not serializable; snapshots
/// exclude validators for this reason.
#[derive(Clone, PartialEq, Debug)]
pub enum RuleValue {
    /// Numeric threshold (lengths, values, character counts).
    Number(f64),
    /// Activation flag (`required`, reserved control keys).
    Flag(bool),
    /// Free-form text payload, kept for unrecognized keys.
    Text(String),
    /// Field-id list (the `connect_fields` reserved key).
    FieldList(Vec<FieldId>),
    /// Custom predicate.
    Rule(CustomRule),
}

impl RuleValue {
    /// Loose truthiness used when reserved control keys are read.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(text) => !text.is_empty(),
            Self::FieldList(ids) => !ids.is_empty(),
            Self::Rule(_) => true,
        }
    }
}

/// A single validation rule attached to a field: what to check (`kind`) and
/// the data to check against (`parameter`). Immutable once created.
#[derive(Clone, PartialEq, Debug)]
pub struct Validator {
    pub kind: ValidationKind,
    pub parameter: RuleValue,
}

impl Validator {
    /// Pure construction. Parameter shape is deliberately not checked here;
    /// a mismatched shape surfaces as a vacuously satisfied rule at
    /// evaluation time, never as an error.
    pub fn new(kind: ValidationKind, parameter: RuleValue) -> Self {
        Self { kind, parameter }
    }
}
