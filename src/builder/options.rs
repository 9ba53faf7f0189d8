//! Declaration-ordered options map for field construction.

use crate::core::{CustomRule, FieldValue, FormState, RuleValue};

/// Reserved control keys: they seed the initial field flags and the
/// connection list, and never produce validators.
pub(crate) const KEY_IS_VALID: &str = "is_valid";
pub(crate) const KEY_IS_TOUCHED: &str = "is_touched";
pub(crate) const KEY_CONNECT_FIELDS: &str = "connect_fields";

/// Flat options map driving [`create_field`](crate::builder::create_field).
///
/// Entries keep their declaration order; every non-reserved key becomes a
/// validator in that order. Unknown keys are allowed and yield inert
/// validators, so a typo degrades gracefully instead of erroring.
///
/// # Example
///
/// ```rust
/// use formset::builder::{create_field, FieldOptions};
///
/// let field = create_field(
///     "",
///     Some(&FieldOptions::new().min_length(5).max_length(12).is_valid(true)),
/// );
///
/// assert!(field.is_valid());
/// assert_eq!(field.validators().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldOptions {
    entries: Vec<(String, RuleValue)>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under an arbitrary key. The typed setters below all
    /// funnel through here; use this directly for keys outside the known
    /// vocabulary.
    pub fn set(mut self, key: impl Into<String>, value: RuleValue) -> Self {
        self.entries.push((key.into(), value));
        self
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[(String, RuleValue)] {
        &self.entries
    }

    /// The field must hold a value (non-empty list / non-blank scalar).
    pub fn required(self) -> Self {
        self.set("required", RuleValue::Flag(true))
    }

    pub fn min_length(self, length: usize) -> Self {
        self.set("min_length", RuleValue::Number(length as f64))
    }

    pub fn max_length(self, length: usize) -> Self {
        self.set("max_length", RuleValue::Number(length as f64))
    }

    pub fn min_value(self, value: f64) -> Self {
        self.set("min_value", RuleValue::Number(value))
    }

    pub fn max_value(self, value: f64) -> Self {
        self.set("max_value", RuleValue::Number(value))
    }

    pub fn min_uppercase_count(self, count: usize) -> Self {
        self.set("min_uppercase_count", RuleValue::Number(count as f64))
    }

    pub fn max_uppercase_count(self, count: usize) -> Self {
        self.set("max_uppercase_count", RuleValue::Number(count as f64))
    }

    pub fn min_digit_count(self, count: usize) -> Self {
        self.set("min_digit_count", RuleValue::Number(count as f64))
    }

    pub fn max_digit_count(self, count: usize) -> Self {
        self.set("max_digit_count", RuleValue::Number(count as f64))
    }

    /// Attach a custom predicate receiving the field value and the whole
    /// form snapshot.
    pub fn custom_rule<F>(self, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &FormState) -> bool + Send + Sync + 'static,
    {
        self.set("custom_rule", RuleValue::Rule(CustomRule::new(predicate)))
    }

    /// Seed the initial validity flag (reserved key, no validator).
    pub fn is_valid(self, flag: bool) -> Self {
        self.set(KEY_IS_VALID, RuleValue::Flag(flag))
    }

    /// Seed the initial touched flag (reserved key, no validator).
    pub fn is_touched(self, flag: bool) -> Self {
        self.set(KEY_IS_TOUCHED, RuleValue::Flag(flag))
    }

    /// Declare which fields must be revalidated whenever this one changes
    /// (reserved key, no validator).
    pub fn connect_fields<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = ids.into_iter().map(Into::into).collect();
        self.set(KEY_CONNECT_FIELDS, RuleValue::FieldList(ids))
    }
}
