//! Validator factory and options-driven field construction.

use super::options::{FieldOptions, KEY_CONNECT_FIELDS, KEY_IS_TOUCHED, KEY_IS_VALID};
use crate::core::{FieldId, FieldState, FieldValue, RuleValue, ValidationKind, Validator};

/// Build a validator descriptor from a kind and a parameter.
///
/// Pure construction: the parameter shape is deliberately not checked
/// against the kind. A mismatch surfaces at evaluation time as a vacuously
/// satisfied rule, never as an error here.
pub fn build_validator(kind: ValidationKind, parameter: RuleValue) -> Validator {
    Validator::new(kind, parameter)
}

/// Build a field's initial state from a value and an optional options map.
///
/// Reserved keys (`is_valid`, `is_touched`, `connect_fields`) seed the
/// initial flags and the connection list. Every other entry becomes a
/// validator, in declaration order; keys matching no known rule yield
/// [`ValidationKind::Unrecognized`] validators that the evaluation engine
/// ignores.
///
/// Without options the field starts untouched, invalid, with no validators
/// and no connections.
///
/// # Example
///
/// ```rust
/// use formset::builder::{create_field, FieldOptions};
/// use formset::core::ValidationKind;
///
/// let field = create_field(
///     "",
///     Some(
///         &FieldOptions::new()
///             .min_length(8)
///             .connect_fields(["confirm_password"]),
///     ),
/// );
///
/// assert_eq!(field.validators().len(), 1);
/// assert_eq!(field.validators()[0].kind, ValidationKind::MinLength);
/// assert_eq!(field.connected_field_ids(), ["confirm_password".to_string()]);
/// ```
pub fn create_field(value: impl Into<FieldValue>, options: Option<&FieldOptions>) -> FieldState {
    let mut is_valid = false;
    let mut is_touched = false;
    let mut connected: Vec<FieldId> = Vec::new();
    let mut validators: Vec<Validator> = Vec::new();

    if let Some(options) = options {
        for (key, entry) in options.entries() {
            match key.as_str() {
                KEY_IS_VALID => is_valid = entry.is_truthy(),
                KEY_IS_TOUCHED => is_touched = entry.is_truthy(),
                KEY_CONNECT_FIELDS => match entry {
                    RuleValue::FieldList(ids) => connected = ids.clone(),
                    _ => {
                        tracing::trace!("connect_fields expects a field-id list; entry skipped");
                    }
                },
                rule_key => validators.push(build_validator(
                    ValidationKind::from_key(rule_key),
                    entry.clone(),
                )),
            }
        }
    }

    FieldState::new(value.into(), is_valid, is_touched, validators, connected)
}
