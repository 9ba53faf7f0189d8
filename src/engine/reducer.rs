//! The form reducer: pure state transitions with dependency-aware
//! revalidation.
//!
//! `apply` never mutates its input and never fails out of the public
//! surface: an action targeting an unknown field returns the state
//! unchanged and emits a diagnostic. Untouched fields are shared between
//! the old and new state; only the records that change are rebuilt.

use super::action::FormAction;
use crate::core::{FieldId, FieldMap, FieldValue, FormInit, FormState};
use crate::validate::{validate_field, validate_form};

/// Coerce either accepted input shape into a `FormState`.
///
/// A bare field mapping is wrapped with a freshly computed aggregate flag.
/// A full state is taken as-is, trusting the flag the caller supplied;
/// construction from raw inputs always computes validity, construction
/// from a complete state never second-guesses it.
///
/// # Example
///
/// ```rust
/// use formset::builder::create_field;
/// use formset::engine::normalize_initial_state;
/// use formset::fields;
///
/// let fields = fields! {
///     "name" => create_field("Ada", None),
/// };
/// let state = normalize_initial_state(fields.into());
/// assert!(!state.is_valid());
/// ```
pub fn normalize_initial_state(init: FormInit) -> FormState {
    match init {
        FormInit::State(state) => state,
        FormInit::Fields(fields) => {
            let is_valid = validate_form(&fields);
            FormState::new(fields, is_valid)
        }
    }
}

/// Apply one action to a form state, producing the next state.
///
/// Pure: the input state is never mutated, and applying the same action to
/// the same state always yields the same result.
pub fn apply(state: &FormState, action: FormAction) -> FormState {
    match action {
        FormAction::FieldChanged { id, value } => change_field(state, id, value),
        FormAction::FieldTouched { id } => touch_field(state, &id),
        FormAction::FormReplaced { state: init } => normalize_initial_state(init),
    }
}

fn change_field(state: &FormState, id: FieldId, value: FieldValue) -> FormState {
    let Some(field) = state.field(&id) else {
        tracing::warn!(
            field = %id,
            "cannot recognize field id; ensure the form element id matches a declared field"
        );
        return state.clone();
    };

    // The changed field validates against the snapshot that still holds its
    // old value; custom rules on the field itself see the pre-update form.
    let is_valid = validate_field(&value, field.validators(), state);
    let updated = field.with_value(value, is_valid);

    let mut fields = state.fields().clone();
    fields.insert(id.clone(), updated);
    let interim = FormState::new(fields, state.is_valid());

    // Connected fields validate against the post-change snapshot, so their
    // custom rules observe the origin field's new value.
    let fields = revalidate_connected(&interim, &id);
    let is_valid = validate_form(&fields);
    FormState::new(fields, is_valid)
}

/// Re-run validation for every field connected to `origin_id`, each against
/// its own stored value with `state` as context. Connected ids that do not
/// exist in the field set are skipped per-field; they never abort the
/// transition.
fn revalidate_connected(state: &FormState, origin_id: &str) -> FieldMap {
    let mut fields = state.fields().clone();
    let connected: Vec<FieldId> = state
        .field(origin_id)
        .map(|field| field.connected_field_ids().to_vec())
        .unwrap_or_default();

    for connected_id in connected {
        let updated = match fields.get(&connected_id) {
            Some(entry) => {
                let is_valid = validate_field(entry.value(), entry.validators(), state);
                entry.with_validity(is_valid)
            }
            None => {
                tracing::warn!(
                    origin = %origin_id,
                    connected = %connected_id,
                    "connected field does not exist; skipping revalidation"
                );
                continue;
            }
        };
        fields.insert(connected_id, updated);
    }
    fields
}

fn touch_field(state: &FormState, id: &str) -> FormState {
    let Some(field) = state.field(id) else {
        tracing::warn!(
            field = %id,
            "cannot recognize field id; ensure the form element id matches a declared field"
        );
        return state.clone();
    };

    let mut fields = state.fields().clone();
    fields.insert(id.to_string(), field.touched());
    FormState::new(fields, state.is_valid())
}
