//! Stateful controller owning one form instance.
//!
//! The controller is the imperative shell around the pure reducer: the
//! host wires its input events to `handle_change`/`handle_touch`, reads
//! the returned state and renders from it. Each handler dispatches exactly
//! one action synchronously; batching and re-render scheduling stay with
//! the host.

use super::action::FormAction;
use super::reducer::{apply, normalize_initial_state};
use crate::core::{FieldId, FieldState, FieldValue, FormInit, FormState};
use indexmap::IndexMap;

/// Owns a single [`FormState`] and exposes the operations the UI layer
/// plugs into. A form state is exclusively owned by one controller; two
/// controllers never share one.
///
/// # Example
///
/// ```rust
/// use formset::builder::{create_field, FieldOptions};
/// use formset::engine::FormController;
/// use formset::fields;
///
/// let mut form = FormController::new(fields! {
///     "username" => create_field("", Some(&FieldOptions::new().min_length(5))),
/// });
///
/// assert!(!form.is_valid());
/// form.handle_change("username", "lindeneg");
/// assert!(form.is_valid());
/// ```
pub struct FormController {
    state: FormState,
}

impl FormController {
    /// Create a controller from a full state or a bare field mapping.
    pub fn new(init: impl Into<FormInit>) -> Self {
        Self {
            state: normalize_initial_state(init.into()),
        }
    }

    /// Current form state (read-only view).
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Aggregate validity of the current state.
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Look up a single field by id.
    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.state.field(id)
    }

    /// Flat `{id: value}` snapshot in declaration order.
    pub fn values(&self) -> IndexMap<FieldId, FieldValue> {
        self.state.values()
    }

    /// Dispatch a value change for `id`, returning the new state.
    pub fn handle_change(
        &mut self,
        id: impl Into<FieldId>,
        value: impl Into<FieldValue>,
    ) -> &FormState {
        self.dispatch(FormAction::FieldChanged {
            id: id.into(),
            value: value.into(),
        })
    }

    /// Dispatch a touch (focus lost) for `id`, returning the new state.
    pub fn handle_touch(&mut self, id: impl Into<FieldId>) -> &FormState {
        self.dispatch(FormAction::FieldTouched { id: id.into() })
    }

    /// Replace the whole form, returning the new state. The payload is
    /// normalized like any initial state; nothing is merged from the
    /// previous state.
    pub fn set_form(&mut self, init: impl Into<FormInit>) -> &FormState {
        self.dispatch(FormAction::FormReplaced { state: init.into() })
    }

    fn dispatch(&mut self, action: FormAction) -> &FormState {
        self.state = apply(&self.state, action);
        &self.state
    }
}
