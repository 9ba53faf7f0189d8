//! Actions accepted by the form reducer.

use crate::core::{FieldId, FieldValue, FormInit};

/// A discrete event applied to a form state.
///
/// Covers the three things a host can do to a form: edit a field, mark a
/// field as visited, or swap out the whole state.
#[derive(Clone, Debug)]
pub enum FormAction {
    /// A field received a new value. Triggers revalidation of the field
    /// and of every field connected to it.
    FieldChanged { id: FieldId, value: FieldValue },

    /// A field received and lost focus. Only flips the touched flag.
    FieldTouched { id: FieldId },

    /// The whole form is replaced; no merging with the previous state.
    FormReplaced { state: FormInit },
}
