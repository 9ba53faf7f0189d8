//! Per-field and whole-form state records.
//!
//! Both records are immutable values: updates go through the record-style
//! constructors (`with_value`, `with_validity`, `touched`), which return a
//! new record and leave the original untouched. Validators and connected
//! ids are fixed at creation and only readable through slice accessors.

use super::validator::Validator;
use super::value::{FieldId, FieldValue};
use indexmap::IndexMap;

/// Insertion-ordered mapping of field ids to field state.
///
/// Declaration order is part of the data model: validators run and values
/// list out in the order fields were declared.
pub type FieldMap = IndexMap<FieldId, FieldState>;

/// State of a single form field.
///
/// # Example
///
/// ```rust
/// use formset::builder::create_field;
/// use formset::core::FieldValue;
///
/// let field = create_field("", None);
/// assert_eq!(field.value(), &FieldValue::text(""));
/// assert!(!field.is_valid());
/// assert!(!field.is_touched());
/// assert!(field.validators().is_empty());
/// assert!(field.connected_field_ids().is_empty());
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct FieldState {
    value: FieldValue,
    is_valid: bool,
    is_touched: bool,
    validators: Vec<Validator>,
    connected_field_ids: Vec<FieldId>,
}

impl FieldState {
    /// Assemble a field from its parts. Prefer
    /// [`create_field`](crate::builder::create_field) for options-driven
    /// construction.
    pub fn new(
        value: FieldValue,
        is_valid: bool,
        is_touched: bool,
        validators: Vec<Validator>,
        connected_field_ids: Vec<FieldId>,
    ) -> Self {
        Self {
            value,
            is_valid,
            is_touched,
            validators,
            connected_field_ids,
        }
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_touched(&self) -> bool {
        self.is_touched
    }

    /// Attached validators, in declaration order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Ids of fields whose validity must be recomputed whenever this field
    /// changes, in declaration order.
    pub fn connected_field_ids(&self) -> &[FieldId] {
        &self.connected_field_ids
    }

    /// New record with a replaced value and validity flag. Validators,
    /// connections and the touched flag carry over; the original record is
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formset::builder::create_field;
    /// use formset::core::FieldValue;
    ///
    /// let field = create_field("old", None);
    /// let updated = field.with_value(FieldValue::text("new"), true);
    ///
    /// assert_eq!(field.value(), &FieldValue::text("old"));
    /// assert_eq!(updated.value(), &FieldValue::text("new"));
    /// assert!(updated.is_valid());
    /// ```
    pub fn with_value(&self, value: FieldValue, is_valid: bool) -> Self {
        Self {
            value,
            is_valid,
            ..self.clone()
        }
    }

    /// New record with only the validity flag replaced.
    pub fn with_validity(&self, is_valid: bool) -> Self {
        Self {
            is_valid,
            ..self.clone()
        }
    }

    /// New record marked as touched.
    pub fn touched(&self) -> Self {
        Self {
            is_touched: true,
            ..self.clone()
        }
    }
}

/// State of a whole form: the field map plus the aggregate validity flag.
///
/// The aggregate flag is the AND of all per-field flags, maintained by the
/// transition engine; constructing a `FormState` directly does not
/// recompute it.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormState {
    fields: FieldMap,
    is_valid: bool,
}

impl FormState {
    pub fn new(fields: FieldMap, is_valid: bool) -> Self {
        Self { fields, is_valid }
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Look up a single field by id.
    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.fields.get(id)
    }

    /// Aggregate validity: true only if every field is valid.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Flat `{id: value}` snapshot in declaration order.
    pub fn values(&self) -> IndexMap<FieldId, FieldValue> {
        self.fields
            .iter()
            .map(|(id, field)| (id.clone(), field.value().clone()))
            .collect()
    }
}

/// Input accepted everywhere a "new form state" is required: either a full
/// [`FormState`] or a bare field mapping. See
/// [`normalize_initial_state`](crate::engine::normalize_initial_state) for
/// how each shape is coerced.
#[derive(Clone, Debug)]
pub enum FormInit {
    /// A complete state; its aggregate flag is trusted as supplied.
    State(FormState),
    /// A bare field mapping; the aggregate flag is computed fresh.
    Fields(FieldMap),
}

impl From<FormState> for FormInit {
    fn from(state: FormState) -> Self {
        Self::State(state)
    }
}

impl From<FieldMap> for FormInit {
    fn from(fields: FieldMap) -> Self {
        Self::Fields(fields)
    }
}
