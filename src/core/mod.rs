//! Core form-state data model.
//!
//! This module contains the pure data vocabulary everything else builds on:
//! - Field values and coercions (`FieldValue`)
//! - Validator descriptors (`ValidationKind`, `RuleValue`, `Validator`)
//! - Field and form records (`FieldState`, `FormState`)
//!
//! All types here are immutable values; no logic in this module performs
//! side effects.

mod field;
mod validator;
mod value;

pub use field::{FieldMap, FieldState, FormInit, FormState};
pub use validator::{CustomRule, RuleValue, ValidationKind, Validator};
pub use value::{FieldId, FieldValue, FileHandle};
