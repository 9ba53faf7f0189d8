//! Formset: a reactive form-state container
//!
//! Formset keeps the state of a form (field values, per-field validity,
//! touch flags and the aggregate validity) consistent while the host
//! dispatches edit events into it. It follows a "pure core, imperative
//! shell" layout: the reducer and the validator engine are pure functions,
//! and the [`FormController`](engine::FormController) is the thin stateful
//! shell a UI layer talks to.
//!
//! # Core Concepts
//!
//! - **Fields**: named inputs with a value, validity and touch state
//! - **Validators**: declarative rules (kind + parameter) evaluated against
//!   a field's value, including custom predicates over the whole form
//! - **Connected fields**: fields revalidated whenever another field
//!   changes (password/confirmation pairs and the like)
//! - **Actions**: change, touch and replace, applied by a pure reducer
//!
//! The engine never fails out of its public surface: unknown field ids,
//! malformed rule parameters and unrecognized rule kinds degrade to
//! "state unchanged" or "rule skipped" with a `tracing` diagnostic.
//!
//! # Example
//!
//! ```rust
//! use formset::builder::{create_field, FieldOptions};
//! use formset::engine::FormController;
//! use formset::fields;
//!
//! let mut form = FormController::new(fields! {
//!     "username" => create_field(
//!         "",
//!         Some(&FieldOptions::new().min_length(5).max_length(12)),
//!     ),
//!     "password" => create_field(
//!         "",
//!         Some(
//!             &FieldOptions::new()
//!                 .min_length(8)
//!                 .min_uppercase_count(1)
//!                 .min_digit_count(1),
//!         ),
//!     ),
//! });
//!
//! assert!(!form.is_valid());
//!
//! form.handle_change("username", "lindeneg");
//! form.handle_change("password", "hello therE21");
//! assert!(form.is_valid());
//!
//! form.handle_touch("password");
//! assert!(form.field("password").unwrap().is_touched());
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod snapshot;
pub mod validate;

// Re-export commonly used types
pub use builder::{create_field, FieldOptions};
pub use core::{FieldMap, FieldState, FieldValue, FormState};
pub use engine::{apply, FormAction, FormController};
