//! Field construction: the options map, the validator factory and the
//! `fields!` literal macro.

mod field;
mod macros;
mod options;

pub use field::{build_validator, create_field};
pub use options::FieldOptions;
