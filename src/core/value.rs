//! Field values and the loose coercions the validation rules rely on.
//!
//! A form field can hold text, a list of text entries, a number, a toggle,
//! an opaque file handle, or nothing at all. Rules never inspect the host's
//! widgets; they see a `FieldValue` and coerce it as needed.

use serde::{Deserialize, Serialize};

/// Identifier of a single form field, matching the id the host attaches to
/// the corresponding input element.
pub type FieldId = String;

/// Opaque handle for a file-typed input.
///
/// The engine never opens the file; it only carries the handle through the
/// state so the host can read it back out.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FileHandle {
    /// File name as reported by the host.
    pub name: String,
    /// Size in bytes as reported by the host.
    pub size: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Value held by a single form field.
///
/// `Empty` stands for "nothing entered yet" (an absent or cleared input).
/// Threshold rules treat `Empty` as out of scope and pass vacuously;
/// `Required` is the one rule that rejects it.
///
/// # Example
///
/// ```rust
/// use formset::core::FieldValue;
///
/// let name = FieldValue::from("Ada");
/// assert_eq!(name.display_string(), "Ada");
///
/// let age = FieldValue::from(36.0);
/// assert_eq!(age.as_number(), 36.0);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum FieldValue {
    /// No value present.
    Empty,
    /// Free-form text.
    Text(String),
    /// Multiple text entries (multi-select, tag lists).
    TextList(Vec<String>),
    /// Numeric input, pre-parsed by the host.
    Number(f64),
    /// Checkbox/switch input.
    Toggle(bool),
    /// File input.
    File(FileHandle),
}

impl FieldValue {
    /// Convenience constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True if no value is present.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// String form of the value, used by the character-scanning rules and
    /// by `Required`. `Empty` renders as the empty string, lists join their
    /// entries with a comma.
    pub fn display_string(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::TextList(items) => items.join(","),
            Self::Number(n) => n.to_string(),
            Self::Toggle(flag) => flag.to_string(),
            Self::File(handle) => handle.name.clone(),
        }
    }

    /// Loose numeric coercion used by the value-threshold rules.
    ///
    /// Mirrors the host-side `+value` convention: numbers pass through,
    /// toggles read as 1/0, blank text reads as 0, unparseable text reads
    /// as NaN (which fails every threshold comparison), and a one-element
    /// list coerces its single entry.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Toggle(flag) => {
                if *flag {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Text(text) => coerce_text(text),
            Self::TextList(items) => match items.as_slice() {
                [] => 0.0,
                [single] => coerce_text(single),
                _ => f64::NAN,
            },
            Self::Empty | Self::File(_) => f64::NAN,
        }
    }

    /// Length the min/max-length rules compare against: entry count for
    /// lists, trimmed character count of the string form for scalars.
    pub fn constraint_len(&self) -> usize {
        match self {
            Self::TextList(items) => items.len(),
            other => other.display_string().trim().chars().count(),
        }
    }
}

fn coerce_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::TextList(items)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Toggle(value)
    }
}

impl From<FileHandle> for FieldValue {
    fn from(handle: FileHandle) -> Self {
        Self::File(handle)
    }
}
