//! Macros for ergonomic form construction.

/// Build a declaration-ordered [`FieldMap`](crate::core::FieldMap) literal.
///
/// # Example
///
/// ```rust
/// use formset::builder::{create_field, FieldOptions};
/// use formset::engine::FormController;
/// use formset::fields;
///
/// let form = FormController::new(fields! {
///     "username" => create_field("", Some(&FieldOptions::new().min_length(5))),
///     "accepts_terms" => create_field(false, Some(&FieldOptions::new().required())),
/// });
///
/// assert_eq!(form.state().fields().len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    ( $( $id:expr => $field:expr ),* $(,)? ) => {{
        let mut map = $crate::core::FieldMap::new();
        $( map.insert($id.into(), $field); )*
        map
    }};
}

#[cfg(test)]
mod tests {
    use crate::builder::create_field;

    #[test]
    fn fields_macro_preserves_declaration_order() {
        let map = fields! {
            "zulu" => create_field("", None),
            "alpha" => create_field("", None),
            "mike" => create_field("", None),
        };

        let ids: Vec<_> = map.keys().cloned().collect();
        assert_eq!(
            ids,
            vec!["zulu".to_string(), "alpha".to_string(), "mike".to_string()]
        );
    }

    #[test]
    fn fields_macro_accepts_an_empty_form() {
        let map = fields! {};
        assert!(map.is_empty());
    }
}
