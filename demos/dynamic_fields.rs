//! Dynamic Fields
//!
//! This example demonstrates replacing a form's field set at runtime and
//! capturing serializable snapshots of its state.
//!
//! Key concepts:
//! - Whole-form replacement (no merging: spread the old fields yourself)
//! - Snapshot capture, JSON encoding and restore
//!
//! Run with: cargo run --example dynamic_fields

use formset::builder::{create_field, FieldOptions};
use formset::engine::FormController;
use formset::fields;
use formset::snapshot::FormSnapshot;

fn main() {
    println!("=== Dynamic Fields Example ===\n");

    let mut form = FormController::new(fields! {
        "email" => create_field("", Some(&FieldOptions::new().required().min_length(6))),
    });

    form.handle_change("email", "ada@example.com");
    println!(
        "Starting form: {} field(s), valid: {}\n",
        form.state().fields().len(),
        form.is_valid()
    );

    // Add a newsletter toggle by replacing the whole form, carrying the
    // existing fields over by hand.
    let mut replacement = form.state().fields().clone();
    replacement.insert(
        "newsletter".to_string(),
        create_field(false, Some(&FieldOptions::new().is_valid(true))),
    );
    form.set_form(replacement);

    println!(
        "After replacement: {} field(s), valid: {}",
        form.state().fields().len(),
        form.is_valid()
    );
    for (id, value) in form.values() {
        println!("  {id} = {:?}", value.display_string());
    }

    let snapshot = FormSnapshot::capture(form.state());
    let json = snapshot.to_json().expect("snapshot should encode");
    println!("\nCaptured snapshot {} ({} bytes of JSON)", snapshot.id, json.len());

    let restored = FormSnapshot::from_json(&json)
        .expect("snapshot should decode")
        .restore();
    println!(
        "Restored form: {} field(s), valid: {} (validators are not captured)",
        restored.fields().len(),
        restored.is_valid()
    );
}
