//! Signup Form
//!
//! This example demonstrates a signup form with a connected password
//! confirmation field.
//!
//! Key concepts:
//! - Declarative validators (length, uppercase and digit counts)
//! - Custom rules reading the whole form snapshot
//! - Connected fields: editing the password revalidates the confirmation
//!
//! Run with: cargo run --example signup_form

use formset::builder::{create_field, FieldOptions};
use formset::engine::FormController;
use formset::fields;

fn report(form: &FormController) {
    for (id, field) in form.state().fields() {
        println!(
            "  {:>16}: value={:?} valid={}",
            id,
            field.value().display_string(),
            field.is_valid()
        );
    }
    println!("  form valid: {}\n", form.is_valid());
}

fn main() {
    println!("=== Signup Form Example ===\n");

    let mut form = FormController::new(fields! {
        "username" => create_field(
            "",
            Some(&FieldOptions::new().min_length(5).max_length(12).max_digit_count(0)),
        ),
        "password" => create_field(
            "",
            Some(
                &FieldOptions::new()
                    .min_length(8)
                    .min_uppercase_count(1)
                    .min_digit_count(1)
                    .connect_fields(["confirm_password"]),
            ),
        ),
        "confirm_password" => create_field(
            "",
            Some(&FieldOptions::new().custom_rule(|value, state| {
                state
                    .field("password")
                    .is_some_and(|f| f.is_valid() && f.value() == value)
            })),
        ),
    });

    println!("Initial state:");
    report(&form);

    println!("User fills in a username and a strong password:");
    form.handle_change("username", "lindeneg");
    form.handle_change("password", "hello therE21");
    report(&form);

    println!("Confirmation catches up:");
    form.handle_change("confirm_password", "hello therE21");
    report(&form);

    println!("Password drifts; the confirmation is retro-invalidated:");
    form.handle_change("password", "hello therE2");
    report(&form);

    println!("Flat value snapshot:");
    for (id, value) in form.values() {
        println!("  {id} = {:?}", value.display_string());
    }
}
