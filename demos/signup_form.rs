//! Signup Form
//!
//! This example drives a single field tree through the pure cycle functions.
//!
//! Key concepts:
//! - Any schema shape normalizes to the same canonical field record
//! - Group fields keep their value and option flags in sync
//! - Dirty flags compare against the initial value, ignoring order
//! - Validation errors are replaced on every cycle
//!
//! Run with: cargo run --example signup_form

use formstate::config::FormConfig;
use formstate::core::{Changes, FieldPatch};
use formstate::cycle::{handle_event, reset, Hooks, RawEvent, SelectOption, ValidationErrors};
use formstate::normalize::normalize_json;
use serde_json::json;

fn main() {
    println!("=== Signup Form Example ===\n");

    let tree = normalize_json(
        json!({
            "username": "",
            "password": {"value": "", "widget": "password"},
            "pets": {"fields": ["cat", "dog", "fish"], "value": "cat"},
            "newsletter": {"fields": {"weekly": {}, "monthly": {"disabled": true}}},
            "agree": false,
        }),
        &FormConfig::default(),
    )
    .unwrap();

    println!("Normalized tree:");
    println!("{}\n", serde_json::to_string_pretty(&tree).unwrap());

    // Lock the password field until a username is entered, and require
    // the terms to be accepted.
    let hooks = Hooks::new()
        .on_change(|tree, _event| {
            let empty = tree.get("username")?.value().as_text() == Some("");
            Some(Changes::from([(
                "password".to_string(),
                FieldPatch::default().attr("disabled", json!(empty)),
            )]))
        })
        .validate(|tree| {
            let mut errors = ValidationErrors::new();
            if tree.get("agree").and_then(|f| f.value().as_bool()) != Some(true) {
                errors.insert("agree".to_string(), "Please accept the terms".into());
            }
            if tree.get("username").and_then(|f| f.value().as_text()) == Some("admin") {
                errors.insert("nonFieldErrors".to_string(), vec!["Reserved name"].into());
            }
            errors
        });

    let events = vec![
        RawEvent::text("username", "admin"),
        RawEvent::text("username", "john"),
        RawEvent::select_multiple(
            "pets",
            vec![
                SelectOption::new("cat", false),
                SelectOption::new("dog", true),
                SelectOption::new("fish", true),
            ],
        ),
        RawEvent::checkbox("newsletter", "weekly", true),
        RawEvent::checkbox("agree", "false", true),
    ];

    let mut tree = tree;
    for event in &events {
        let outcome = handle_event(&tree, event, &hooks);
        tree = outcome.tree;

        let field = tree.get(&event.name).unwrap();
        println!("Event on '{}' ({})", event.name, event.kind);
        println!("  value:      {}", json!(field.value()));
        println!("  dirty:      {}", field.is_dirty());
        println!("  has errors: {}", outcome.has_errors);
        if let Some(errors) = tree.non_field_errors() {
            println!("  form errors: {errors:?}");
        }
        println!(
            "  password disabled: {}",
            tree.get("password").unwrap().attr("disabled").unwrap()
        );
    }

    println!("\nErrors per field:");
    for (name, field) in tree.iter() {
        println!("  {name}: {:?}", field.visible_errors(false, &[]));
    }

    let outcome = reset(&tree, &hooks);
    println!("\nAfter reset:");
    for (name, field) in outcome.tree.iter() {
        println!("  {name}: {} (dirty: {})", json!(field.value()), field.is_dirty());
    }
    println!("  has errors: {}", outcome.has_errors);

    println!("\n=== Example Complete ===");
}
