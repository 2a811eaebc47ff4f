//! Form Store
//!
//! This example mounts two forms in a store and feeds them events.
//!
//! Key concepts:
//! - Mount checks every problem with a request at once
//! - Each form keeps its own tree, hooks and metadata
//! - Focus changes skip the hooks entirely
//! - Submit hands out a serializable snapshot
//!
//! Run with: cargo run --example form_store

use formstate::config::{ActionTypes, FormConfig};
use formstate::cycle::{FocusKind, RawEvent, ValidationErrors};
use formstate::normalize::FieldSpec;
use formstate::store::{FormOptions, FormStore};
use serde_json::json;

fn main() {
    println!("=== Form Store Example ===\n");

    let config = FormConfig {
        non_field_errors_key: "formErrors".to_string(),
        action_types: ActionTypes::with_prefix("demo"),
    };
    let mut store = FormStore::new(config).unwrap();

    // A request without id or schema is rejected with both problems listed
    match store.mount(FormOptions::new("")) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Rejected mount: {e}\n"),
    }

    store
        .mount(
            FormOptions::new("login")
                .field("email", "")
                .field("remember", false)
                .validate(|tree| {
                    let mut errors = ValidationErrors::new();
                    let email = tree.get("email").and_then(|f| f.value().as_text());
                    if !email.is_some_and(|e| e.contains('@')) {
                        errors.insert("email".to_string(), "Enter a valid email".into());
                    }
                    errors
                }),
        )
        .unwrap();

    store
        .mount(
            FormOptions::new("search").field(
                "sort",
                FieldSpec::new()
                    .options(["relevance", "newest", "oldest"])
                    .value("relevance")
                    .attr("label", json!("Sort by")),
            ),
        )
        .unwrap();

    println!("Mounted forms: {}", store.len());
    for id in ["login", "search"] {
        let form = store.get(id).unwrap();
        println!(
            "  {id}: initialized={}, has_errors={}",
            form.is_initialized(),
            form.has_errors()
        );
    }

    println!("\nEditing login...");
    store.focus("login", "email", FocusKind::Focus).unwrap();
    let form = store
        .change("login", &RawEvent::text("email", "jane@example.com"))
        .unwrap();
    let email = form.fields().get("email").unwrap();
    println!("  email active: {}", email.is_active());
    println!("  email dirty: {}", email.is_dirty());
    println!("  has errors: {}", form.has_errors());
    store.focus("login", "email", FocusKind::Blur).unwrap();

    println!("\nEditing search...");
    let form = store
        .change("search", &RawEvent::radio("sort", "newest"))
        .unwrap();
    println!(
        "  sort: {}",
        json!(form.fields().get("sort").unwrap().value())
    );
    println!("  cycles: {}", form.metadata().cycles);

    let snapshot = store.submit("login").unwrap();
    println!("\nSubmitted login:");
    println!("{}", serde_json::to_string_pretty(&snapshot).unwrap());

    let form = store.unmount("search").unwrap();
    println!(
        "\nUnmounted '{}' after {} cycles, {} form(s) left",
        form.id(),
        form.metadata().cycles,
        store.len()
    );

    println!("\n=== Example Complete ===");
}
