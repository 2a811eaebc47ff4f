//! End-to-end scenarios over the public API.

use formstate::config::FormConfig;
use formstate::core::{Changes, FieldPatch, FieldTree, FieldValue};
use formstate::cycle::{
    event_to_change, handle_event, Hooks, RawEvent, SelectOption, ValidationErrors,
};
use formstate::mutate::apply_change;
use formstate::normalize::normalize_json;
use serde_json::json;

fn fixture() -> FieldTree {
    normalize_json(
        json!({
            "username": {"value": "john", "disabled": true},
            "password": "doe",
            "transport": {
                "fields": ["feet", "car", "bicycle", "moto", "turbodesk"],
                "value": ["car", "turbodesk"],
            },
            "feet": {"fields": ["left", "right", "both"], "value": "right"},
            "car": {"fields": ["toyota", "mazda", "ford"], "value": ["toyota", "ford"]},
            "color": {
                "fields": {"red": {}, "green": {}, "blue": {"disabled": true}},
                "value": "red",
            },
            "agree": false,
        }),
        &FormConfig::default(),
    )
    .unwrap()
}

fn edit(tree: &FieldTree, event: RawEvent) -> FieldTree {
    apply_change(tree, &event_to_change(&event), true)
}

#[test]
fn normalizes_every_schema_shape() {
    let json = serde_json::to_value(fixture()).unwrap();
    assert_eq!(
        json,
        json!({
            "username": {"value": "john", "initialValue": "john", "disabled": true},
            "password": {"value": "doe", "initialValue": "doe"},
            "transport": {
                "value": ["car", "turbodesk"],
                "initialValue": ["car", "turbodesk"],
                "fields": {
                    "feet": {"checked": false},
                    "car": {"checked": true},
                    "bicycle": {"checked": false},
                    "moto": {"checked": false},
                    "turbodesk": {"checked": true},
                },
            },
            "feet": {
                "value": ["right"],
                "initialValue": ["right"],
                "fields": {
                    "left": {"checked": false},
                    "right": {"checked": true},
                    "both": {"checked": false},
                },
            },
            "car": {
                "value": ["toyota", "ford"],
                "initialValue": ["toyota", "ford"],
                "fields": {
                    "toyota": {"checked": true},
                    "mazda": {"checked": false},
                    "ford": {"checked": true},
                },
            },
            "color": {
                "value": ["red"],
                "initialValue": ["red"],
                "fields": {
                    "red": {"checked": true},
                    "green": {"checked": false},
                    "blue": {"checked": false, "disabled": true},
                },
            },
            "agree": {"value": false, "initialValue": false, "checked": false},
            "nonFieldErrors": {"errors": null},
        })
    );
}

#[test]
fn scenario_a_plain_scalar() {
    let tree = normalize_json(json!({"username": "john"}), &FormConfig::default()).unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "username": {"value": "john", "initialValue": "john"},
            "nonFieldErrors": {"errors": null},
        })
    );
}

#[test]
fn scenario_b_group_with_scalar_value() {
    let tree = normalize_json(
        json!({"sex": {"fields": ["male", "female"], "value": "male"}}),
        &FormConfig::default(),
    )
    .unwrap();
    let sex = tree.get("sex").unwrap();
    assert_eq!(sex.value(), &FieldValue::from(vec!["male"]));
    assert!(sex.option("male").unwrap().checked());
    assert!(!sex.option("female").unwrap().checked());
}

#[test]
fn scenario_c_boolean_checkbox() {
    let tree = edit(&fixture(), RawEvent::checkbox("agree", "false", true));
    let agree = tree.get("agree").unwrap();
    assert_eq!(agree.value(), &FieldValue::from(true));
    assert_eq!(agree.checked(), Some(true));
    assert_eq!(agree.dirty(), Some(true));
    assert_eq!(agree.initial_value(), &FieldValue::from(false));
}

#[test]
fn scenario_d_select_multiple() {
    let tree = normalize_json(
        json!({"pets": {"fields": ["cat", "dog", "fish", "bird"]}}),
        &FormConfig::default(),
    )
    .unwrap();
    let tree = edit(
        &tree,
        RawEvent::select_multiple(
            "pets",
            vec![
                SelectOption::new("cat", false),
                SelectOption::new("dog", true),
                SelectOption::new("fish", false),
                SelectOption::new("bird", true),
            ],
        ),
    );

    let pets = tree.get("pets").unwrap();
    assert_eq!(pets.value(), &FieldValue::from(vec!["dog", "bird"]));
    let flags: Vec<bool> = pets.options().unwrap().values().map(|o| o.checked()).collect();
    assert_eq!(flags, vec![false, true, false, true]);
}

#[test]
fn scenario_e_validation_errors_come_and_go() {
    let hooks = Hooks::new().validate(|tree| {
        let mut errors = ValidationErrors::new();
        if tree.get("username").and_then(|f| f.value().as_text()) == Some("mark") {
            errors.insert("username".to_string(), "Too many".into());
        }
        errors
    });

    let first = handle_event(&fixture(), &RawEvent::text("username", "mark"), &hooks);
    assert!(first.has_errors);
    assert_eq!(
        first.tree.get("username").unwrap().errors(),
        Some(&["Too many".to_string()][..])
    );

    let second = handle_event(&first.tree, &RawEvent::text("username", "bob"), &hooks);
    assert!(!second.has_errors);
    assert_eq!(second.tree.get("username").unwrap().errors(), None);
    assert_eq!(
        serde_json::to_value(&second.tree).unwrap()["username"]["errors"],
        serde_json::Value::Null
    );
}

#[test]
fn radio_moves_the_selection() {
    let tree = edit(&fixture(), RawEvent::radio("feet", "both"));
    let feet = tree.get("feet").unwrap();
    assert_eq!(feet.value(), &FieldValue::from(vec!["both"]));
    assert!(!feet.option("right").unwrap().checked());
    assert!(feet.option("both").unwrap().checked());
    assert!(feet.is_dirty());
}

#[test]
fn group_checkbox_adds_to_the_selection() {
    let tree = edit(&fixture(), RawEvent::checkbox("transport", "feet", true));
    let transport = tree.get("transport").unwrap();
    assert_eq!(
        transport.value(),
        &FieldValue::from(vec!["feet", "car", "turbodesk"])
    );
    assert!(transport.is_dirty());
}

#[test]
fn single_select_keeps_option_attributes() {
    let tree = edit(
        &fixture(),
        RawEvent::select(
            "color",
            vec![
                SelectOption::new("red", false),
                SelectOption::new("green", true),
                SelectOption::new("blue", false),
            ],
        ),
    );
    let color = tree.get("color").unwrap();
    assert_eq!(color.value(), &FieldValue::from(vec!["green"]));
    assert!(color.option("green").unwrap().checked());
    assert_eq!(color.option("blue").unwrap().attr("disabled"), Some(&json!(true)));
}

#[test]
fn text_edit_back_to_initial_is_clean() {
    let tree = edit(&fixture(), RawEvent::text("username", "mark"));
    assert!(tree.get("username").unwrap().is_dirty());
    let tree = edit(&tree, RawEvent::text("username", "john"));
    assert!(!tree.get("username").unwrap().is_dirty());
}

#[test]
fn hook_toggles_attributes_without_touching_values() {
    let hooks = Hooks::new().on_change(|tree, _| {
        let disabled = tree.get("username")?.attr("disabled")?.as_bool()?;
        Some(Changes::from([
            (
                "username".to_string(),
                FieldPatch::default().attr("disabled", json!(!disabled)),
            ),
            (
                "password".to_string(),
                FieldPatch::default().attr("disabled", json!(disabled)),
            ),
        ]))
    });

    let outcome = handle_event(&fixture(), &RawEvent::text("feet", "left"), &hooks);
    let username = outcome.tree.get("username").unwrap();
    let password = outcome.tree.get("password").unwrap();
    assert_eq!(username.attr("disabled"), Some(&json!(false)));
    assert_eq!(password.attr("disabled"), Some(&json!(true)));
    assert_eq!(username.value(), &FieldValue::from("john"));
    assert!(!password.is_dirty());
}

#[test]
fn field_and_form_errors_are_both_reported() {
    let hooks = Hooks::new().validate(|tree| {
        let mut errors = ValidationErrors::new();
        if tree.get("username").and_then(|f| f.value().as_text()) == Some("john") {
            errors.insert("username".to_string(), "This field is required".into());
        }
        errors.insert("nonFieldErrors".to_string(), vec!["No", "way"].into());
        errors
    });

    let outcome = handle_event(&fixture(), &RawEvent::text("password", "x"), &hooks);
    let json = serde_json::to_value(&outcome.tree).unwrap();
    assert!(outcome.has_errors);
    assert_eq!(json["username"]["errors"], json!(["This field is required"]));
    assert_eq!(json["nonFieldErrors"]["errors"], json!(["No", "way"]));
}
