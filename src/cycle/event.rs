//! Raw UI events and the event adapter.

use crate::core::{Changes, FieldPatch, FieldValue, FileRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of input element that produced an event.
///
/// Parsed from DOM `type` strings; every kind the adapter does not treat
/// specially is a plain input carrying its type name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputKind {
    Checkbox,
    Radio,
    Select,
    SelectMultiple,
    File,
    Input(String),
}

impl InputKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::SelectMultiple => "select-multiple",
            Self::File => "file",
            Self::Input(kind) => kind,
        }
    }
}

impl Default for InputKind {
    fn default() -> Self {
        Self::Input("text".to_string())
    }
}

impl From<&str> for InputKind {
    fn from(kind: &str) -> Self {
        match kind {
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "select" | "select-one" => Self::Select,
            "select-multiple" => Self::SelectMultiple,
            "file" => Self::File,
            other => Self::Input(other.to_string()),
        }
    }
}

impl From<String> for InputKind {
    fn from(kind: String) -> Self {
        Self::from(kind.as_str())
    }
}

impl From<InputKind> for String {
    fn from(kind: InputKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<option>` of a select element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            selected,
        }
    }
}

/// Input event as reported by the rendering layer.
///
/// Mirrors the DOM target of a change event: `name`, `type`, `value`,
/// `checked`, the select `options` and the picked `files`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: InputKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub files: Vec<FileRef>,
}

impl RawEvent {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox,
            value: value.into(),
            checked,
            ..Self::default()
        }
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Radio,
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn select(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Select,
            options,
            ..Self::default()
        }
    }

    pub fn select_multiple(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::SelectMultiple,
            options,
            ..Self::default()
        }
    }

    pub fn file(name: impl Into<String>, files: Vec<FileRef>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::File,
            files,
            ..Self::default()
        }
    }

    /// Values of the selected options, in document order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.clone())
            .collect()
    }
}

/// Focus transition of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusKind {
    Focus,
    Blur,
}

impl FocusKind {
    pub fn is_focused(self) -> bool {
        matches!(self, Self::Focus)
    }
}

impl From<&str> for FocusKind {
    /// `"focus"` focuses; any other event type blurs.
    fn from(event_type: &str) -> Self {
        if event_type == "focus" {
            Self::Focus
        } else {
            Self::Blur
        }
    }
}

/// Translate a raw input event into a single-field change.
///
/// Checkboxes valued `"true"`/`"false"` drive a boolean field; any other
/// checkbox toggles the option named by its value. Single selects keep only
/// the first selected option.
pub fn event_to_change(event: &RawEvent) -> Changes {
    let patch = match &event.kind {
        InputKind::Checkbox if matches!(event.value.as_str(), "true" | "false") => {
            FieldPatch::value(event.checked)
        }
        InputKind::Checkbox => FieldPatch::option(event.value.clone(), event.checked),
        InputKind::Radio => FieldPatch::value(vec![event.value.clone()]),
        InputKind::Select => {
            FieldPatch::value(event.selected_values().into_iter().take(1).collect::<Vec<_>>())
        }
        InputKind::SelectMultiple => FieldPatch::value(event.selected_values()),
        InputKind::File => FieldPatch::value(FieldValue::Files(event.files.clone())),
        InputKind::Input(_) => FieldPatch::value(event.value.clone()),
    };
    Changes::from([(event.name.clone(), patch)])
}
