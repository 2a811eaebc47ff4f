//! Formstate: a pure functional form-state engine
//!
//! Formstate follows the "pure core, imperative shell" philosophy. The core
//! turns raw form schemas into canonical field trees and derives checked
//! flags, group values, dirty flags and errors with pure functions that
//! always return a new tree. The store is a thin shell that keeps the
//! current tree of each mounted form.
//!
//! # Core Concepts
//!
//! - **Normalization**: any schema shape becomes a canonical `Field`
//! - **Mutation**: partial updates merged and re-derived by `apply_change`
//! - **Cycles**: event → edit → on-change hook → validation
//! - **Persistence**: trees share untouched fields; old trees stay valid
//!
//! # Example
//!
//! ```rust
//! use formstate::config::FormConfig;
//! use formstate::core::FieldValue;
//! use formstate::cycle::{handle_event, Hooks, RawEvent, SelectOption};
//! use formstate::normalize::normalize_json;
//! use serde_json::json;
//!
//! let tree = normalize_json(
//!     json!({
//!         "username": "john",
//!         "pets": {"fields": ["cat", "dog", "fish"], "value": ["cat"]},
//!     }),
//!     &FormConfig::default(),
//! )
//! .unwrap();
//!
//! let event = RawEvent::select_multiple(
//!     "pets",
//!     vec![
//!         SelectOption::new("cat", false),
//!         SelectOption::new("dog", true),
//!         SelectOption::new("fish", true),
//!     ],
//! );
//! let outcome = handle_event(&tree, &event, &Hooks::new());
//!
//! let pets = outcome.tree.get("pets").unwrap();
//! assert_eq!(pets.value(), &FieldValue::from(vec!["dog", "fish"]));
//! assert!(pets.is_dirty());
//! assert!(!pets.option("cat").unwrap().checked());
//! ```

pub mod config;
pub mod core;
pub mod cycle;
pub mod error;
pub mod mutate;
pub mod normalize;
pub mod store;

// Re-export commonly used types
pub use crate::config::FormConfig;
pub use crate::core::{Changes, Field, FieldPatch, FieldTree, FieldValue};
pub use crate::cycle::{CycleOutcome, Hooks, RawEvent};
pub use crate::error::FormError;
pub use crate::store::{FormOptions, FormStore};
