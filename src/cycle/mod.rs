//! Update cycles around the pure core.
//!
//! One cycle takes a raw UI event through the whole pipeline:
//!
//! 1. the event adapter turns it into a single-field change,
//! 2. the mutator applies the change and re-derives the field,
//! 3. the on-change hook may return further changes, applied the same way,
//! 4. the validate hook reports errors, spliced in without derivation.
//!
//! Every step returns a new tree; the tree a cycle started from is never
//! modified. Reset and the mount-time cycle reuse the same pipeline without
//! an event, while focus changes skip it entirely.

mod coordinator;
mod event;
mod hooks;

pub use coordinator::{
    apply_additional_changes, handle_event, handle_focus_change, perform_validation, reset,
    run_cycle, splice_errors, CycleOutcome,
};
pub use event::{event_to_change, FocusKind, InputKind, RawEvent, SelectOption};
pub use hooks::{ErrorEntry, Hooks, OnChange, Validate, ValidationErrors};
