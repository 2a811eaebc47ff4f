//! Store actions.

use crate::config::ActionTypes;

/// Kind of operation a store performed on a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    InitForm,
    DestroyForm,
    EditFields,
    ChangeFocus,
    AdditionalChanges,
    SetErrors,
    ResetForm,
}

impl Action {
    /// Configured type tag of this action.
    pub fn tag<'a>(&self, types: &'a ActionTypes) -> &'a str {
        match self {
            Self::InitForm => &types.init_form,
            Self::DestroyForm => &types.destroy_form,
            Self::EditFields => &types.edit_fields,
            Self::ChangeFocus => &types.change_focus,
            Self::AdditionalChanges => &types.additional_changes,
            Self::SetErrors => &types.set_errors,
            Self::ResetForm => &types.reset_form,
        }
    }
}
