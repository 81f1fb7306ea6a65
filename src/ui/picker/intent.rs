use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerIntent {
    /// Open the picker with the cursor on the currently selected zone.
    Open { selected_id: String },
    Close,
    MoveUp,
    MoveDown,
}

impl Intent for PickerIntent {}
