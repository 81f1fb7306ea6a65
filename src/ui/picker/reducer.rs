use crate::ui::mvi::Reducer;
use crate::ui::picker::intent::PickerIntent;
use crate::ui::picker::state::{PickerRow, PickerState};

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::Open { selected_id } => {
                let (rows, cursor) = PickerState::rows_for_catalog(&selected_id);
                PickerState::Visible { rows, cursor }
            }
            PickerIntent::Close => PickerState::Hidden,
            PickerIntent::MoveUp => step(state, -1),
            PickerIntent::MoveDown => step(state, 1),
        }
    }
}

fn step(state: PickerState, direction: isize) -> PickerState {
    match state {
        PickerState::Visible { rows, cursor } => {
            let cursor = next_zone_row(&rows, cursor, direction);
            PickerState::Visible { rows, cursor }
        }
        other => other,
    }
}

/// Next `Zone` row in `direction`, skipping region headings and wrapping at
/// either end.
fn next_zone_row(rows: &[PickerRow], from: usize, direction: isize) -> usize {
    let len = rows.len();
    if len == 0 {
        return from;
    }
    let mut index = from;
    for _ in 0..len {
        index = if direction < 0 {
            if index == 0 {
                len - 1
            } else {
                index - 1
            }
        } else if index + 1 >= len {
            0
        } else {
            index + 1
        };
        if matches!(rows[index], PickerRow::Zone(_)) {
            return index;
        }
    }
    from
}
