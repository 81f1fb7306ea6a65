use crate::state::types::TimeZone;
use crate::ui::mvi::UiState;
use crate::zones;

/// One row in the zone-picker list: a region heading or a selectable zone.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerRow {
    Region(&'static str),
    Zone(TimeZone),
}

/// State of the zone-picker popup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Visible {
        rows: Vec<PickerRow>,
        /// Index into `rows`; always points at a `Zone` row.
        cursor: usize,
    },
}

impl UiState for PickerState {}

impl PickerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Flattened catalog rows with the cursor on `selected_id` when present,
    /// otherwise on the first zone row.
    pub fn rows_for_catalog(selected_id: &str) -> (Vec<PickerRow>, usize) {
        let mut rows = Vec::new();
        let mut cursor = None;
        for group in zones::catalog() {
            rows.push(PickerRow::Region(group.region));
            for z in &group.zones {
                if z.id == selected_id {
                    cursor = Some(rows.len());
                }
                rows.push(PickerRow::Zone(z.clone()));
            }
        }
        // Row 0 is always a region heading, row 1 its first zone.
        (rows, cursor.unwrap_or(1))
    }

    pub fn cursor_zone(&self) -> Option<&TimeZone> {
        match self {
            Self::Visible { rows, cursor } => match rows.get(*cursor) {
                Some(PickerRow::Zone(zone)) => Some(zone),
                _ => None,
            },
            Self::Hidden => None,
        }
    }
}
