use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::types::ClockState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &ClockState) -> Paragraph<'static> {
        let zone = &state.selected_zone;
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(ACCENT);

        let saved_marker = if state.saved_zones.iter().any(|z| z.id == zone.id) {
            " *"
        } else {
            ""
        };

        let line = Line::from(vec![
            Span::styled("  World Clock", accent_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} ({}){}", zone.name, zone.abbr, saved_marker), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("UTC{}", zone.offset), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(state.display_mode.label(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
