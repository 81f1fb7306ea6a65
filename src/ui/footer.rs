use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::View;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: View, area: Rect) -> Paragraph<'static> {
        let hints = match view {
            View::Clock => " Tab: Stopwatch │ Z: Zones │ M: Analog/Digital │ F: Save zone │ Q: Quit",
            View::Stopwatch => " Tab: Clock │ Space: Start/Stop │ L: Lap │ R: Reset │ Q: Quit",
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
