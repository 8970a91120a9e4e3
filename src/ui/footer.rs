use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::Palette;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, palette: Palette, editing: bool) -> Paragraph<'static> {
        let hints = if editing {
            " Digits: Enter │ Backspace: Delete │ Enter/Esc: Done │ Ctrl+R: Shake │ Ctrl+K: Keyboard │ Ctrl+Q: Quit"
        } else {
            " Click/Enter: Edit │ Ctrl+R: Shake │ Ctrl+K: Keyboard │ q/Esc: Quit"
        };
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the separators are multi-byte.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(palette.text).add_modifier(Modifier::DIM);

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
                    .border_style(Style::default().fg(palette.chrome)),
            )
    }
}
