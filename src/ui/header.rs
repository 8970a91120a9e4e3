use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::theme::{STATUS_ERROR, STATUS_OK};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let palette = app.palette();
        let passcode = app.passcode();
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);

        let (status, status_color) = if passcode.is_animating() {
            ("● Rejected", STATUS_ERROR)
        } else if app.is_editing() {
            ("● Editing", STATUS_OK)
        } else {
            ("○ Idle", palette.muted)
        };
        let secure = if passcode.is_secure() { "secure" } else { "visible" };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Passcode",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{}/{} entered", passcode.len(), passcode.digit_length()),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(passcode.keyboard_kind().to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(secure, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} keys", app.report().presses()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.chrome)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
