use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, widget_regions, DONE_LABEL};
use crate::ui::theme::ACCENT;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = app.palette();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );
    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        body,
    );

    let row = app.passcode().renderer();
    let regions = widget_regions(body, row.width());
    frame.render_widget(row.widget(app.slot_style(), Instant::now()), regions.band);

    if app.is_editing() && regions.done.height > 0 {
        let done = Paragraph::new(DONE_LABEL)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        frame.render_widget(done, regions.done);
    }

    frame.render_widget(Footer::new().widget(footer, palette, app.is_editing()), footer);
}
