use ratatui::layout::Rect;

use crate::ui::slot_row::SLOT_HEIGHT;

/// Label of the control that dismisses input focus.
pub const DONE_LABEL: &str = "[ Done ]";

/// Header, body and footer bands of the screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Where the passcode widget sits inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetRegions {
    /// Full-width band the slot row is drawn into; the shake moves the row
    /// inside it.
    pub band: Rect,
    /// The slots at rest; clicks here focus the widget.
    pub slots: Rect,
    /// The Done control, two rows under the slots.
    pub done: Rect,
}

pub fn widget_regions(body: Rect, row_width: u16) -> WidgetRegions {
    let block_height = SLOT_HEIGHT + 2;
    let top = body.y + body.height.saturating_sub(block_height) / 2;
    let band = clip(
        Rect {
            x: body.x,
            y: top,
            width: body.width,
            height: SLOT_HEIGHT,
        },
        body,
    );
    let slots = centered_rect_by_size(band, row_width, SLOT_HEIGHT);
    let done_width = DONE_LABEL.chars().count() as u16;
    let done = centered_rect_by_size(
        clip(
            Rect {
                x: body.x,
                y: top + SLOT_HEIGHT + 1,
                width: body.width,
                height: 1,
            },
            body,
        ),
        done_width,
        1,
    );
    WidgetRegions { band, slots, done }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    let bottom = bounds.y + bounds.height;
    if rect.y >= bottom {
        return Rect {
            x: rect.x,
            y: bottom,
            width: rect.width,
            height: 0,
        };
    }
    Rect {
        height: rect.height.min(bottom - rect.y),
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
        assert_eq!(body, Rect::new(0, 3, 80, 18));
    }

    #[test]
    fn widget_is_centered_with_done_below() {
        let body = Rect::new(0, 3, 80, 18);
        let regions = widget_regions(body, 15);
        assert_eq!(regions.band, Rect::new(0, 10, 80, 2));
        assert_eq!(regions.slots, Rect::new(32, 10, 15, 2));
        assert_eq!(regions.done, Rect::new(36, 13, 8, 1));
        assert!(regions.slots.contains(Position::new(40, 11)));
        assert!(!regions.done.contains(Position::new(40, 11)));
    }

    #[test]
    fn tiny_body_collapses_done() {
        let body = Rect::new(0, 3, 20, 2);
        let regions = widget_regions(body, 7);
        assert_eq!(regions.band.height, 2);
        assert_eq!(regions.done.height, 0);
    }
}
