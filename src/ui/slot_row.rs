//! Terminal rendering of the passcode slots.

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::passcode::{ShakeParams, SlotDisplay, SlotRenderer};

/// Columns taken by one slot, glyph centered.
pub const SLOT_WIDTH: u16 = 3;
/// Blank columns between neighboring slots.
pub const SLOT_GAP: u16 = 1;
/// Glyph row plus underline row.
pub const SLOT_HEIGHT: u16 = 2;
/// Shake translation units per terminal column.
pub const UNITS_PER_COLUMN: f32 = 10.0;

pub const DEFAULT_MASK_GLYPH: char = '*';

const UNDERLINE: &str = "───";

#[derive(Debug, Clone, Copy)]
struct RunningShake {
    params: ShakeParams,
    started_at: Instant,
}

/// [`SlotRenderer`] that keeps what each slot shows and how far the row is
/// currently displaced.
#[derive(Debug, Clone, Default)]
pub struct SlotRow {
    cells: Vec<SlotDisplay>,
    shake: Option<RunningShake>,
}

impl SlotRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[SlotDisplay] {
        &self.cells
    }

    /// Total columns needed to draw every slot at rest.
    pub fn width(&self) -> u16 {
        let count = self.cells.len() as u16;
        if count == 0 {
            return 0;
        }
        count * SLOT_WIDTH + (count - 1) * SLOT_GAP
    }

    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake.is_some_and(|shake| {
            now.saturating_duration_since(shake.started_at) < shake.params.motion_duration()
        })
    }

    /// Horizontal displacement at `now`, in whole columns.
    pub fn column_offset(&self, now: Instant) -> i16 {
        let Some(shake) = self.shake else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(shake.started_at);
        (shake.params.offset_at(elapsed) / UNITS_PER_COLUMN).round() as i16
    }

    pub fn widget(&self, style: SlotStyle, now: Instant) -> SlotRowWidget<'_> {
        SlotRowWidget {
            row: self,
            style,
            offset: self.column_offset(now),
        }
    }
}

impl SlotRenderer for SlotRow {
    fn add_slot(&mut self) {
        self.cells.push(SlotDisplay::Empty);
    }

    fn remove_slot(&mut self) {
        self.cells.pop();
    }

    fn show_slot(&mut self, index: usize, display: SlotDisplay) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = display;
        }
    }

    fn run_shake_effect(&mut self, params: &ShakeParams, started_at: Instant) {
        self.shake = Some(RunningShake {
            params: *params,
            started_at,
        });
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SlotStyle {
    pub text: Style,
    pub border: Style,
    pub mask_glyph: char,
}

impl Default for SlotStyle {
    fn default() -> Self {
        Self {
            text: Style::default(),
            border: Style::default(),
            mask_glyph: DEFAULT_MASK_GLYPH,
        }
    }
}

pub struct SlotRowWidget<'a> {
    row: &'a SlotRow,
    style: SlotStyle,
    offset: i16,
}

impl Widget for SlotRowWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.row.cells.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let width = self.row.width().min(area.width);
        let min_x = i32::from(area.x);
        let max_x = i32::from(area.x + area.width - width);
        let centered = min_x + i32::from((area.width - width) / 2);
        let x = (centered + i32::from(self.offset)).clamp(min_x, max_x) as u16;
        let y = area.y + area.height.saturating_sub(SLOT_HEIGHT) / 2;
        let right = area.x + area.width;
        let bottom = area.y + area.height;

        let mut glyph = [0u8; 4];
        for (index, cell) in self.row.cells.iter().enumerate() {
            let slot_x = x + index as u16 * (SLOT_WIDTH + SLOT_GAP);
            if slot_x + SLOT_WIDTH > right {
                break;
            }
            let symbol = match cell {
                SlotDisplay::Empty => None,
                SlotDisplay::Digit(ch) => Some(ch.encode_utf8(&mut glyph) as &str),
                SlotDisplay::Masked => Some(self.style.mask_glyph.encode_utf8(&mut glyph) as &str),
            };
            if let Some(symbol) = symbol {
                buf.set_string(slot_x + SLOT_WIDTH / 2, y, symbol, self.style.text);
            }
            if y + 1 < bottom {
                buf.set_string(slot_x, y + 1, UNDERLINE, self.style.border);
            }
        }
    }
}
