use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

use crate::config::Config;
use crate::passcode::{KeyboardKind, PasscodeInput, PasscodeObserver, ShakeParams};
use crate::ui::focus::{FocusIntent, FocusReducer, FocusState};
use crate::ui::layout::{layout_regions, widget_regions, WidgetRegions};
use crate::ui::mvi::Reducer;
use crate::ui::slot_row::{SlotRow, SlotStyle};
use crate::ui::theme::{parse_color, Palette, ACCENT};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Observer shared between the passcode engine and the header.
///
/// Counts accepted keystrokes and logs the entry length; the digits
/// themselves never leave the engine.
#[derive(Debug, Clone, Default)]
pub struct KeyReport {
    presses: Rc<Cell<u64>>,
}

impl KeyReport {
    pub fn presses(&self) -> u64 {
        self.presses.get()
    }
}

impl PasscodeObserver for KeyReport {
    fn on_key_pressed(&mut self, text: &str) {
        self.presses.set(self.presses.get() + 1);
        tracing::info!(length = text.chars().count(), "passcode key pressed");
    }
}

pub struct App {
    should_quit: bool,
    focus: FocusState,
    size: Option<(u16, u16)>,
    passcode: PasscodeInput<SlotRow>,
    report: KeyReport,
    shake: ShakeParams,
    palette: Palette,
    mask_glyph: char,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let report = KeyReport::default();
        let mut passcode = PasscodeInput::new(SlotRow::new()).with_observer(report.clone());
        Self::configure_passcode(&mut passcode, config);

        let appearance = &config.appearance;
        let palette = Palette::for_appearance(appearance.keyboard_appearance).with_overrides(
            appearance.text_color.as_deref().and_then(|c| parse_color(c).ok()),
            appearance.border_color.as_deref().and_then(|c| parse_color(c).ok()),
        );

        Self {
            should_quit: false,
            focus: FocusState::default(),
            size: None,
            passcode,
            report,
            shake: config.shake.params(),
            palette,
            mask_glyph: appearance.mask_glyph,
        }
    }

    /// Rebuilds the engine through `map`, e.g. to give it a different clock.
    pub fn map_passcode(
        mut self,
        map: impl FnOnce(PasscodeInput<SlotRow>) -> PasscodeInput<SlotRow>,
    ) -> Self {
        self.passcode = map(self.passcode);
        self
    }

    fn configure_passcode(passcode: &mut PasscodeInput<SlotRow>, config: &Config) {
        passcode.set_keyboard_kind(config.passcode.keyboard);
        passcode.set_secure(config.passcode.secure);
        passcode.set_mask_delay(Duration::from_millis(config.passcode.mask_delay_ms));
        passcode.set_digit_length(config.passcode.digit_length);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.focus.is_editing()
    }

    pub fn dispatch_focus(&mut self, intent: FocusIntent) {
        let before = self.focus;
        dispatch_mvi!(self, focus, FocusReducer, intent);
        if before != self.focus {
            tracing::debug!(?intent, focus = ?self.focus, "focus changed");
        }
    }

    pub fn passcode(&self) -> &PasscodeInput<SlotRow> {
        &self.passcode
    }

    pub fn report(&self) -> &KeyReport {
        &self.report
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn slot_style(&self) -> SlotStyle {
        let border = if self.is_editing() {
            ACCENT
        } else {
            self.palette.border
        };
        SlotStyle {
            text: Style::default().fg(self.palette.text),
            border: Style::default().fg(border),
            mask_glyph: self.mask_glyph,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.passcode.next_deadline()
    }

    /// Fires due passcode tasks. Returns whether anything changed.
    pub fn on_tick(&mut self) -> bool {
        self.passcode.tick()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Layout of the widget for the last known terminal size.
    pub fn widget_regions(&self) -> Option<WidgetRegions> {
        let (cols, rows) = self.size?;
        let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
        Some(widget_regions(body, self.passcode.renderer().width()))
    }

    /// Keys routed to the widget while it has focus.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press || !self.is_editing() {
            return;
        }
        match key.code {
            KeyCode::Char(ch) if self.passcode.keyboard_kind().accepts(ch) => {
                self.passcode.insert(ch);
            }
            KeyCode::Backspace | KeyCode::Delete => self.passcode.delete(),
            KeyCode::Enter | KeyCode::Esc => self.dispatch_focus(FocusIntent::Dismiss),
            _ => {}
        }
    }

    /// A left click on the slots focuses the widget; on Done it dismisses it.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(regions) = self.widget_regions() else {
            return;
        };
        let position = Position::new(mouse.column, mouse.row);
        if self.is_editing() && regions.done.contains(position) {
            self.dispatch_focus(FocusIntent::Dismiss);
        } else if regions.slots.contains(position) {
            self.dispatch_focus(FocusIntent::Activate);
        }
    }

    pub fn shake(&mut self) {
        self.passcode.shake_and_reset(self.shake);
    }

    pub fn toggle_keyboard(&mut self) {
        let next = self.passcode.keyboard_kind().toggled();
        self.set_keyboard_kind(next);
    }

    pub fn set_keyboard_kind(&mut self, kind: KeyboardKind) {
        self.passcode.set_keyboard_kind(kind);
    }
}
