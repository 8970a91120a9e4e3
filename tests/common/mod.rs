//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use passcode_tui::config::Config;
use passcode_tui::passcode::{ManualClock, PasscodeInput};
use passcode_tui::ui::app::App;
use passcode_tui::ui::slot_row::SlotRow;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// App on an 80x24 terminal whose passcode engine runs on a manual clock.
pub fn make_app() -> (App, ManualClock) {
    make_app_with(&Config::default())
}

pub fn make_app_with(config: &Config) -> (App, ManualClock) {
    let clock = ManualClock::new();
    let engine_clock = clock.clone();
    let mut app = App::new(config).map_passcode(|p| p.with_clock(engine_clock));
    app.on_resize(80, 24);
    (app, clock)
}

/// Engine on a manual clock with `digits` slots.
pub fn make_input(digits: usize) -> (PasscodeInput<SlotRow>, ManualClock) {
    let clock = ManualClock::new();
    let mut input = PasscodeInput::new(SlotRow::new()).with_clock(clock.clone());
    input.set_digit_length(digits);
    (input, clock)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
