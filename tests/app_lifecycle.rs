//! Tests for focus handling, the Done control and deferred updates in the App.

mod common;

use common::*;
use crossterm::event::KeyCode;
use passcode_tui::passcode::SlotDisplay;
use passcode_tui::ui::focus::FocusState;
use passcode_tui::ui::input::handle_key;
use std::time::Duration;

// Default config on 80x24: slots at x 32..47, y 10..12; Done at x 36..44, y 13.

#[test]
fn click_on_slots_focuses_widget() {
    let (mut app, _clock) = make_app();
    assert_eq!(app.focus(), FocusState::Idle);

    app.on_mouse(left_click(40, 10));

    assert!(app.is_editing());
}

#[test]
fn click_elsewhere_keeps_focus_unchanged() {
    let (mut app, _clock) = make_app();
    app.on_mouse(left_click(2, 2));
    assert!(!app.is_editing());

    app.on_mouse(left_click(40, 10));
    app.on_mouse(left_click(70, 20));
    assert!(app.is_editing());
}

#[test]
fn done_control_dismisses_focus_and_keeps_text() {
    let (mut app, _clock) = make_app();
    app.on_mouse(left_click(40, 10));
    handle_key(&mut app, press_key(KeyCode::Char('3')));

    app.on_mouse(left_click(38, 13));

    assert!(!app.is_editing());
    assert_eq!(app.passcode().text(), "3");
}

#[test]
fn done_is_inert_while_idle() {
    let (mut app, _clock) = make_app();
    app.on_mouse(left_click(38, 13));
    assert!(!app.is_editing());
}

#[test]
fn tick_masks_typed_digits() {
    let (mut app, clock) = make_app();
    handle_key(&mut app, press_key(KeyCode::Enter));
    handle_key(&mut app, press_key(KeyCode::Char('7')));
    assert_eq!(app.passcode().slots()[0], SlotDisplay::Digit('7'));
    assert!(app.next_deadline().is_some());

    clock.advance(Duration::from_millis(200));
    assert!(app.on_tick());

    assert_eq!(app.passcode().slots()[0], SlotDisplay::Masked);
    assert!(app.next_deadline().is_none());
}

#[test]
fn shake_blocks_keys_until_reset() {
    let (mut app, clock) = make_app();
    handle_key(&mut app, press_key(KeyCode::Enter));
    handle_key(&mut app, press_key(KeyCode::Char('1')));
    handle_key(&mut app, ctrl_key('r'));

    handle_key(&mut app, press_key(KeyCode::Char('2')));
    handle_key(&mut app, press_key(KeyCode::Backspace));
    assert_eq!(app.passcode().text(), "1");

    clock.advance(Duration::from_millis(800));
    app.on_tick();

    assert!(!app.passcode().is_animating());
    assert!(app.passcode().is_empty());
    handle_key(&mut app, press_key(KeyCode::Char('2')));
    assert_eq!(app.passcode().text(), "2");
}

#[test]
fn report_counts_only_accepted_keys() {
    let (mut app, _clock) = make_app();
    handle_key(&mut app, press_key(KeyCode::Enter));
    for _ in 0..6 {
        handle_key(&mut app, press_key(KeyCode::Char('1')));
    }
    handle_key(&mut app, press_key(KeyCode::Backspace));

    assert_eq!(app.passcode().text(), "111");
    assert_eq!(app.report().presses(), 5);
}

#[test]
fn clicks_before_first_resize_are_ignored() {
    let mut app = passcode_tui::ui::app::App::new(&passcode_tui::config::Config::default());
    app.on_mouse(left_click(40, 10));
    assert!(!app.is_editing());
}
