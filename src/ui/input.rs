use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::focus::FocusIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.shake();
        return;
    }
    if is_ctrl_char(key, 'k') {
        app.toggle_keyboard();
        return;
    }

    if app.is_editing() {
        if matches!(key.code, KeyCode::Tab) {
            app.dispatch_focus(FocusIntent::Toggle);
            return;
        }
        app.on_key(key);
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Tab => app.dispatch_focus(FocusIntent::Activate),
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::passcode::KeyboardKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn editing_app() -> App {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.is_editing());
        app
    }

    #[test]
    fn digits_are_ignored_until_focused() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert!(app.passcode().is_empty());
    }

    #[test]
    fn focused_widget_takes_digits_and_backspace() {
        let mut app = editing_app();
        handle_key(&mut app, press(KeyCode::Char('1')));
        handle_key(&mut app, press(KeyCode::Char('2')));
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.passcode().text(), "1");
        assert_eq!(app.report().presses(), 3);
    }

    #[test]
    fn number_pad_drops_letters() {
        let mut app = editing_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert!(app.passcode().is_empty());

        handle_key(&mut app, ctrl('k'));
        assert_eq!(app.passcode().keyboard_kind(), KeyboardKind::Ascii);
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.passcode().text(), "a");
    }

    #[test]
    fn enter_while_editing_acts_as_done() {
        let mut app = editing_app();
        handle_key(&mut app, press(KeyCode::Char('4')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.is_editing());
        assert_eq!(app.passcode().text(), "4");
        assert!(!app.should_quit());
    }

    #[test]
    fn esc_dismisses_then_quits() {
        let mut app = editing_app();
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.is_editing());
        assert!(!app.should_quit());
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn q_types_when_editing_ascii() {
        let mut app = editing_app();
        app.set_keyboard_kind(KeyboardKind::Ascii);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert_eq!(app.passcode().text(), "q");
        assert!(!app.should_quit());
    }

    #[test]
    fn ctrl_r_starts_shake() {
        let mut app = editing_app();
        handle_key(&mut app, press(KeyCode::Char('9')));
        handle_key(&mut app, ctrl('r'));
        assert!(app.passcode().is_animating());
        handle_key(&mut app, press(KeyCode::Char('8')));
        assert_eq!(app.passcode().text(), "9");
    }

    #[test]
    fn ctrl_q_quits_from_anywhere() {
        let mut app = editing_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }
}
