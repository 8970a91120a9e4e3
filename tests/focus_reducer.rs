use passcode_tui::ui::focus::{FocusIntent, FocusReducer, FocusState};
use passcode_tui::ui::mvi::Reducer;

#[test]
fn activate_starts_editing() {
    let state = FocusReducer::reduce(FocusState::Idle, FocusIntent::Activate);
    assert_eq!(state, FocusState::Editing);
}

#[test]
fn activate_while_editing_stays_editing() {
    let state = FocusReducer::reduce(FocusState::Editing, FocusIntent::Activate);
    assert_eq!(state, FocusState::Editing);
}

#[test]
fn dismiss_returns_to_idle() {
    let state = FocusReducer::reduce(FocusState::Editing, FocusIntent::Dismiss);
    assert_eq!(state, FocusState::Idle);
    assert!(!state.is_editing());
}

#[test]
fn dismiss_while_idle_is_noop() {
    let state = FocusReducer::reduce(FocusState::Idle, FocusIntent::Dismiss);
    assert_eq!(state, FocusState::Idle);
}
