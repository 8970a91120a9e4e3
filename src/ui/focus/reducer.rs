use crate::ui::focus::intent::FocusIntent;
use crate::ui::focus::state::FocusState;
use crate::ui::mvi::Reducer;

pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = FocusState;
    type Intent = FocusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FocusIntent::Activate => FocusState::Editing,
            FocusIntent::Dismiss => FocusState::Idle,
            FocusIntent::Toggle => match state {
                FocusState::Idle => FocusState::Editing,
                FocusState::Editing => FocusState::Idle,
            },
        }
    }
}
