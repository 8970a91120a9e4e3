use super::intent::Intent;
use super::state::UiState;

/// The only place a [`UiState`] changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be free of side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
