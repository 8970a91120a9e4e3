use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Keystrokes are not routed to the widget.
    #[default]
    Idle,
    /// The widget receives keystrokes and shows the Done control.
    Editing,
}

impl UiState for FocusState {}

impl FocusState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }
}
