use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// Click on the slots, or Enter/Tab while idle.
    Activate,
    /// The Done control, Enter or Esc while editing.
    Dismiss,
    Toggle,
}

impl Intent for FocusIntent {}
