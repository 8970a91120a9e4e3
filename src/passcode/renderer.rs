//! Presentation seam for the passcode engine.

use std::time::Instant;

use crate::passcode::shake::ShakeParams;
use crate::passcode::slot::SlotDisplay;

/// Draws the slots on behalf of [`PasscodeInput`](crate::passcode::PasscodeInput).
///
/// The engine never draws; it keeps its own slot projection and mirrors each
/// change through these calls. Indices are always below the number of slots
/// added so far.
pub trait SlotRenderer {
    /// Append an empty slot at the tail.
    fn add_slot(&mut self);

    /// Drop the slot at the tail.
    fn remove_slot(&mut self);

    fn show_slot(&mut self, index: usize, display: SlotDisplay);

    fn clear_slot(&mut self, index: usize) {
        self.show_slot(index, SlotDisplay::Empty);
    }

    /// Start the horizontal shake. The engine schedules the completion itself.
    fn run_shake_effect(&mut self, params: &ShakeParams, started_at: Instant);
}
