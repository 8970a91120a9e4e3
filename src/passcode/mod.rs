//! Toolkit-agnostic passcode entry engine.
//!
//! [`PasscodeInput`] owns the entered digits and drives a [`SlotRenderer`].
//! Timed behavior (digit masking, the end of the shake) is queued as
//! [`DeferredTask`]s and fired by [`PasscodeInput::tick`], so a host only has
//! to call `tick` from its event loop.

mod clock;
mod input;
mod keyboard;
mod observer;
mod renderer;
mod schedule;
mod shake;
mod slot;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{PasscodeInput, DEFAULT_MASK_DELAY};
pub use keyboard::KeyboardKind;
pub use observer::PasscodeObserver;
pub use renderer::SlotRenderer;
pub use schedule::{DeferredTask, Scheduler};
pub use shake::{
    ShakeParams, DEFAULT_SHAKE_COUNT, DEFAULT_SHAKE_DURATION, DEFAULT_SHAKE_TRANSLATION,
    SHAKE_SETTLE_DELAY,
};
pub use slot::SlotDisplay;
