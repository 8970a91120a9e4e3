//! The passcode state engine.

use std::time::{Duration, Instant};

use crate::passcode::clock::{Clock, SystemClock};
use crate::passcode::keyboard::KeyboardKind;
use crate::passcode::observer::PasscodeObserver;
use crate::passcode::renderer::SlotRenderer;
use crate::passcode::schedule::{DeferredTask, Scheduler};
use crate::passcode::shake::ShakeParams;
use crate::passcode::slot::SlotDisplay;

/// How long a freshly typed digit stays readable before it is masked.
pub const DEFAULT_MASK_DELAY: Duration = Duration::from_millis(200);

/// Tracks the entered digits of a passcode field and keeps a [`SlotRenderer`]
/// in sync with them.
///
/// Invalid operations (typing into a full field, deleting from an empty one,
/// any keystroke while the shake runs) are ignored without notifying anyone.
/// Deferred work only happens when the host calls [`tick`](Self::tick).
pub struct PasscodeInput<R: SlotRenderer> {
    renderer: R,
    clock: Box<dyn Clock>,
    observer: Option<Box<dyn PasscodeObserver>>,
    scheduler: Scheduler,
    entered: String,
    slots: Vec<SlotDisplay>,
    secure: bool,
    mask_delay: Duration,
    keyboard: KeyboardKind,
    animating: bool,
}

impl<R: SlotRenderer> PasscodeInput<R> {
    /// Creates a field with no slots, secure entry on and the number pad
    /// keyboard.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            clock: Box::new(SystemClock),
            observer: None,
            scheduler: Scheduler::new(),
            entered: String::new(),
            slots: Vec::new(),
            secure: true,
            mask_delay: DEFAULT_MASK_DELAY,
            keyboard: KeyboardKind::default(),
            animating: false,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_observer(mut self, observer: impl PasscodeObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl PasscodeObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The entered passcode, unmasked.
    pub fn text(&self) -> &str {
        &self.entered
    }

    pub fn len(&self) -> usize {
        self.entered.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entered.is_empty()
    }

    /// True once every slot holds a digit. A zero-length field is never
    /// complete.
    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.len() == self.slots.len()
    }

    pub fn digit_length(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[SlotDisplay] {
        &self.slots
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Only affects digits typed from now on.
    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    pub fn mask_delay(&self) -> Duration {
        self.mask_delay
    }

    pub fn set_mask_delay(&mut self, delay: Duration) {
        self.mask_delay = delay;
    }

    pub fn keyboard_kind(&self) -> KeyboardKind {
        self.keyboard
    }

    /// Switching keyboards discards whatever was entered.
    pub fn set_keyboard_kind(&mut self, kind: KeyboardKind) {
        if kind == self.keyboard {
            return;
        }
        self.keyboard = kind;
        self.set_text("");
        tracing::debug!(keyboard = %kind, "keyboard kind changed");
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Earliest moment a pending deferred task becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Resizes the field to `length` slots, clearing the entered text first.
    pub fn set_digit_length(&mut self, length: usize) {
        let old = self.slots.len();
        if length == old {
            return;
        }

        self.set_text("");
        if length > old {
            for _ in old..length {
                self.slots.push(SlotDisplay::Empty);
                self.renderer.add_slot();
            }
        } else {
            for _ in length..old {
                self.slots.pop();
                self.renderer.remove_slot();
            }
        }
        tracing::debug!(from = old, to = length, "digit length changed");
    }

    pub fn insert(&mut self, ch: char) {
        if self.animating {
            tracing::trace!("insert ignored while shaking");
            return;
        }
        let index = self.len();
        if index >= self.slots.len() {
            tracing::trace!(capacity = self.slots.len(), "insert ignored, field full");
            return;
        }

        self.entered.push(ch);
        self.set_slot(index, SlotDisplay::Digit(ch));
        if self.secure {
            let due = self.clock.now() + self.mask_delay;
            self.scheduler
                .schedule(due, DeferredTask::MaskSlot { index, expected: ch });
        }
        self.notify();
    }

    pub fn delete(&mut self) {
        if self.animating {
            tracing::trace!("delete ignored while shaking");
            return;
        }
        let Some(index) = self.len().checked_sub(1) else {
            tracing::trace!("delete ignored, field empty");
            return;
        };

        self.set_slot(index, SlotDisplay::Empty);
        self.entered.pop();
        self.notify();
    }

    /// Replaces the entered text without notifying the observer.
    ///
    /// Surrounding whitespace is trimmed and anything past the digit length
    /// is dropped. Every accepted character is masked at once.
    pub fn set_text(&mut self, text: &str) {
        let mut chars = text.trim().chars();
        self.entered.clear();
        for index in 0..self.slots.len() {
            match chars.next() {
                Some(ch) => {
                    self.entered.push(ch);
                    self.set_slot(index, SlotDisplay::Masked);
                }
                None => self.set_slot(index, SlotDisplay::Empty),
            }
        }
    }

    /// Shakes the row, then clears it once the motion has settled.
    ///
    /// Input is rejected until the reset fires. Calling this again while a
    /// shake is running does nothing.
    pub fn shake_and_reset(&mut self, params: ShakeParams) {
        if self.animating {
            tracing::trace!("shake ignored, already shaking");
            return;
        }
        self.animating = true;
        let now = self.clock.now();
        self.renderer.run_shake_effect(&params, now);
        self.scheduler
            .schedule(now + params.total_duration(), DeferredTask::FinishShake);
        tracing::debug!(
            count = params.count,
            total_ms = params.total_duration().as_millis() as u64,
            "shake started"
        );
    }

    /// Runs every deferred task that has come due. Returns whether any ran.
    pub fn tick(&mut self) -> bool {
        let due = self.scheduler.take_due(self.clock.now());
        let fired = !due.is_empty();
        for task in due {
            self.run_task(task);
        }
        fired
    }

    fn run_task(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::MaskSlot { index, expected } => {
                if self.slots.get(index) == Some(&SlotDisplay::Digit(expected)) {
                    self.set_slot(index, SlotDisplay::Masked);
                } else {
                    tracing::trace!(index, "stale mask skipped");
                }
            }
            DeferredTask::FinishShake => {
                self.animating = false;
                self.set_text("");
                tracing::debug!("shake finished, passcode cleared");
            }
        }
    }

    fn set_slot(&mut self, index: usize, display: SlotDisplay) {
        self.slots[index] = display;
        match display {
            SlotDisplay::Empty => self.renderer.clear_slot(index),
            _ => self.renderer.show_slot(index, display),
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_key_pressed(&self.entered);
        }
    }
}
