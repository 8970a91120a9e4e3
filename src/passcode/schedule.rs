//! Deferred work queued by the engine and fired from `tick`.

use std::time::Instant;

/// Work to run once its deadline passes.
///
/// Each task carries the state it expects to find so it can re-check before
/// acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Replace the digit in `index` with the mask glyph, if it still shows
    /// `expected`.
    MaskSlot { index: usize, expected: char },
    /// End the shake: reopen input and clear everything.
    FinishShake,
}

#[derive(Debug)]
struct Scheduled {
    due: Instant,
    seq: u64,
    task: DeferredTask,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, task: DeferredTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due, seq, task });
    }

    /// Remove and return every task due at or before `now`, earliest first.
    /// Tasks with equal deadlines come out in the order they were scheduled.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredTask> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|entry| entry.due <= now);
        self.pending = rest;
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|entry| entry.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
