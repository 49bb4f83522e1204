//! Single-threaded timer service on a virtual millisecond clock
//!
//! Both the frame tick and the enemy generator are one-shot timers that
//! re-arm themselves. Firing order is due time first, then scheduling order,
//! so two timers due at the same instant fire in the order they were armed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TimerEvent {
    /// Update and render every registered element
    Frame,
    /// Let the enemy generator create its next batch
    SpawnWave,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    due_ms: u64,
    seq: u64,
    event: TimerEvent,
}

/// Pending one-shot timers plus the current virtual time
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Pending>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time (ms since the queue was created)
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Arm `event` to fire `delay_ms` from now
    pub fn schedule_once(&mut self, delay_ms: u64, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(Pending {
            due_ms: self.now_ms + delay_ms,
            seq,
            event,
        }));
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to its due time
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerEvent> {
        let due = self.pending.peek()?.0.due_ms;
        if due > until_ms {
            return None;
        }
        let Reverse(next) = self.pending.pop()?;
        self.now_ms = self.now_ms.max(next.due_ms);
        Some(next.event)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }

    /// How many timers of the given kind are armed
    pub fn pending(&self, event: TimerEvent) -> usize {
        self.pending.iter().filter(|p| p.0.event == event).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
