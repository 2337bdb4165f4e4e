//! One-shot expiry scheduling for the tag ledger.
//!
//! A pending expiry is a (fire tick, timer id, player) triple in a min-heap.
//! Scheduling is a heap push and never blocks the caller. Cancellation
//! removes the entry from the heap eagerly, so a cancelled timer cannot
//! fire, even when its tick has already been reached.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::Tick;
use crate::models::PlayerId;

/// A scheduled un-tag, waiting for its fire tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ExpiryEntry {
    /// Tick at which this entry fires.
    pub fire_tick: Tick,
    /// Cancellation handle, unique per schedule call.
    pub timer_id: u64,
    /// Player whose tag this entry clears.
    pub player: PlayerId,
}

// Heap order: earliest tick first, then timer id as a deterministic tiebreak
// within a tick.
impl Ord for ExpiryEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.fire_tick.cmp(&other.fire_tick) {
            std::cmp::Ordering::Equal => self.timer_id.cmp(&other.timer_id),
            ord => ord,
        }
    }
}

impl PartialOrd for ExpiryEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(super) struct ExpiryQueue {
    pending: BinaryHeap<Reverse<ExpiryEntry>>,
    next_timer_id: u64,
}

impl ExpiryQueue {
    /// Schedules an un-tag for `player` at `fire_tick`, returning the
    /// cancellation handle.
    pub fn schedule(&mut self, player: PlayerId, fire_tick: Tick) -> u64 {
        let timer_id = self.next_timer_id;
        self.next_timer_id += 1;
        self.pending.push(Reverse(ExpiryEntry { fire_tick, timer_id, player }));
        timer_id
    }

    /// Removes the entry with `timer_id` from the heap, returning it if it
    /// was still pending.
    pub fn cancel(&mut self, timer_id: u64) -> Option<ExpiryEntry> {
        let mut cancelled = None;
        let mut remaining = BinaryHeap::with_capacity(self.pending.len());
        for Reverse(entry) in self.pending.drain() {
            if entry.timer_id == timer_id {
                cancelled = Some(entry);
            } else {
                remaining.push(Reverse(entry));
            }
        }
        self.pending = remaining;
        cancelled
    }

    /// Pops every entry due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Tick) -> Vec<ExpiryEntry> {
        let mut due = Vec::new();
        while let Some(&Reverse(entry)) = self.pending.peek() {
            if entry.fire_tick > now {
                break;
            }
            self.pending.pop();
            due.push(entry);
        }
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
