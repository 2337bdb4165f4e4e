//! The tag ledger: who is currently combat-tagged and when each tag expires.
//!
//! State machine per player: Free, struck by another player, Tagged; the
//! cooldown elapses with no further strike and the player is Free again. A
//! strike while already tagged cancels the pending expiry and restarts the
//! cooldown in full. Movement never changes tag state; a vetoed move is a
//! rejection, not a transition.

mod queue;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::PlayerId;
use queue::ExpiryQueue;

/// Simulation tick counter, as delivered by the host.
pub type Tick = u64;

/// Host simulation rate.
pub const TICKS_PER_SECOND: Tick = 20;

/// How long a tag lasts: 20 seconds of simulation time.
pub const TAG_COOLDOWN_TICKS: Tick = 20 * TICKS_PER_SECOND;

/// Returned by [`TagLedger::tag`]; describes the tag that was just applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagReceipt {
    pub player: PlayerId,
    pub tagged_at: Tick,
    pub expires_at: Tick,
    /// True when the strike replaced a live tag instead of creating one.
    pub renewed: bool,
}

/// Emitted by [`TagLedger::advance`], once per tag that runs to term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagExpiry {
    pub player: PlayerId,
    pub expired_at: Tick,
}

/// Live tag state for one player.
#[derive(Debug, Clone, Copy)]
struct TagRecord {
    receipt: TagReceipt,
    /// Handle of the pending expiry entry, used to cancel on re-tag.
    timer_id: u64,
}

#[derive(Debug, Default)]
struct LedgerState {
    records: HashMap<PlayerId, TagRecord>,
    queue: ExpiryQueue,
}

/// Process-wide map from player identity to tag state.
///
/// The single source of truth for whether a player is restricted. The
/// (records, queue) pair lives behind one mutex: the cancel-then-reschedule
/// in [`tag`](Self::tag) and the stale check in [`advance`](Self::advance)
/// are atomic with respect to each other, which still holds if the host
/// stops serializing its event delivery.
#[derive(Debug, Default)]
pub struct TagLedger {
    state: Mutex<LedgerState>,
}

impl TagLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags `player` at `now`, restarting the cooldown if already tagged.
    ///
    /// Any pending expiry for the player is cancelled before the new one is
    /// scheduled, so at most one live timer exists per tagged player and a
    /// re-tag always grants the full cooldown.
    pub fn tag(&self, player: PlayerId, now: Tick) -> TagReceipt {
        let mut state = self.state.lock().expect("tag ledger lock poisoned");

        let previous = state.records.get(&player).map(|record| record.timer_id);
        if let Some(timer_id) = previous {
            state.queue.cancel(timer_id);
        }

        let expires_at = now + TAG_COOLDOWN_TICKS;
        let timer_id = state.queue.schedule(player, expires_at);
        let receipt =
            TagReceipt { player, tagged_at: now, expires_at, renewed: previous.is_some() };
        state.records.insert(player, TagRecord { receipt, timer_id });

        receipt
    }

    /// True iff a tag record currently exists for `player`.
    pub fn is_tagged(&self, player: PlayerId) -> bool {
        let state = self.state.lock().expect("tag ledger lock poisoned");
        state.records.contains_key(&player)
    }

    /// The live tag for `player`, if any.
    pub fn receipt(&self, player: PlayerId) -> Option<TagReceipt> {
        let state = self.state.lock().expect("tag ledger lock poisoned");
        state.records.get(&player).map(|record| record.receipt)
    }

    /// Fires every expiry due at or before `now`.
    ///
    /// Each fired entry clears its record and yields one [`TagExpiry`]. An
    /// entry whose timer id no longer matches the live record was superseded
    /// by a later tag and is discarded without firing.
    pub fn advance(&self, now: Tick) -> Vec<TagExpiry> {
        let mut state = self.state.lock().expect("tag ledger lock poisoned");

        let due = state.queue.drain_due(now);
        let mut expiries = Vec::new();
        for entry in due {
            let fired = match state.records.get(&entry.player) {
                Some(record) if record.timer_id == entry.timer_id => {
                    Some(record.receipt.expires_at)
                }
                _ => None,
            };
            if let Some(expired_at) = fired {
                state.records.remove(&entry.player);
                expiries.push(TagExpiry { player: entry.player, expired_at });
            }
        }
        expiries
    }

    /// Drops `player`'s tag and cancels its pending expiry, with no
    /// notification. Disconnect cleanup. Returns whether a tag existed.
    pub fn forget(&self, player: PlayerId) -> bool {
        let mut state = self.state.lock().expect("tag ledger lock poisoned");
        match state.records.remove(&player) {
            Some(record) => {
                state.queue.cancel(record.timer_id);
                true
            }
            None => false,
        }
    }

    /// Number of currently tagged players.
    pub fn tagged_count(&self) -> usize {
        let state = self.state.lock().expect("tag ledger lock poisoned");
        state.records.len()
    }

    /// Number of scheduled expiry entries. Cancellation is eager, so this
    /// always equals [`tagged_count`](Self::tagged_count): one live timer
    /// per tagged player, never more.
    pub fn pending_timers(&self) -> usize {
        let state = self.state.lock().expect("tag ledger lock poisoned");
        state.queue.len()
    }
}
