//! Decision logic binding the region index and tag ledger to the host's
//! triggering events.
//!
//! Engine callbacks arrive through an adapter as plain method calls, and
//! every decision comes back as a value ([`MoveVerdict`], [`TagNotice`])
//! rather than an event fired into a bus. The listener itself holds nothing
//! but references to the two stateful components.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{Location, PlayerId};
use crate::region::RegionIndex;
use crate::tag::{TagLedger, Tick};

/// A player-on-player hit, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    pub attacker: PlayerId,
    pub victim: PlayerId,
    /// Host-reported connectivity at the moment of the hit. Tagging an
    /// offline victim is a silent no-op.
    pub victim_online: bool,
}

/// Player-facing notification produced by an enforcement decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagNotice {
    /// The player was just tagged (or re-tagged) and may not enter spawn
    /// until `expires_at`.
    Tagged { player: PlayerId, expires_at: Tick },
    /// A tagged player tried to enter a spawn region and was held back.
    StillTagged { player: PlayerId },
    /// The cooldown ran out; the player may enter spawn again.
    NoLongerTagged { player: PlayerId },
}

impl TagNotice {
    /// The player this notice is addressed to.
    pub fn player(&self) -> PlayerId {
        match *self {
            TagNotice::Tagged { player, .. }
            | TagNotice::StillTagged { player }
            | TagNotice::NoLongerTagged { player } => player,
        }
    }
}

/// Outcome of a movement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerdict {
    /// Movement proceeds.
    Allow,
    /// Movement must be cancelled; the player stays at the prior position.
    Veto(TagNotice),
}

impl MoveVerdict {
    pub fn is_veto(&self) -> bool {
        matches!(self, MoveVerdict::Veto(_))
    }
}

/// Reactive binding of [`RegionIndex`] and [`TagLedger`] to the attack,
/// movement, and tick triggers.
#[derive(Debug, Clone)]
pub struct EnforcementListener {
    regions: Arc<RegionIndex>,
    ledger: Arc<TagLedger>,
}

impl EnforcementListener {
    pub fn new(regions: Arc<RegionIndex>, ledger: Arc<TagLedger>) -> Self {
        Self { regions, ledger }
    }

    /// Player-vs-player hit: tag the victim.
    ///
    /// Offline victims and self-hits produce no tag, no timer, and no
    /// notice.
    pub fn on_attack(&self, attack: AttackEvent, now: Tick) -> Option<TagNotice> {
        if !attack.victim_online || attack.attacker == attack.victim {
            return None;
        }
        let receipt = self.ledger.tag(attack.victim, now);
        Some(TagNotice::Tagged { player: attack.victim, expires_at: receipt.expires_at })
    }

    /// Movement check for `mover` heading to `destination`. Vetoes iff the
    /// mover is tagged and the destination sits inside a region registered
    /// for the destination's world.
    pub fn on_move(&self, mover: PlayerId, destination: &Location) -> MoveVerdict {
        if self.ledger.is_tagged(mover) && self.regions.contains(&destination.world, destination.pos)
        {
            MoveVerdict::Veto(TagNotice::StillTagged { player: mover })
        } else {
            MoveVerdict::Allow
        }
    }

    /// Tick boundary: fire due expiries and report one notice per player
    /// whose tag just lifted. The ledger has already cleared the records;
    /// these are purely informational.
    pub fn on_tick(&self, now: Tick) -> Vec<TagNotice> {
        self.ledger
            .advance(now)
            .into_iter()
            .map(|expiry| TagNotice::NoLongerTagged { player: expiry.player })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockPos, WorldId};
    use crate::region::SpawnRegion;
    use crate::tag::TAG_COOLDOWN_TICKS;

    fn setup() -> (Arc<TagLedger>, EnforcementListener) {
        let regions = Arc::new(RegionIndex::new());
        regions
            .insert(SpawnRegion::new("world", WorldId::random(), BlockPos::new(0, 64, 0), 16))
            .unwrap();
        let ledger = Arc::new(TagLedger::new());
        let listener = EnforcementListener::new(regions, Arc::clone(&ledger));
        (ledger, listener)
    }

    fn attack(victim: PlayerId) -> AttackEvent {
        AttackEvent { attacker: PlayerId::random(), victim, victim_online: true }
    }

    #[test]
    fn test_attack_tags_victim() {
        let (ledger, listener) = setup();
        let victim = PlayerId::random();

        let notice = listener.on_attack(attack(victim), 50);
        assert_eq!(
            notice,
            Some(TagNotice::Tagged { player: victim, expires_at: 50 + TAG_COOLDOWN_TICKS })
        );
        assert!(ledger.is_tagged(victim));
    }

    #[test]
    fn test_offline_victim_is_not_tagged() {
        let (ledger, listener) = setup();
        let victim = PlayerId::random();
        let event = AttackEvent { attacker: PlayerId::random(), victim, victim_online: false };

        assert_eq!(listener.on_attack(event, 0), None);
        assert!(!ledger.is_tagged(victim));

        // No dangling timer either.
        assert!(listener.on_tick(TAG_COOLDOWN_TICKS).is_empty());
    }

    #[test]
    fn test_self_hit_does_not_tag() {
        let (ledger, listener) = setup();
        let p = PlayerId::random();
        let event = AttackEvent { attacker: p, victim: p, victim_online: true };

        assert_eq!(listener.on_attack(event, 0), None);
        assert!(!ledger.is_tagged(p));
    }

    #[test]
    fn test_tagged_player_blocked_from_region() {
        let (_ledger, listener) = setup();
        let p = PlayerId::random();
        let inside = Location::new("world", BlockPos::new(10, 70, -10));
        let outside = Location::new("world", BlockPos::new(40, 70, 0));

        listener.on_attack(attack(p), 0);

        assert!(listener.on_move(p, &inside).is_veto());
        assert_eq!(listener.on_move(p, &outside), MoveVerdict::Allow);
    }

    #[test]
    fn test_untagged_player_moves_freely() {
        let (_ledger, listener) = setup();
        let p = PlayerId::random();
        let inside = Location::new("world", BlockPos::new(0, 70, 0));

        assert_eq!(listener.on_move(p, &inside), MoveVerdict::Allow);
    }

    #[test]
    fn test_region_boundary_blocks_inclusive() {
        let (_ledger, listener) = setup();
        let p = PlayerId::random();

        listener.on_attack(attack(p), 0);

        let edge = Location::new("world", BlockPos::new(16, 70, 16));
        let past_edge = Location::new("world", BlockPos::new(17, 70, 16));
        assert!(listener.on_move(p, &edge).is_veto());
        assert_eq!(listener.on_move(p, &past_edge), MoveVerdict::Allow);
    }

    #[test]
    fn test_other_world_does_not_block() {
        let (_ledger, listener) = setup();
        let p = PlayerId::random();

        listener.on_attack(attack(p), 0);

        let nether = Location::new("world_nether", BlockPos::new(0, 70, 0));
        assert_eq!(listener.on_move(p, &nether), MoveVerdict::Allow);
    }

    #[test]
    fn test_expiry_notice_after_cooldown() {
        let (_ledger, listener) = setup();
        let p = PlayerId::random();
        let inside = Location::new("world", BlockPos::new(0, 70, 0));

        listener.on_attack(attack(p), 0);
        assert!(listener.on_tick(TAG_COOLDOWN_TICKS - 1).is_empty());

        let notices = listener.on_tick(TAG_COOLDOWN_TICKS);
        assert_eq!(notices, vec![TagNotice::NoLongerTagged { player: p }]);

        // Free to enter spawn again.
        assert_eq!(listener.on_move(p, &inside), MoveVerdict::Allow);
    }

    #[test]
    fn test_retag_produces_one_expiry_notice() {
        let (_ledger, listener) = setup();
        let p = PlayerId::random();

        listener.on_attack(attack(p), 0);
        listener.on_attack(attack(p), 10 * crate::tag::TICKS_PER_SECOND);

        // Old timer is gone; only the renewed one fires.
        assert!(listener.on_tick(TAG_COOLDOWN_TICKS).is_empty());
        let notices = listener.on_tick(10 * crate::tag::TICKS_PER_SECOND + TAG_COOLDOWN_TICKS);
        assert_eq!(notices.len(), 1);
    }
}
