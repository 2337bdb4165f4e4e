//! Square spawn regions and the per-world index.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::RegionError;
use crate::models::{BlockPos, WorldId};

/// Axis-aligned square region centered on a world's spawn point.
///
/// The footprint is `center ± radius` on both horizontal axes, bounds
/// inclusive. Vertically the region spans the whole world: `y` never
/// participates in containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRegion {
    /// World name, lowercased. Doubles as the index key.
    pub world: String,
    /// Stable world UUID, the form written to the regions file.
    pub world_id: WorldId,
    /// Center of the square, the world spawn at creation time.
    pub center: BlockPos,
    /// Half side length in blocks. Clamped to be non-negative.
    pub radius: i32,
}

impl SpawnRegion {
    pub fn new(world: impl Into<String>, world_id: WorldId, center: BlockPos, radius: i32) -> Self {
        Self {
            world: world.into().to_lowercase(),
            world_id,
            center,
            radius: radius.max(0),
        }
    }

    /// Horizontal containment check, bounds inclusive.
    pub fn contains(&self, pos: BlockPos) -> bool {
        pos.x >= self.center.x - self.radius
            && pos.x <= self.center.x + self.radius
            && pos.z >= self.center.z - self.radius
            && pos.z <= self.center.z + self.radius
    }
}

/// All active spawn regions, at most one per world.
///
/// Reads come from the movement path and writes from the command path, so
/// the map sits behind a `RwLock` rather than relying on the host
/// serializing its event delivery.
#[derive(Debug, Default)]
pub struct RegionIndex {
    regions: RwLock<HashMap<String, SpawnRegion>>,
}

impl RegionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a region. A world holds at most one region; a second insert
    /// for the same world is rejected, never overwritten.
    pub fn insert(&self, region: SpawnRegion) -> Result<(), RegionError> {
        let mut regions = self.regions.write().expect("region index lock poisoned");
        if regions.contains_key(&region.world) {
            return Err(RegionError::DuplicateRegion { world: region.world });
        }
        regions.insert(region.world.clone(), region);
        Ok(())
    }

    /// Removes the region registered for `world`, returning it.
    pub fn remove(&self, world: &str) -> Result<SpawnRegion, RegionError> {
        let mut regions = self.regions.write().expect("region index lock poisoned");
        regions
            .remove(world)
            .ok_or_else(|| RegionError::RegionNotFound { world: world.to_string() })
    }

    /// True iff `world` has a region and `pos` falls inside it. A point in a
    /// world with no region is never contained, so there is no cross-world
    /// leakage.
    pub fn contains(&self, world: &str, pos: BlockPos) -> bool {
        let regions = self.regions.read().expect("region index lock poisoned");
        regions.get(world).map_or(false, |region| region.contains(pos))
    }

    pub fn get(&self, world: &str) -> Option<SpawnRegion> {
        let regions = self.regions.read().expect("region index lock poisoned");
        regions.get(world).cloned()
    }

    /// Snapshot of every region, sorted by world name so persistence output
    /// is stable.
    pub fn snapshot(&self) -> Vec<SpawnRegion> {
        let regions = self.regions.read().expect("region index lock poisoned");
        let mut all: Vec<_> = regions.values().cloned().collect();
        all.sort_by(|a, b| a.world.cmp(&b.world));
        all
    }

    pub fn len(&self) -> usize {
        self.regions.read().expect("region index lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
