use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a world, the form persisted in the regions file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(pub Uuid);

impl WorldId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer block position.
///
/// Region containment only looks at `x` and `z`; regions span the full
/// vertical extent of their world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A block position qualified by the world it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Server-side world name, e.g. `world_nether`.
    pub world: String,
    pub pos: BlockPos,
}

impl Location {
    pub fn new(world: impl Into<String>, pos: BlockPos) -> Self {
        Self { world: world.into(), pos }
    }
}

/// What the host engine knows about a loaded world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldMeta {
    pub id: WorldId,
    pub name: String,
    /// Current spawn point; becomes the region center on creation and load.
    pub spawn: BlockPos,
}

/// Host-side world lookup.
///
/// The engine owns the authoritative world list; this crate only asks it to
/// resolve identities back to live worlds: persisted UUIDs at load time,
/// typed names at command time.
pub trait WorldCatalog {
    /// Resolve a world by its stable UUID. `None` when the world is not
    /// currently loaded.
    fn world_by_id(&self, id: WorldId) -> Option<WorldMeta>;

    /// Resolve a world by its server-side name (already normalized).
    fn world_by_name(&self, name: &str) -> Option<WorldMeta>;
}
