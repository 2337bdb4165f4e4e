pub mod player;
pub mod world;

pub use player::PlayerId;
pub use world::{BlockPos, Location, WorldCatalog, WorldId, WorldMeta};
