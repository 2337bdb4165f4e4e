//! st_adapter: translate host engine callbacks into spawn-tag core calls
//! and render the core's notices as player-facing chat.
//!
//! The core never talks to the engine directly. This crate owns the seams:
//! [`PlayerDirectory`] for reaching players, the region commands players
//! type (with the world-name aliases they expect), and the startup and
//! persistence glue around the region list.

pub mod bridge;
pub mod command;
pub mod config;
pub mod message;

pub use bridge::{PlayerDirectory, SpawnTagBridge};
pub use command::{normalize_world_name, target_world, CommandError, RegionCommand};
pub use config::PluginConfig;
