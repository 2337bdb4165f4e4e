//! # st_core - Spawn-Tag Rule Enforcement Core
//!
//! This library keeps combat-tagged players out of spawn. It owns three
//! pieces: square no-entry regions (one per world), a ledger of currently
//! tagged players with their expiry timers, and the decision logic that
//! vetoes movement into a region while a tag is live.
//!
//! ## Features
//! - One axis-aligned square region per world, spanning its full height
//! - Tick-driven tag cooldown with cancel-safe re-tagging
//! - Movement verdicts and player notices as plain return values
//! - Line-oriented region persistence (one world UUID per line)
//!
//! The host engine stays behind two seams: [`models::WorldCatalog`] for
//! resolving worlds, and whatever messaging layer the embedding adapter
//! provides for delivering [`enforcement::TagNotice`] values.

pub mod enforcement;
pub mod error;
pub mod models;
pub mod region;
pub mod save;
pub mod tag;

pub use enforcement::{AttackEvent, EnforcementListener, MoveVerdict, TagNotice};
pub use error::{PersistError, RegionError};
pub use models::{BlockPos, Location, PlayerId, WorldCatalog, WorldId, WorldMeta};
pub use region::{RegionIndex, SpawnRegion};
pub use save::{load_regions, save_regions, LoadReport};
pub use tag::{TagExpiry, TagLedger, TagReceipt, Tick, TAG_COOLDOWN_TICKS, TICKS_PER_SECOND};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
