//! Region management commands: create and delete, with the world-name
//! aliases players actually type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use st_core::RegionError;

/// A parsed region-management command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionCommand {
    /// Create a region around a world's spawn.
    Create { world: Option<String> },
    /// Delete a world's region.
    Delete { world: Option<String> },
}

/// Why a region command could not be carried out. Rendered into the reply
/// sent to the issuer; never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("there is no loaded world named '{world}'")]
    UnknownWorld { world: String },

    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Maps the names players type onto the names the server generates:
/// `overworld` becomes `world`, `nether` becomes `world_nether`, `end`
/// becomes `world_the_end`. Anything else is just lowercased.
pub fn normalize_world_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.as_str() {
        "overworld" => "world".to_string(),
        "nether" => "world_nether".to_string(),
        "end" => "world_the_end".to_string(),
        _ => lowered,
    }
}

/// Picks the world a command acts on: the explicit argument when present,
/// otherwise the world the issuer is standing in.
pub fn target_world(arg: Option<&str>, issuer_world: &str) -> String {
    match arg {
        Some(name) if !name.trim().is_empty() => normalize_world_name(name),
        _ => issuer_world.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_table() {
        assert_eq!(normalize_world_name("Overworld"), "world");
        assert_eq!(normalize_world_name("NETHER"), "world_nether");
        assert_eq!(normalize_world_name("end"), "world_the_end");
    }

    #[test]
    fn test_unaliased_names_are_lowercased() {
        assert_eq!(normalize_world_name("Creative_Plots"), "creative_plots");
        assert_eq!(normalize_world_name("  world_nether "), "world_nether");
    }

    #[test]
    fn test_target_world_defaults_to_issuer_world() {
        assert_eq!(target_world(None, "world_nether"), "world_nether");
        assert_eq!(target_world(Some(""), "world"), "world");
        assert_eq!(target_world(Some("  "), "World"), "world");
    }

    #[test]
    fn test_target_world_prefers_argument() {
        assert_eq!(target_world(Some("end"), "world"), "world_the_end");
    }
}
