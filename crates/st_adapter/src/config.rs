//! Plugin configuration supplied by the host.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use st_core::save::REGIONS_FILE;

/// Tunables the host hands the bridge at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Directory holding the plugin's persisted state.
    pub data_dir: PathBuf,
    /// File name of the region list inside `data_dir`.
    pub regions_file: String,
    /// Half side length, in blocks, of newly created regions. Matches the
    /// server's protected-spawn radius.
    pub default_radius: i32,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("plugins/SpawnTag"),
            regions_file: REGIONS_FILE.to_string(),
            default_radius: 16,
        }
    }
}

impl PluginConfig {
    /// Parses a config from the host's JSON settings blob. Missing fields
    /// fall back to the defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Full path of the regions file.
    pub fn regions_path(&self) -> PathBuf {
        self.data_dir.join(&self.regions_file)
    }
}
