use std::fs::{rename, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use uuid::Uuid;

use crate::error::PersistError;
use crate::models::{WorldCatalog, WorldId};
use crate::region::{RegionIndex, SpawnRegion};

/// What a [`load_regions`] call managed to reconstruct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// World names of the regions that were created.
    pub created: Vec<String>,
    /// Lines that did not resolve to a region: malformed UUID, world not
    /// loaded, or a duplicate of an earlier line. Skipped, never fatal.
    pub unresolved: Vec<String>,
}

/// Writes the region list to `path`, one world UUID per line.
///
/// The write is atomic: data goes to a sibling temp file first, then renames
/// over the target. Parent directories are created on demand. Returns the
/// number of regions written.
pub fn save_regions(path: &Path, index: &RegionIndex) -> Result<usize, PersistError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let regions = index.snapshot();
    let temp_path = path.with_extension("tmp");

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        for region in &regions {
            writeln!(writer, "{}", region.world_id)?;
        }
        writer.flush()?;

        // sync_all ensures data is written to disk (portable fsync)
        writer.get_ref().sync_all()?;
    }

    rename(&temp_path, path)?;

    log::debug!("Saved {} region(s) to {:?}", regions.len(), path);
    Ok(regions.len())
}

/// Rebuilds the region index from `path`.
///
/// Each line is a world UUID. The world's current spawn point becomes the
/// region center and `default_radius` its radius. Lines that fail to parse
/// or resolve go into [`LoadReport::unresolved`] and are skipped; a stale
/// entry never aborts the rest of the load. A missing file loads nothing.
pub fn load_regions(
    path: &Path,
    worlds: &dyn WorldCatalog,
    default_radius: i32,
    index: &RegionIndex,
) -> Result<LoadReport, PersistError> {
    let mut report = LoadReport::default();

    if !path.exists() {
        log::info!("No regions file at {:?}, starting empty", path);
        return Ok(report);
    }

    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let resolved = Uuid::parse_str(line)
            .ok()
            .and_then(|uid| worlds.world_by_id(WorldId::new(uid)));
        let Some(meta) = resolved else {
            log::warn!("Skipping regions file entry '{}': world is not loaded", line);
            report.unresolved.push(line.to_string());
            continue;
        };

        let region = SpawnRegion::new(meta.name.clone(), meta.id, meta.spawn, default_radius);
        match index.insert(region) {
            Ok(()) => report.created.push(meta.name),
            Err(err) => {
                log::warn!("Skipping regions file entry '{}': {}", line, err);
                report.unresolved.push(line.to_string());
            }
        }
    }

    log::info!(
        "Loaded {} region(s) from {:?} ({} skipped)",
        report.created.len(),
        path,
        report.unresolved.len()
    );
    Ok(report)
}
