// Region list persistence: line-oriented text file, one world UUID per line.
// The format is a fixed external contract shared with other server tooling;
// keep it byte-compatible.

mod regions;

pub use regions::{load_regions, save_regions, LoadReport};

/// File name of the persisted region list inside the plugin data directory.
pub const REGIONS_FILE: &str = "config.txt";
