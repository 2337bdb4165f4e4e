use thiserror::Error;

/// Region management failures, surfaced to the command issuer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("a spawn region already exists for world '{world}'")]
    DuplicateRegion { world: String },

    #[error("no spawn region exists for world '{world}'")]
    RegionNotFound { world: String },
}

/// Region list persistence failures.
///
/// Never fatal: the in-memory index stays authoritative when a save or load
/// fails. Unresolvable entries inside an otherwise readable file are not
/// errors at all; they are skipped and reported in
/// [`LoadReport`](crate::save::LoadReport).
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
