use std::{collections::TryReserveError, io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Capacity must be at least one sample")]
    ZeroCapacity,
    #[error("Capacity {0} is too large for the sample type")]
    CapacityOutOfRange(usize),
    #[error("Failed to allocate the sample buffer: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("Failed to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Invalid sample '{token}' on line {line}")]
    InvalidSample { line: usize, token: String },
    #[error("Random sample range {low}..{high} is empty or unbounded")]
    EmptyRange { low: f64, high: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
