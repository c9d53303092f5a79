use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PolicyError {
    #[error("board size {size} is not a valid policy input (must be at least 1 with a representable square)")]
    InvalidSize { size: usize },

    #[error("remaining time {time} is not a valid policy input (must be finite and non-negative)")]
    InvalidTime { time: f64 },

    #[error("{fruits} fruits cannot fit on a board with {capacity} cells")]
    TooManyFruits { fruits: usize, capacity: usize },

    #[error("no depth band covers board size {size}")]
    NoBand { size: usize },

    #[error("invalid depth table: {reason}")]
    InvalidTable { reason: String },

    #[error("failed to parse depth table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read depth table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PolicyError>;
