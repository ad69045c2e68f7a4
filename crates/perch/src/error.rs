//! Error handling for the perch binary.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for perch commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// Configuration parsing, validation, or scene syntax errors.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),
    /// The scene's geometry is inconsistent.
    #[error("scene error: {0}")]
    Scene(#[from] perch_geom::Error),
    /// Placement failed.
    #[error("placement error: {0}")]
    Placement(#[from] perch_place::Error),
    /// Serializing output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Serializing RON output failed.
    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),
}
