use std::fmt::{Display, Formatter, Result as FmtResult};

use perch_geom::ElementId;
use thiserror::Error;

/// The part an element plays in a placement call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The reference element.
    Anchor,
    /// The panel being positioned.
    Floating,
    /// The bounding container.
    Bounds,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Anchor => "anchor",
            Self::Floating => "floating element",
            Self::Bounds => "bounding container",
        })
    }
}

/// Errors produced by placement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An element involved in placement has no area.
    #[error("{role} {element} has zero width or height")]
    Degenerate {
        /// The offending element.
        element: ElementId,
        /// What it was used as.
        role: Role,
    },

    /// Reading or writing geometry failed.
    #[error("geometry: {0}")]
    Geometry(#[from] perch_geom::Error),

    /// The placement configuration is invalid.
    #[error("config: {0}")]
    Config(#[from] config::Error),
}

/// Result type for placement operations.
pub type Result<T> = std::result::Result<T, Error>;
