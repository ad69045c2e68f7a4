use thiserror::Error;

use crate::{Alignment, ElementId, Position};

/// Errors produced while reading or writing layout geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry was requested for the document root or the viewport itself.
    #[error("cannot measure {0}: the document root and viewport have no box of their own")]
    RootElement(ElementId),

    /// The element is detached and has no parent to measure.
    #[error("{0} has no parent")]
    NoParent(ElementId),

    /// The layout does not know this element.
    #[error("unknown element {0}")]
    UnknownElement(ElementId),

    /// The alignment is not legal for the position.
    #[error("alignment '{alignment}' is not valid for position '{position}'")]
    IllegalAlignment {
        /// Requested side of attachment.
        position: Position,
        /// Offending alignment.
        alignment: Alignment,
    },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;
