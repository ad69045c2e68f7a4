//! Placement configuration for perch: starting position and alignment, gaps,
//! overlap policy and writing direction.
//!
//! Configuration is written in RON with every field optional:
//!
//! ```ron
//! (position: top, alignment: center, v_offset: 4.0, nub: (w: 12.0, h: 12.0))
//! ```

mod error;
mod loader;
mod raw;
mod types;

#[cfg(test)]
mod test_parse;

pub use error::Error;
pub use loader::{from_ron, from_ron_str, load_from_path};
pub use raw::RawPlacement;
pub use types::{AlignmentSetting, Nub, PlacementConfig, PositionSetting};

impl PlacementConfig {
    /// Check value ranges and that an explicit alignment suits an explicit
    /// position.
    pub fn validate(&self) -> Result<(), Error> {
        raw::validate(self)
    }
}
