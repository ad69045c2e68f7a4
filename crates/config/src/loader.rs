//! Parse and load placement configuration.

use std::{ffi::OsStr, fs, path::Path};

use ron::{Options, error::SpannedError, extensions::Extensions};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Error, PlacementConfig, RawPlacement};

/// RON options shared by every reader: `Some(..)` may be omitted around
/// optional values.
fn ron_options() -> Options {
    Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

impl From<SpannedError> for Error {
    fn from(e: SpannedError) -> Self {
        Self::Parse {
            path: None,
            line: e.span.start.line,
            col: e.span.start.col,
            message: e.code.to_string(),
        }
    }
}

/// Deserialize any RON document with the crate's options.
pub fn from_ron<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    Ok(ron_options().from_str(text)?)
}

/// Parse and resolve a placement configuration from RON text.
pub fn from_ron_str(text: &str) -> Result<PlacementConfig, Error> {
    from_ron::<RawPlacement>(text)?.resolve()
}

/// Load a fully resolved `PlacementConfig` from a RON file at `path`.
pub fn load_from_path(path: &Path) -> Result<PlacementConfig, Error> {
    if path.extension() != Some(OsStr::new("ron")) {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported config format (expected a .ron file)".to_string(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    let cfg = from_ron_str(&text).map_err(|e| e.with_path(path))?;
    debug!(path = %path.display(), ?cfg, "loaded placement config");
    Ok(cfg)
}
