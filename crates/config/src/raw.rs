use perch_geom::Direction;
use serde::{Deserialize, Serialize};

use super::{
    Error,
    types::{AlignmentSetting, Nub, PlacementConfig, PositionSetting},
};

// ===== RAW PLACEMENT CONFIG =====

/// Raw placement config with all optional fields, as read from a RON file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct RawPlacement {
    /// Starting side, or `auto`.
    #[serde(default)]
    pub position: Option<PositionSetting>,
    /// Starting alignment, or `auto`.
    #[serde(default)]
    pub alignment: Option<AlignmentSetting>,
    /// Skip the overlap search.
    #[serde(default)]
    pub allow_overlap: Option<bool>,
    /// Tolerate overflow past the bottom edge.
    #[serde(default)]
    pub allow_bottom_overlap: Option<bool>,
    /// Vertical gap.
    #[serde(default)]
    pub v_offset: Option<f64>,
    /// Horizontal gap.
    #[serde(default)]
    pub h_offset: Option<f64>,
    /// Writing direction.
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Arrow size.
    #[serde(default)]
    pub nub: Option<Nub>,
}

impl RawPlacement {
    /// Values from `self` take precedence; missing ones come from `base`.
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            position: self.position.or(base.position),
            alignment: self.alignment.or(base.alignment),
            allow_overlap: self.allow_overlap.or(base.allow_overlap),
            allow_bottom_overlap: self.allow_bottom_overlap.or(base.allow_bottom_overlap),
            v_offset: self.v_offset.or(base.v_offset),
            h_offset: self.h_offset.or(base.h_offset),
            direction: self.direction.or(base.direction),
            nub: self.nub.or(base.nub),
        }
    }

    /// Apply defaults and validate.
    pub fn resolve(self) -> Result<PlacementConfig, Error> {
        let d = PlacementConfig::default();
        let cfg = PlacementConfig {
            position: self.position.unwrap_or(d.position),
            alignment: self.alignment.unwrap_or(d.alignment),
            allow_overlap: self.allow_overlap.unwrap_or(d.allow_overlap),
            allow_bottom_overlap: self.allow_bottom_overlap.unwrap_or(d.allow_bottom_overlap),
            v_offset: self.v_offset.unwrap_or(d.v_offset),
            h_offset: self.h_offset.unwrap_or(d.h_offset),
            direction: self.direction.unwrap_or(d.direction),
            nub: self.nub.unwrap_or(d.nub),
        };
        validate(&cfg)?;
        Ok(cfg)
    }
}

/// Check value ranges and position/alignment compatibility.
pub(crate) fn validate(cfg: &PlacementConfig) -> Result<(), Error> {
    for (name, v) in [("v_offset", cfg.v_offset), ("h_offset", cfg.h_offset)] {
        if !v.is_finite() {
            return Err(Error::validation(format!("{name} must be a finite number")));
        }
    }
    if !(cfg.nub.w.is_finite() && cfg.nub.h.is_finite()) || cfg.nub.w < 0.0 || cfg.nub.h < 0.0 {
        return Err(Error::validation("nub sizes must be finite and non-negative"));
    }
    match (cfg.position.explicit(), cfg.alignment.explicit()) {
        (Some(p), Some(a)) if !a.is_legal_for(p) => Err(Error::validation(format!(
            "alignment '{a}' is not valid for position '{p}'"
        ))),
        _ => Ok(()),
    }
}
