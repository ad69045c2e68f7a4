use config::PlacementConfig;
use perch_geom::{
    Alignment, Axes, Dimensions, EdgeOverflow, ElementId, Layout, Offset, Placement, Position,
    Rect, dimensions, edge_overflow, explicit_offset,
};
use tracing::{debug, trace};

use crate::{
    Profile, Result,
    error::{Error, Role},
    state::PlacementState,
};

/// Effective gaps for one side of attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaps {
    /// Gap between the anchor and the panel along y.
    pub vertical: f64,
    /// Gap between the anchor and the panel along x.
    pub horizontal: f64,
}

/// Where the panel ended up and how much work it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed {
    /// The candidate left applied.
    pub placement: Placement,
    /// Offset written to the floating element.
    pub offset: Offset,
    /// Candidates measured during the search.
    pub attempts: u32,
}

/// Result of a single `place` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The anchor is not expanded; nothing was written.
    Skipped,
    /// Overlap is allowed; the configured placement was applied unchecked.
    Fixed(Placed),
    /// A candidate fits entirely inside the bounds.
    Fit(Placed),
    /// Nothing fits; the candidate with the least overlap was applied.
    BestEffort {
        /// The applied candidate.
        placed: Placed,
        /// Its overlap magnitude.
        overlap: f64,
    },
}

impl Outcome {
    /// Placement details, unless the call was skipped.
    pub fn placed(&self) -> Option<&Placed> {
        match self {
            Self::Skipped => None,
            Self::Fixed(p) | Self::Fit(p) => Some(p),
            Self::BestEffort { placed, .. } => Some(placed),
        }
    }

    /// Remaining overlap: zero for `Fit`, unknown for `Skipped`/`Fixed`.
    pub fn overlap(&self) -> Option<f64> {
        match self {
            Self::Fit(_) => Some(0.0),
            Self::BestEffort { overlap, .. } => Some(*overlap),
            Self::Skipped | Self::Fixed(_) => None,
        }
    }

    /// Short lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Fixed(_) => "fixed",
            Self::Fit(_) => "fit",
            Self::BestEffort { .. } => "best-effort",
        }
    }
}

/// One row of a dry-run evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The candidate.
    pub placement: Placement,
    /// Offset it would be written at.
    pub offset: Offset,
    /// Per-edge overflow at that offset.
    pub edges: EdgeOverflow,
    /// Scalar overlap at that offset.
    pub overlap: f64,
}

/// Positions one floating element against an anchor, retrying other
/// candidates when the configured one overflows its bounds.
#[derive(Debug, Clone)]
pub struct Positioner {
    config: PlacementConfig,
    original: Placement,
    current: Placement,
}

impl Positioner {
    /// Resolve the starting placement from `config`, deferring to `profile`
    /// for `auto` settings.
    pub fn configure(config: &PlacementConfig, profile: Profile) -> Result<Self> {
        config.validate()?;
        let position = config
            .position
            .explicit()
            .unwrap_or_else(profile.default_position);
        let alignment = config
            .alignment
            .explicit()
            .unwrap_or_else(|| (profile.default_alignment)(position, config.direction));
        let original = Placement::new(position, alignment)?;
        debug!(%original, direction = ?config.direction, "positioner configured");
        Ok(Self {
            config: *config,
            original,
            current: original,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// The configured starting candidate.
    pub fn original(&self) -> Placement {
        self.original
    }

    /// The candidate applied by the most recent `place`.
    pub fn placement(&self) -> Placement {
        self.current
    }

    /// Current side of attachment.
    pub fn position(&self) -> Position {
        self.current.position()
    }

    /// Current alignment.
    pub fn alignment(&self) -> Alignment {
        self.current.alignment()
    }

    /// Presentational class names for the current placement.
    pub fn class_names(&self) -> (String, String) {
        self.current.class_names()
    }

    /// Gaps for `position`: the configured offsets plus the nub size on the
    /// axis of attachment.
    pub fn gaps(&self, position: Position) -> Gaps {
        let mut gaps = Gaps {
            vertical: self.config.v_offset,
            horizontal: self.config.h_offset,
        };
        if position.is_vertical() {
            gaps.vertical += self.config.nub.h;
        } else {
            gaps.horizontal += self.config.nub.w;
        }
        gaps
    }

    /// Place `floating` next to `anchor`, keeping it inside `bounds` (or the
    /// viewport when `None`) if any legal candidate allows.
    ///
    /// Every call restarts from the configured placement, so repeated calls
    /// against unchanged geometry write the same result.
    pub fn place<L: Layout + ?Sized>(
        &mut self,
        layout: &mut L,
        anchor: ElementId,
        floating: ElementId,
        bounds: Option<ElementId>,
    ) -> Result<Outcome> {
        if !layout.is_expanded(anchor) {
            debug!(%anchor, "anchor collapsed; skipping placement");
            return Ok(Outcome::Skipped);
        }
        let anchor_rect = measure(layout, anchor, Role::Anchor)?.rect;
        let bounds_rect = match bounds {
            Some(id) => Some(measure(layout, id, Role::Bounds)?.rect),
            None => None,
        };
        let size = measure(layout, floating, Role::Floating)?.rect;

        let mut state = PlacementState::new(self.original);
        self.current = self.original;
        let (mut offset, mut dims) =
            self.apply(layout, floating, &size, &anchor_rect, self.original)?;

        if self.config.allow_overlap {
            debug!(placement = %self.original, %offset, "overlap allowed; placed");
            return Ok(Outcome::Fixed(Placed {
                placement: self.original,
                offset,
                attempts: 0,
            }));
        }

        let ignore_bottom = self.config.allow_bottom_overlap;
        let mut attempts = 0u32;
        let mut best = (f64::INFINITY, self.original);
        loop {
            let edges = edge_overflow(&dims, bounds_rect.as_ref(), ignore_bottom);
            let overlap = edges.magnitude(Axes::Both);
            attempts += 1;
            debug!(
                attempt = attempts,
                candidate = %state.placement(),
                %offset,
                overlap,
                edges = %edges,
                "measured candidate"
            );
            if overlap == 0.0 {
                self.current = state.placement();
                return Ok(Outcome::Fit(Placed {
                    placement: self.current,
                    offset,
                    attempts,
                }));
            }
            // Strict comparison keeps the first of equal minima.
            if overlap < best.0 {
                best = (overlap, state.placement());
            }
            state = state.advance();
            if state.is_exhausted() {
                break;
            }
            (offset, dims) = self.apply(layout, floating, &size, &anchor_rect, state.placement())?;
        }

        let (overlap, placement) = best;
        let (offset, _) = self.apply(layout, floating, &size, &anchor_rect, placement)?;
        self.current = placement;
        debug!(%placement, overlap, attempts, "no candidate fits; using least overlap");
        Ok(Outcome::BestEffort {
            placed: Placed {
                placement,
                offset,
                attempts,
            },
            overlap,
        })
    }

    /// Evaluate every candidate in search order without writing anything.
    pub fn candidates<L: Layout + ?Sized>(
        &self,
        layout: &L,
        anchor: ElementId,
        floating: ElementId,
        bounds: Option<ElementId>,
    ) -> Result<Vec<Candidate>> {
        let anchor_rect = measure(layout, anchor, Role::Anchor)?.rect;
        let bounds_rect = match bounds {
            Some(id) => Some(measure(layout, id, Role::Bounds)?.rect),
            None => None,
        };
        let dims = measure(layout, floating, Role::Floating)?;
        PlacementState::sequence(self.original)
            .into_iter()
            .map(|placement| {
                let offset = self.offset_for(&dims.rect, &anchor_rect, placement)?;
                let edges = edge_overflow(
                    &dims.with_offset(offset),
                    bounds_rect.as_ref(),
                    self.config.allow_bottom_overlap,
                );
                Ok(Candidate {
                    placement,
                    offset,
                    edges,
                    overlap: edges.magnitude(Axes::Both),
                })
            })
            .collect()
    }

    fn offset_for(&self, floating: &Rect, anchor: &Rect, placement: Placement) -> Result<Offset> {
        let gaps = self.gaps(placement.position());
        Ok(explicit_offset(
            floating,
            anchor,
            placement.position(),
            placement.alignment(),
            gaps.vertical,
            gaps.horizontal,
        )?)
    }

    /// Write the offset for `placement` and read the element back.
    fn apply<L: Layout + ?Sized>(
        &self,
        layout: &mut L,
        floating: ElementId,
        size: &Rect,
        anchor: &Rect,
        placement: Placement,
    ) -> Result<(Offset, Dimensions)> {
        let offset = self.offset_for(size, anchor, placement)?;
        layout.set_offset(floating, offset)?;
        trace!(%floating, %placement, %offset, "applied");
        Ok((offset, dimensions(layout, floating)?))
    }
}

/// Read an element's dimensions, rejecting zero-area boxes.
fn measure<L: Layout + ?Sized>(layout: &L, element: ElementId, role: Role) -> Result<Dimensions> {
    let dims = dimensions(layout, element)?;
    if dims.rect.is_empty() {
        return Err(Error::Degenerate { element, role });
    }
    Ok(dims)
}
