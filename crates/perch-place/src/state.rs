//! Search state: the current candidate and which candidates have been tried.

use perch_geom::{Placement, Position};

/// Per-position record of tried alignments.
///
/// One bit per legal alignment, indexed by the alignment's slot in
/// [`Position::alignments`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriedPositions([u8; 4]);

impl TriedPositions {
    #[inline]
    fn slot(position: Position) -> usize {
        match position {
            Position::Top => 0,
            Position::Bottom => 1,
            Position::Left => 2,
            Position::Right => 3,
        }
    }

    /// Same record with `placement` marked as tried.
    pub fn with(mut self, placement: Placement) -> Self {
        let position = placement.position();
        if let Some(bit) = placement.alignment().index_in(position) {
            self.0[Self::slot(position)] |= 1 << bit;
        }
        self
    }

    /// Number of alignments tried at `position`.
    pub fn count(&self, position: Position) -> usize {
        self.0[Self::slot(position)].count_ones() as usize
    }

    /// Every legal alignment at `position` has been tried.
    pub fn is_exhausted(&self, position: Position) -> bool {
        self.count(position) == position.alignments().len()
    }

    /// Every legal candidate has been tried.
    pub fn all_exhausted(&self) -> bool {
        Position::ORDER.iter().all(|p| self.is_exhausted(*p))
    }
}

/// Where the search is: the candidate about to be measured plus history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementState {
    /// Candidate currently applied.
    placement: Placement,
    /// Candidates already measured.
    tried: TriedPositions,
}

impl PlacementState {
    /// Fresh search starting at `start`.
    pub fn new(start: Placement) -> Self {
        Self {
            placement: start,
            tried: TriedPositions::default(),
        }
    }

    /// The current candidate.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The tried-candidate record.
    pub fn tried(&self) -> TriedPositions {
        self.tried
    }

    /// True once every legal candidate has been recorded.
    pub fn is_exhausted(&self) -> bool {
        self.tried.all_exhausted()
    }

    /// Record the current candidate and move to the next one.
    ///
    /// Cycles through the remaining alignments of the current position; once
    /// those run out, moves to the next position in `left, right, top,
    /// bottom` order, starting at its first alignment.
    pub fn advance(self) -> Self {
        let tried = self.tried.with(self.placement);
        let position = self.placement.position();
        let placement = if tried.is_exhausted(position) {
            Placement::first_of(position.next())
        } else {
            self.placement.next_alignment()
        };
        Self { placement, tried }
    }

    /// Every candidate a full search from `start` visits, in order.
    pub fn sequence(start: Placement) -> Vec<Placement> {
        let mut state = Self::new(start);
        let mut out = Vec::with_capacity(12);
        while !state.is_exhausted() {
            out.push(state.placement);
            state = state.advance();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use perch_geom::Alignment;

    use super::*;

    fn p(position: Position, alignment: Alignment) -> Placement {
        Placement::new(position, alignment).unwrap()
    }

    #[test]
    fn bottom_center_order() {
        let seq = PlacementState::sequence(p(Position::Bottom, Alignment::Center));
        assert_eq!(seq.len(), 12);
        assert_eq!(
            &seq[..6],
            &[
                p(Position::Bottom, Alignment::Center),
                p(Position::Bottom, Alignment::Left),
                p(Position::Bottom, Alignment::Right),
                p(Position::Left, Alignment::Top),
                p(Position::Left, Alignment::Bottom),
                p(Position::Left, Alignment::Center),
            ]
        );
        assert_eq!(seq[9], p(Position::Top, Alignment::Left));
    }

    #[test]
    fn tried_tracks_bits() {
        let tried = TriedPositions::default()
            .with(p(Position::Top, Alignment::Left))
            .with(p(Position::Top, Alignment::Left))
            .with(p(Position::Left, Alignment::Center));
        assert_eq!(tried.count(Position::Top), 1);
        assert_eq!(tried.count(Position::Left), 1);
        assert_eq!(tried.count(Position::Right), 0);
        assert!(!tried.is_exhausted(Position::Left));
        assert!(!tried.all_exhausted());
    }

    #[test]
    fn advance_exhausts_after_twelve() {
        let mut state = PlacementState::new(p(Position::Right, Alignment::Top));
        for _ in 0..11 {
            state = state.advance();
            assert!(!state.is_exhausted());
        }
        state = state.advance();
        assert!(state.is_exhausted());
        for position in Position::ORDER {
            assert_eq!(state.tried().count(position), 3);
        }
    }
}
