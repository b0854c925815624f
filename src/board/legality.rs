// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use super::cell::Cell;
use super::grid::GridMask;
use super::history::VisitedHistory;
use super::occupancy::Occupancy;
use super::piece::PieceState;
use super::rules::RuleOptions;

/// What a piece would find on a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Empty and reachable.
    Open,
    /// Holds an opposing piece that may be overtaken.
    Capture,
    /// Out of bounds, disabled, already visited under the trace-moves
    /// rule, or held by a piece that cannot be overtaken.
    Blocked,
}

impl Verdict {
    #[inline]
    pub fn is_legal(&self) -> bool {
        !matches!(*self, Verdict::Blocked)
    }
}

/// The shared destination check used by every movement pattern. Pure
/// queries only; nothing here mutates the board.
pub trait Legality:
    AsRef<GridMask> + AsRef<RuleOptions> + AsRef<Occupancy> + AsRef<VisitedHistory>
{
    fn verdict(&self, piece: &PieceState, candidate: Cell) -> Verdict {
        let grid: &GridMask = self.as_ref();
        if !grid.in_bounds(candidate) || !grid.enabled(candidate) {
            return Verdict::Blocked;
        }
        let rules: &RuleOptions = self.as_ref();
        if rules.trace_moves {
            let history: &VisitedHistory = self.as_ref();
            if history.has_visited(piece.id(), candidate) {
                return Verdict::Blocked;
            }
        }
        let occupancy: &Occupancy = self.as_ref();
        match occupancy.get(candidate) {
            None => Verdict::Open,
            Some(occupant) if occupant.side == piece.side() => Verdict::Blocked,
            Some(_) if rules.can_overtake => Verdict::Capture,
            Some(_) => Verdict::Blocked,
        }
    }

    #[inline]
    fn is_legal_destination(&self, piece: &PieceState, candidate: Cell) -> bool {
        self.verdict(piece, candidate).is_legal()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::*;

    /// Just the pieces of board state the predicate reads.
    pub(crate) struct Fixture {
        pub grid: GridMask,
        pub rules: RuleOptions,
        pub occupancy: Occupancy,
        pub history: VisitedHistory,
    }

    impl Fixture {
        pub fn new(grid: GridMask, rules: RuleOptions) -> Self {
            Self {
                grid,
                rules,
                occupancy: Occupancy::empty(),
                history: VisitedHistory::new(),
            }
        }
        pub fn put(&mut self, index: usize, side: Side, cell: Cell) {
            self.occupancy
                .place(cell, Occupant::new(PieceId::new(index), side));
        }
    }

    impl AsRef<GridMask> for Fixture {
        fn as_ref(&self) -> &GridMask {
            &self.grid
        }
    }
    impl AsRef<RuleOptions> for Fixture {
        fn as_ref(&self) -> &RuleOptions {
            &self.rules
        }
    }
    impl AsRef<Occupancy> for Fixture {
        fn as_ref(&self) -> &Occupancy {
            &self.occupancy
        }
    }
    impl AsRef<VisitedHistory> for Fixture {
        fn as_ref(&self) -> &VisitedHistory {
            &self.history
        }
    }
    impl Legality for Fixture {}
    impl LegalMoves for Fixture {}

    pub(crate) fn piece(index: usize, side: Side, capability: Capability, cell: Cell) -> PieceState {
        PieceState::new(PieceId::new(index), format!("p{index}"), side, capability, cell, true)
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let fixture = Fixture::new(GridMask::full(), RuleOptions::default());
        let rook = piece(0, Side::White, Capability::SlidingOrthogonal, Cell::new(0, 0));
        assert_eq!(fixture.verdict(&rook, Cell::new(-1, 0)), Verdict::Blocked);
        assert_eq!(fixture.verdict(&rook, Cell::new(0, 8)), Verdict::Blocked);
    }
    #[test]
    fn test_disabled_cell_is_blocked() {
        let fixture = Fixture::new(GridMask::rect(0..=3, 0..=3), RuleOptions::default());
        let rook = piece(0, Side::White, Capability::SlidingOrthogonal, Cell::new(0, 0));
        assert!(fixture.is_legal_destination(&rook, Cell::new(3, 0)));
        assert!(!fixture.is_legal_destination(&rook, Cell::new(4, 0)));
    }
    #[test]
    fn test_same_side_is_blocked() {
        let mut fixture = Fixture::new(GridMask::full(), RuleOptions::new([GameOption::CanOvertake]));
        fixture.put(1, Side::White, Cell::new(0, 3));
        let rook = piece(0, Side::White, Capability::SlidingOrthogonal, Cell::new(0, 0));
        assert_eq!(fixture.verdict(&rook, Cell::new(0, 3)), Verdict::Blocked);
    }
    #[test]
    fn test_opposing_piece_needs_overtake() {
        let mut fixture = Fixture::new(GridMask::full(), RuleOptions::default());
        fixture.put(1, Side::Black, Cell::new(0, 3));
        let rook = piece(0, Side::White, Capability::SlidingOrthogonal, Cell::new(0, 0));
        assert_eq!(fixture.verdict(&rook, Cell::new(0, 3)), Verdict::Blocked);
        fixture.rules = RuleOptions::new([GameOption::CanOvertake]);
        assert_eq!(fixture.verdict(&rook, Cell::new(0, 3)), Verdict::Capture);
    }
    #[test]
    fn test_visited_cells_only_block_under_trace_moves() {
        let mut fixture = Fixture::new(GridMask::full(), RuleOptions::default());
        let rook = piece(0, Side::White, Capability::SlidingOrthogonal, Cell::new(0, 0));
        fixture.history.record(rook.id(), Cell::new(0, 5));
        assert_eq!(fixture.verdict(&rook, Cell::new(0, 5)), Verdict::Open);
        fixture.rules = RuleOptions::new([GameOption::TraceMoves]);
        assert_eq!(fixture.verdict(&rook, Cell::new(0, 5)), Verdict::Blocked);
        let other = piece(1, Side::White, Capability::SlidingOrthogonal, Cell::new(1, 5));
        assert_eq!(fixture.verdict(&other, Cell::new(0, 5)), Verdict::Open);
    }
    #[test]
    fn test_trace_moves_is_checked_before_occupancy() {
        let mut fixture = Fixture::new(
            GridMask::full(),
            RuleOptions::new([GameOption::TraceMoves, GameOption::CanOvertake]),
        );
        let rook = piece(0, Side::White, Capability::SlidingOrthogonal, Cell::new(0, 0));
        fixture.history.record(rook.id(), Cell::new(0, 5));
        fixture.put(1, Side::Black, Cell::new(0, 5));
        assert_eq!(fixture.verdict(&rook, Cell::new(0, 5)), Verdict::Blocked);
    }
}
