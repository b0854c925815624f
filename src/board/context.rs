// Copyright 2023 Tobin Edwards
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

use anyhow::Result;
use std::collections::HashMap;
use std::fmt;

use super::animation::DisplayPosition;
use super::cell::{Cell, BOARD_SIZE};
use super::grid::GridMask;
use super::history::VisitedHistory;
use super::legality::Legality;
use super::markers::{Marker, Markers};
use super::material::{Pair, Side};
use super::moves::{Destinations, LegalMoves, MoveError};
use super::occupancy::{Occupancy, Occupant};
use super::piece::{PieceId, PieceState};
use super::rules::RuleOptions;
use super::setup::{PuzzleSetup, SetupError};

use MoveError::*;
use SetupError::*;

/// What a completed `move_piece` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub tag: String,
    pub from: Cell,
    pub to: Cell,
    pub captured: Option<PieceState>,
}

/// The board for one puzzle attempt. Owns the playable shape, the rule
/// flags, every live piece and the indexes derived from them.
///
/// Pieces are addressed by tag. Every public mutation leaves the occupancy
/// index equal to the set of live pieces' cells before it returns.
#[derive(Debug, Clone)]
pub struct Board {
    grid: GridMask,
    rules: RuleOptions,
    pieces: Vec<Option<PieceState>>,
    tags: HashMap<String, PieceId>,
    occupancy: Occupancy,
    history: VisitedHistory,
    markers: Markers,
    highlight: Option<Cell>,
    moves_made: usize,
    initial: Vec<PieceState>,
}

impl Board {
    /// Builds a board, rejecting the whole setup on the first bad
    /// placement.
    pub fn new(setup: &PuzzleSetup) -> Result<Self> {
        let grid = setup.grid();
        let mut occupancy = Occupancy::empty();
        let mut tags = HashMap::new();
        let mut pieces: Vec<PieceState> = Vec::with_capacity(setup.placements.len());

        for (index, placement) in setup.placements.iter().enumerate() {
            let capability = placement.capability()?;
            let tag = placement.tag.clone();
            let cell = placement.cell;
            if !grid.in_bounds(cell) {
                return Err(OutOfBounds { tag, cell }.into());
            }
            if !grid.enabled(cell) {
                return Err(DisabledCell { tag, cell }.into());
            }
            if let Some(occupant) = occupancy.get(cell) {
                let occupant = pieces[occupant.id.index()].tag().to_string();
                return Err(OccupiedCell { tag, cell, occupant }.into());
            }
            if tags.contains_key(&tag) {
                return Err(DuplicateTag(tag).into());
            }
            let id = PieceId::new(index);
            let moveable = placement.moveable.unwrap_or(!capability.is_immovable());
            occupancy.place(cell, Occupant::new(id, placement.side));
            tags.insert(tag.clone(), id);
            pieces.push(PieceState::new(id, tag, placement.side, capability, cell, moveable));
        }

        let mut markers = Markers::new();
        for &(cell, marker) in &setup.markers {
            if !cell.in_bounds() {
                return Err(MarkerOutOfBounds(cell).into());
            }
            markers.add(cell, marker);
        }

        let board = Self {
            grid,
            rules: setup.rules,
            pieces: pieces.iter().cloned().map(Some).collect(),
            tags,
            occupancy,
            history: VisitedHistory::new(),
            markers,
            highlight: None,
            moves_made: 0,
            initial: pieces,
        };
        debug_assert!(board.is_consistent());
        Ok(board)
    }

    #[inline]
    pub fn grid(&self) -> &GridMask {
        &self.grid
    }
    #[inline]
    pub fn rules(&self) -> &RuleOptions {
        &self.rules
    }
    #[inline]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn get(&self, id: PieceId) -> Option<&PieceState> {
        self.pieces.get(id.index())?.as_ref()
    }

    /// The live piece with this tag. Unknown and captured tags give `None`.
    pub fn piece(&self, tag: &str) -> Option<&PieceState> {
        let id = self.tags.get(tag)?;
        self.get(*id)
    }

    pub fn piece_at(&self, cell: Cell) -> Option<&PieceState> {
        let occupant = self.occupancy.get(cell)?;
        self.get(occupant.id)
    }

    /// Live pieces in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = &PieceState> {
        self.pieces.iter().flatten()
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &PieceState> {
        self.pieces().filter(move |piece| piece.side() == side)
    }

    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live pieces per side.
    pub fn census(&self) -> Pair<usize> {
        let mut census = Pair::new(0, 0);
        for piece in self.pieces() {
            census[piece.side()] += 1;
        }
        census
    }

    /// Where the piece may move, in generation order. Empty for unknown
    /// tags and for pieces that are not currently moveable.
    pub fn legal_moves(&self, tag: &str) -> Destinations {
        match self.piece(tag) {
            Some(piece) if piece.is_moveable() => self.destinations(piece),
            _ => Destinations::new(),
        }
    }

    pub fn display_position(&self, tag: &str) -> Option<DisplayPosition> {
        self.piece(tag).map(PieceState::display_position)
    }

    /// Cells the piece has left during this attempt, oldest first. Only
    /// recorded while the trace-moves rule is on.
    pub fn visited(&self, tag: &str) -> &[Cell] {
        match self.tags.get(tag) {
            Some(id) => self.history.cells(*id),
            None => &[],
        }
    }

    pub fn history(&self) -> &VisitedHistory {
        &self.history
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Setup markers on `cell`, plus `Marker::Highlight` if the last move
    /// ended there.
    pub fn markers_at(&self, cell: Cell) -> Vec<Marker> {
        let mut markers = self.markers.get(cell).to_vec();
        if self.highlight == Some(cell) && !markers.contains(&Marker::Highlight) {
            markers.push(Marker::Highlight);
        }
        markers
    }

    pub fn highlight(&self) -> Option<Cell> {
        self.highlight
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn is_animating(&self, tag: &str) -> bool {
        self.piece(tag).map_or(false, PieceState::is_animating)
    }

    /// True when no piece is mid-animation.
    pub fn is_settled(&self) -> bool {
        self.pieces().all(|piece| !piece.is_animating())
    }

    /// The placements the attempt started from.
    pub fn initial(&self) -> &[PieceState] {
        &self.initial
    }

    /// A copy of every live piece, in placement order.
    pub fn snapshot(&self) -> Vec<PieceState> {
        self.pieces().cloned().collect()
    }

    /// Checks that the occupancy index and the tag index agree exactly
    /// with the live pieces.
    pub fn is_consistent(&self) -> bool {
        let live = self.len();
        if self.occupancy.len() != live || self.tags.len() != live {
            return false;
        }
        self.pieces().all(|piece| {
            self.occupancy.get(piece.cell()) == Some(Occupant::new(piece.id(), piece.side()))
                && self.tags.get(piece.tag()) == Some(&piece.id())
        })
    }

    /// Moves a piece, capturing whatever opposing piece stands on `dest`,
    /// and starts its animation over `frames` ticks (zero moves it
    /// instantly).
    ///
    /// Fails with `MoveError::IllegalDestination` unless `dest` is one of
    /// the piece's current legal moves; nothing changes in that case.
    ///
    /// Moving a piece that is still animating restarts its animation from
    /// its cell (the previous destination), not from the interpolated
    /// position, so the drawn piece jumps. `Attempt` refuses such moves.
    pub fn move_piece(&mut self, tag: &str, dest: Cell, frames: u32) -> Result<MoveOutcome> {
        let piece = self
            .piece(tag)
            .ok_or_else(|| UnknownPiece(tag.to_string()))?;
        if !piece.is_moveable() || !self.destinations(piece).contains(dest) {
            return Err(IllegalDestination {
                tag: tag.to_string(),
                dest,
            }
            .into());
        }
        let id = piece.id();
        let side = piece.side();
        let from = piece.cell();

        let captured = self
            .occupancy
            .remove(dest)
            .and_then(|occupant| self.capture(occupant.id));
        self.occupancy.remove(from);
        self.occupancy.place(dest, Occupant::new(id, side));
        if self.rules.trace_moves {
            self.history.record(id, from);
        }
        if let Some(piece) = self.piece_mut(id) {
            piece.relocate(dest, frames);
        }
        self.highlight = Some(dest);
        self.moves_made += 1;

        debug_assert!(self.is_consistent());
        Ok(MoveOutcome {
            tag: tag.to_string(),
            from,
            to: dest,
            captured,
        })
    }

    /// Advances every running animation by one frame. Returns how many
    /// animations finished on this frame.
    pub fn tick(&mut self) -> usize {
        let mut finished = 0;
        for piece in self.pieces.iter_mut().flatten() {
            if piece.animation_mut().advance() {
                finished += 1;
            }
        }
        finished
    }

    /// Ends the piece's animation at once. Returns false for unknown tags.
    pub fn snap(&mut self, tag: &str) -> bool {
        let Some(&id) = self.tags.get(tag) else {
            return false;
        };
        match self.piece_mut(id) {
            Some(piece) => {
                piece.animation_mut().snap();
                true
            }
            None => false,
        }
    }

    pub fn snap_all(&mut self) {
        for piece in self.pieces.iter_mut().flatten() {
            piece.animation_mut().snap();
        }
    }

    pub fn set_moveable(&mut self, tag: &str, moveable: bool) -> Result<()> {
        let id = *self
            .tags
            .get(tag)
            .ok_or_else(|| UnknownPiece(tag.to_string()))?;
        if let Some(piece) = self.piece_mut(id) {
            piece.set_moveable(moveable);
        }
        Ok(())
    }

    /// Puts every piece back where the attempt started, including captured
    /// ones, and forgets visited cells, animations and the move count.
    pub fn reset_attempt(&mut self) {
        self.pieces = self.initial.iter().cloned().map(Some).collect();
        self.tags.clear();
        self.occupancy = Occupancy::empty();
        for piece in self.initial.iter() {
            self.tags.insert(piece.tag().to_string(), piece.id());
            self.occupancy
                .place(piece.cell(), Occupant::new(piece.id(), piece.side()));
        }
        self.history.clear();
        self.highlight = None;
        self.moves_made = 0;
        debug_assert!(self.is_consistent());
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut PieceState> {
        self.pieces.get_mut(id.index())?.as_mut()
    }

    fn capture(&mut self, id: PieceId) -> Option<PieceState> {
        let captured = self.pieces.get_mut(id.index())?.take()?;
        self.tags.remove(captured.tag());
        self.history.forget(id);
        Some(captured)
    }
}

impl AsRef<GridMask> for Board {
    fn as_ref(&self) -> &GridMask {
        &self.grid
    }
}

impl AsRef<RuleOptions> for Board {
    fn as_ref(&self) -> &RuleOptions {
        &self.rules
    }
}

impl AsRef<Occupancy> for Board {
    fn as_ref(&self) -> &Occupancy {
        &self.occupancy
    }
}

impl AsRef<VisitedHistory> for Board {
    fn as_ref(&self) -> &VisitedHistory {
        &self.history
    }
}

impl Legality for Board {}

impl LegalMoves for Board {}

/// Text diagram: white pieces upper case, black lower case, `.` for an
/// empty enabled cell and a blank for a disabled one.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let cell = Cell::new(x, y);
                let c = match self.piece_at(cell) {
                    Some(piece) if piece.side() == Side::White => piece.capability().symbol(),
                    Some(piece) => piece.capability().symbol().to_ascii_lowercase(),
                    None if self.grid.enabled(cell) => '.',
                    None => ' ',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
