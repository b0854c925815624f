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

use serde::{Deserialize, Serialize};
use std::ops::Index;
use thiserror::Error;

use super::cell::{Cell, Direction, Mask, Offset};
use super::legality::{Legality, Verdict};
use super::material::Capability;
use super::piece::PieceState;

use Capability::*;
use Direction::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("No piece tagged {0:?} on the board")]
    UnknownPiece(String),
    #[error("{dest} is not a legal destination for {tag:?}")]
    IllegalDestination { tag: String, dest: Cell },
}

/// A movement pattern: rays walked until blocked, independent single
/// candidates, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Slide(&'static [Direction]),
    Step(&'static [Offset]),
    Fixed,
}

const ORTHOGONAL_RAYS: [Direction; 4] = [Up, Down, Left, Right];
const DIAGONAL_RAYS: [Direction; 4] = [UpRight, UpLeft, DownRight, DownLeft];
const ALL_RAYS: [Direction; 8] = [
    Up, Down, Left, Right, UpRight, UpLeft, DownRight, DownLeft,
];

const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(1, -2),
    Offset::new(2, -1),
    Offset::new(2, 1),
    Offset::new(1, 2),
    Offset::new(-1, 2),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
    Offset::new(-1, -2),
];
const ORTHOGONAL_STEPS: [Offset; 4] = [
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
];
const DIAGONAL_STEPS: [Offset; 4] = [
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
];
const VERTICAL_STEPS: [Offset; 2] = [Offset::new(0, -1), Offset::new(0, 1)];
const HORIZONTAL_STEPS: [Offset; 2] = [Offset::new(-1, 0), Offset::new(1, 0)];
const ALL_STEPS: [Offset; 8] = [
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
];

/// The movement pattern for a capability. The order of rays and steps is
/// the order destinations are reported in.
pub const fn pattern(capability: Capability) -> Pattern {
    match capability {
        SlidingOrthogonal => Pattern::Slide(&ORTHOGONAL_RAYS),
        SlidingDiagonal => Pattern::Slide(&DIAGONAL_RAYS),
        SlidingBoth => Pattern::Slide(&ALL_RAYS),
        KnightJump => Pattern::Step(&KNIGHT_JUMPS),
        SingleStepOrthogonal => Pattern::Step(&ORTHOGONAL_STEPS),
        SingleStepDiagonal => Pattern::Step(&DIAGONAL_STEPS),
        SingleStepVertical => Pattern::Step(&VERTICAL_STEPS),
        SingleStepHorizontal => Pattern::Step(&HORIZONTAL_STEPS),
        SingleStepAny => Pattern::Step(&ALL_STEPS),
        Immovable => Pattern::Fixed,
    }
}

/// Legal destinations for one piece, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destinations {
    cells: Vec<Cell>,
    mask: Mask,
}

impl Destinations {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&mut self, dest: Cell) {
        if !self.mask.contains(dest) {
            self.mask |= dest;
            self.cells.push(dest);
        }
    }
    #[inline]
    pub fn contains(&self, dest: Cell) -> bool {
        self.mask.contains(dest)
    }
    pub fn mask(&self) -> Mask {
        self.mask
    }
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Index<usize> for Destinations {
    type Output = Cell;
    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Destinations {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

pub trait LegalMoves: Legality {
    fn destinations(&self, piece: &PieceState) -> Destinations {
        match pattern(piece.capability()) {
            Pattern::Slide(rays) => self.sliding_moves(piece, rays),
            Pattern::Step(offsets) => self.step_moves(piece, offsets),
            Pattern::Fixed => Destinations::new(),
        }
    }

    /// Walks each ray outward. A capture ends the ray on the captured cell;
    /// any other blocked cell ends it just before.
    fn sliding_moves(&self, piece: &PieceState, rays: &[Direction]) -> Destinations {
        let mut result = Destinations::new();
        for &direction in rays {
            let mut dest = piece.cell() + direction;
            loop {
                match self.verdict(piece, dest) {
                    Verdict::Open => result.insert(dest),
                    Verdict::Capture => {
                        result.insert(dest);
                        break;
                    }
                    Verdict::Blocked => break,
                }
                dest = dest + direction;
            }
        }
        result
    }

    fn step_moves(&self, piece: &PieceState, offsets: &[Offset]) -> Destinations {
        let mut result = Destinations::new();
        for offset in offsets {
            let dest = piece.cell() + offset;
            if self.is_legal_destination(piece, dest) {
                result.insert(dest);
            }
        }
        result
    }
}
