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

use super::cell::{Cell, Mask};
use super::material::{Pair, Side};
use super::piece::PieceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub id: PieceId,
    pub side: Side,
}

impl Occupant {
    pub const fn new(id: PieceId, side: Side) -> Self {
        Self { id, side }
    }
}

/// Which piece stands on each cell. Derived from the pieces' cells and
/// kept in step with them by `Board`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    cells: [Option<Occupant>; 64],
    sides: Pair<Mask>,
}

impl Occupancy {
    pub fn empty() -> Self {
        Self {
            cells: [None; 64],
            sides: Pair::default(),
        }
    }

    /// The occupant of `cell`; `None` for empty or out-of-range cells.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Occupant> {
        cell.index().and_then(|index| self.cells[index])
    }

    #[inline]
    pub fn occupied(&self) -> Mask {
        *self.sides.white() | *self.sides.black()
    }

    #[inline]
    pub fn occupied_by(&self, side: Side) -> Mask {
        self.sides[side]
    }

    pub fn len(&self) -> usize {
        self.occupied().len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Occupant)> + '_ {
        self.occupied()
            .iter()
            .filter_map(move |cell| self.get(cell).map(|occupant| (cell, occupant)))
    }

    /// Puts `occupant` on `cell`, returning whoever stood there before.
    pub(crate) fn place(&mut self, cell: Cell, occupant: Occupant) -> Option<Occupant> {
        debug_assert!(cell.in_bounds());
        let index = cell.index()?;
        let replaced = self.remove(cell);
        self.cells[index] = Some(occupant);
        self.sides[occupant.side] |= cell;
        replaced
    }

    pub(crate) fn remove(&mut self, cell: Cell) -> Option<Occupant> {
        let index = cell.index()?;
        let occupant = self.cells[index].take()?;
        self.sides[occupant.side].reset(cell);
        Some(occupant)
    }
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::empty()
    }
}
