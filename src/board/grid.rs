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

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::cell::{Cell, Mask, MaskIter};

/// An 8-by-8 table of enabled flags, indexed `table[x][y]`.
pub type CellTable = [[bool; 8]; 8];

/// The playable shape of a puzzle board. Built once at setup and never
/// mutated afterward; disabled cells can neither host a piece nor be a
/// move destination.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridMask {
    enabled: Mask,
}

impl GridMask {
    pub fn from_table(table: &CellTable) -> Self {
        let mut enabled = Mask::empty();
        for (x, column) in table.iter().enumerate() {
            for (y, &on) in column.iter().enumerate() {
                if on {
                    enabled.set(Cell::new(x as i8, y as i8));
                }
            }
        }
        Self { enabled }
    }

    pub const fn from_mask(enabled: Mask) -> Self {
        Self { enabled }
    }

    pub const fn full() -> Self {
        Self::from_mask(Mask::all())
    }

    /// Enables the rectangle spanned by the two (inclusive) ranges.
    pub fn rect(xs: RangeInclusive<i8>, ys: RangeInclusive<i8>) -> Self {
        let cells = ys.flat_map(|y| xs.clone().map(move |x| Cell::new(x, y)));
        Self::from_mask(Mask::from_cells(cells))
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds()
    }

    #[inline]
    pub fn enabled(&self, cell: Cell) -> bool {
        self.enabled.contains(cell)
    }

    pub fn mask(&self) -> Mask {
        self.enabled
    }

    pub fn cells(&self) -> MaskIter {
        self.enabled.iter()
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn to_table(&self) -> CellTable {
        let mut table = [[false; 8]; 8];
        for cell in self.cells() {
            table[cell.x as usize][cell.y as usize] = true;
        }
        table
    }
}

impl Default for GridMask {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_x_then_y() {
        let mut table = [[false; 8]; 8];
        table[5][1] = true;
        let grid = GridMask::from_table(&table);
        assert!(grid.enabled(Cell::new(5, 1)));
        assert!(!grid.enabled(Cell::new(1, 5)));
        assert_eq!(grid.len(), 1);
    }
    #[test]
    fn test_rect() {
        let grid = GridMask::rect(2..=5, 1..=5);
        assert_eq!(grid.len(), 20);
        assert!(grid.enabled(Cell::new(2, 1)));
        assert!(grid.enabled(Cell::new(5, 5)));
        assert!(!grid.enabled(Cell::new(1, 1)));
        assert!(!grid.enabled(Cell::new(3, 6)));
    }
    #[test]
    fn test_out_of_bounds_never_enabled() {
        let grid = GridMask::full();
        assert!(!grid.in_bounds(Cell::new(-1, 0)));
        assert!(!grid.enabled(Cell::new(-1, 0)));
        assert!(!grid.enabled(Cell::new(0, 8)));
    }
    #[test]
    fn test_table_roundtrip() {
        let grid = GridMask::rect(0..=3, 4..=7);
        assert_eq!(GridMask::from_table(&grid.to_table()), grid);
    }
}
