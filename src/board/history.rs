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

use std::collections::HashMap;

use super::cell::{Cell, Mask};
use super::piece::PieceId;

/// The cells one piece has left during the current attempt, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    cells: Vec<Cell>,
    mask: Mask,
}

impl Trail {
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.mask.contains(cell)
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn mask(&self) -> Mask {
        self.mask
    }
    fn push(&mut self, cell: Cell) {
        if !self.mask.contains(cell) {
            self.cells.push(cell);
            self.mask.set(cell);
        }
    }
}

/// Per-piece visited cells, consulted by the trace-moves rule. Trails only
/// grow during an attempt; they are cleared when the attempt restarts and
/// a piece's trail is dropped when the piece is captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedHistory {
    trails: HashMap<PieceId, Trail>,
}

impl VisitedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_visited(&self, id: PieceId, cell: Cell) -> bool {
        self.trails
            .get(&id)
            .map_or(false, |trail| trail.contains(cell))
    }

    pub fn trail(&self, id: PieceId) -> Option<&Trail> {
        self.trails.get(&id)
    }

    pub fn cells(&self, id: PieceId) -> &[Cell] {
        self.trails.get(&id).map(Trail::cells).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    pub(crate) fn record(&mut self, id: PieceId, cell: Cell) {
        self.trails.entry(id).or_default().push(cell);
    }

    pub(crate) fn forget(&mut self, id: PieceId) {
        self.trails.remove(&id);
    }

    pub(crate) fn clear(&mut self) {
        self.trails.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut history = VisitedHistory::new();
        let id = PieceId::new(0);
        history.record(id, Cell::new(1, 1));
        history.record(id, Cell::new(4, 2));
        history.record(id, Cell::new(1, 1));
        assert_eq!(history.cells(id), &[Cell::new(1, 1), Cell::new(4, 2)]);
        assert!(history.has_visited(id, Cell::new(4, 2)));
        assert!(!history.has_visited(id, Cell::new(2, 4)));
    }
    #[test]
    fn test_trails_are_per_piece() {
        let mut history = VisitedHistory::new();
        history.record(PieceId::new(0), Cell::new(3, 3));
        assert!(!history.has_visited(PieceId::new(1), Cell::new(3, 3)));
        assert!(history.cells(PieceId::new(1)).is_empty());
    }
    #[test]
    fn test_forget_and_clear() {
        let mut history = VisitedHistory::new();
        history.record(PieceId::new(0), Cell::new(3, 3));
        history.record(PieceId::new(1), Cell::new(4, 4));
        history.forget(PieceId::new(0));
        assert!(history.trail(PieceId::new(0)).is_none());
        assert!(history.has_visited(PieceId::new(1), Cell::new(4, 4)));
        history.clear();
        assert!(history.is_empty());
    }
}
