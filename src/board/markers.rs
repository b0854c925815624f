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
use std::collections::BTreeMap;

use super::cell::Cell;
use super::material::Side;

/// A visual hint attached to a cell. The engine only stores these; how
/// they look is up to the renderer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    /// A small dot in the given side's colour, typically a goal cell.
    Dot(Side),
    /// The destination of the most recent move.
    Highlight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers {
    cells: BTreeMap<Cell, Vec<Marker>>,
}

impl Markers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, cell: Cell, marker: Marker) {
        let markers = self.cells.entry(cell).or_default();
        if !markers.contains(&marker) {
            markers.push(marker);
        }
    }

    pub fn get(&self, cell: Cell) -> &[Marker] {
        self.cells.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, cell: Cell, marker: Marker) -> bool {
        self.get(cell).contains(&marker)
    }

    /// Every cell carrying `marker`, in cell order.
    pub fn cells_with(&self, marker: Marker) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .filter(move |(_, markers)| markers.contains(&marker))
            .map(|(cell, _)| *cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Marker)> + '_ {
        self.cells
            .iter()
            .flat_map(|(cell, markers)| markers.iter().map(move |marker| (*cell, *marker)))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
