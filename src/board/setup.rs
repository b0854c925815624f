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

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::cell::Cell;
use super::grid::{CellTable, GridMask};
use super::markers::Marker;
use super::material::{Capability, Side};
use super::rules::RuleOptions;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{tag:?} is placed outside the board at {cell}")]
    OutOfBounds { tag: String, cell: Cell },
    #[error("{tag:?} is placed on disabled cell {cell}")]
    DisabledCell { tag: String, cell: Cell },
    #[error("{tag:?} is placed on {cell}, which already holds {occupant:?}")]
    OccupiedCell {
        tag: String,
        cell: Cell,
        occupant: String,
    },
    #[error("{tag:?} has unknown capability {capability:?}")]
    UnknownCapability { tag: String, capability: String },
    #[error("Piece tag {0:?} is used more than once")]
    DuplicateTag(String),
    #[error("Marker placed outside the board at {0}")]
    MarkerOutOfBounds(Cell),
}

/// One entry of a puzzle's placement list. The capability stays a plain
/// tag until the board is built so that definitions with unknown tags
/// are reported as setup errors rather than parse errors.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlacementSpec {
    pub tag: String,
    pub side: Side,
    pub capability: String,
    pub cell: Cell,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moveable: Option<bool>,
}

impl PlacementSpec {
    pub fn new(tag: impl Into<String>, side: Side, capability: Capability, cell: Cell) -> Self {
        Self {
            tag: tag.into(),
            side,
            capability: capability.to_string(),
            cell,
            moveable: None,
        }
    }

    pub fn moveable(mut self, moveable: bool) -> Self {
        self.moveable = Some(moveable);
        self
    }

    pub fn capability(&self) -> Result<Capability, SetupError> {
        Capability::from_str(&self.capability).map_err(|_| SetupError::UnknownCapability {
            tag: self.tag.clone(),
            capability: self.capability.clone(),
        })
    }
}

/// Everything needed to build a board: the enabled-cell table (indexed
/// `cells[x][y]`), the ordered placements, the rule flags and any cell
/// markers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PuzzleSetup {
    pub cells: CellTable,
    #[serde(default)]
    pub placements: Vec<PlacementSpec>,
    #[serde(default)]
    pub rules: RuleOptions,
    #[serde(default)]
    pub markers: Vec<(Cell, Marker)>,
}

impl PuzzleSetup {
    pub fn new(grid: GridMask) -> Self {
        Self {
            cells: grid.to_table(),
            placements: Vec::new(),
            rules: RuleOptions::default(),
            markers: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_rules(mut self, rules: RuleOptions) -> Self {
        self.rules = rules;
        self
    }

    pub fn place(
        self,
        tag: impl Into<String>,
        side: Side,
        capability: Capability,
        cell: Cell,
    ) -> Self {
        self.push(PlacementSpec::new(tag, side, capability, cell))
    }

    pub fn push(mut self, placement: PlacementSpec) -> Self {
        self.placements.push(placement);
        self
    }

    pub fn mark(mut self, cell: Cell, marker: Marker) -> Self {
        self.markers.push((cell, marker));
        self
    }

    pub fn grid(&self) -> GridMask {
        GridMask::from_table(&self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let setup = PuzzleSetup::new(GridMask::rect(0..=2, 0..=2))
            .place("wn", Side::White, Capability::KnightJump, Cell::new(0, 0))
            .mark(Cell::new(2, 1), Marker::Dot(Side::White));
        assert_eq!(setup.grid().len(), 9);
        assert_eq!(setup.placements.len(), 1);
        assert_eq!(setup.placements[0].capability, "knight-jump");
        assert_eq!(setup.placements[0].capability(), Ok(Capability::KnightJump));
    }
    #[test]
    fn test_from_json() {
        let mut rows = vec!["[false,false,false,false,false,false,false,false]"; 8];
        rows[3] = "[false,true,true,false,false,false,false,false]";
        let json = format!(
            r#"{{
                "cells": [{}],
                "placements": [
                    {{"tag": "bk", "side": "Black", "capability": "single-step-any",
                      "cell": {{"x": 3, "y": 1}}, "moveable": false}}
                ],
                "rules": {{"trace_moves": true}},
                "markers": [[{{"x": 3, "y": 2}}, {{"dot": "White"}}]]
            }}"#,
            rows.join(",")
        );
        let setup = PuzzleSetup::from_json(&json).unwrap();
        assert!(setup.grid().enabled(Cell::new(3, 1)));
        assert!(setup.grid().enabled(Cell::new(3, 2)));
        assert!(!setup.grid().enabled(Cell::new(1, 3)));
        assert_eq!(setup.placements[0].moveable, Some(false));
        assert_eq!(setup.placements[0].capability(), Ok(Capability::SingleStepAny));
        assert!(setup.rules.trace_moves);
        assert_eq!(setup.markers, vec![(Cell::new(3, 2), Marker::Dot(Side::White))]);
    }
    #[test]
    fn test_json_roundtrip() {
        let setup = PuzzleSetup::new(GridMask::full())
            .place("wq", Side::White, Capability::SlidingBoth, Cell::new(4, 7))
            .mark(Cell::new(4, 0), Marker::Highlight);
        let json = setup.to_json().unwrap();
        assert_eq!(PuzzleSetup::from_json(&json).unwrap(), setup);
    }
    #[test]
    fn test_unknown_capability() {
        let mut placement = PlacementSpec::new("x", Side::White, Capability::KnightJump, Cell::new(0, 0));
        placement.capability = "camel-jump".to_string();
        assert_eq!(
            placement.capability(),
            Err(SetupError::UnknownCapability {
                tag: "x".to_string(),
                capability: "camel-jump".to_string()
            })
        );
    }
    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(PuzzleSetup::from_json("{\"cells\": []}").is_err());
    }
}
