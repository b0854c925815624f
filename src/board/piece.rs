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
use std::fmt;

use super::animation::{AnimationState, DisplayPosition};
use super::cell::Cell;
use super::material::{Capability, Side};

/// Stable handle for a piece within one board: its position in the
/// placement list. Ids are never reused, even after a capture.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(usize);

impl PieceId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A piece on the board. Only the owning `Board` changes its cell or
/// animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceState {
    id: PieceId,
    tag: String,
    side: Side,
    capability: Capability,
    cell: Cell,
    moveable: bool,
    animation: AnimationState,
}

impl PieceState {
    pub(crate) fn new(
        id: PieceId,
        tag: impl Into<String>,
        side: Side,
        capability: Capability,
        cell: Cell,
        moveable: bool,
    ) -> Self {
        Self {
            id,
            tag: tag.into(),
            side,
            capability,
            cell,
            moveable,
            animation: AnimationState::settled(),
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
    #[inline]
    pub fn capability(&self) -> Capability {
        self.capability
    }
    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }
    #[inline]
    pub fn is_moveable(&self) -> bool {
        self.moveable
    }
    #[inline]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Where the piece should be drawn: the interpolated position while
    /// animating, otherwise exactly its cell.
    pub fn display_position(&self) -> DisplayPosition {
        self.animation
            .current()
            .unwrap_or_else(|| DisplayPosition::from(self.cell))
    }

    pub(crate) fn set_moveable(&mut self, moveable: bool) {
        self.moveable = moveable;
    }

    pub(crate) fn relocate(&mut self, dest: Cell, frames: u32) {
        self.animation = AnimationState::arm(self.cell, dest, frames);
        self.cell = dest;
    }

    pub(crate) fn animation_mut(&mut self) -> &mut AnimationState {
        &mut self.animation
    }
}

impl fmt::Display for PieceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} at {}",
            self.tag,
            self.side,
            self.capability.name(),
            self.cell
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bishop() -> PieceState {
        PieceState::new(
            PieceId::new(0),
            "wb1",
            Side::White,
            Capability::SlidingDiagonal,
            Cell::new(2, 1),
            true,
        )
    }

    #[test]
    fn test_settled_piece_displays_on_cell() {
        let piece = bishop();
        assert!(!piece.is_animating());
        assert_eq!(piece.display_position(), DisplayPosition::new(200, 100));
    }
    #[test]
    fn test_relocate_arms_animation_from_previous_cell() {
        let mut piece = bishop();
        piece.relocate(Cell::new(4, 3), 4);
        assert_eq!(piece.cell(), Cell::new(4, 3));
        assert!(piece.is_animating());
        assert_eq!(piece.display_position(), DisplayPosition::new(200, 100));
        assert_eq!(piece.animation().step(), DisplayPosition::new(50, 50));
    }
    #[test]
    fn test_display() {
        assert_eq!(bishop().to_string(), "wb1 White Bishop at (2,1)");
    }
}
