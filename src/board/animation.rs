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
use std::ops::{Add, AddAssign};

use super::cell::Cell;

/// Sub-cell units per cell.
pub const FIXED_POINT_SCALE: i32 = 100;

/// A position in fixed point, `FIXED_POINT_SCALE` units per cell.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayPosition {
    pub x: i32,
    pub y: i32,
}

impl DisplayPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell this position sits exactly on, if any.
    pub fn to_cell(&self) -> Option<Cell> {
        if self.x % FIXED_POINT_SCALE != 0 || self.y % FIXED_POINT_SCALE != 0 {
            return None;
        }
        let x = i8::try_from(self.x / FIXED_POINT_SCALE).ok()?;
        let y = i8::try_from(self.y / FIXED_POINT_SCALE).ok()?;
        let cell = Cell::new(x, y);
        cell.in_bounds().then_some(cell)
    }
}

impl From<Cell> for DisplayPosition {
    fn from(cell: Cell) -> Self {
        Self::new(
            cell.x as i32 * FIXED_POINT_SCALE,
            cell.y as i32 * FIXED_POINT_SCALE,
        )
    }
}

impl Add for DisplayPosition {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for DisplayPosition {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl fmt::Display for DisplayPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}.{:02},{}.{:02})",
            self.x / FIXED_POINT_SCALE,
            (self.x % FIXED_POINT_SCALE).abs(),
            self.y / FIXED_POINT_SCALE,
            (self.y % FIXED_POINT_SCALE).abs()
        )
    }
}

/// Interpolation state for a piece travelling between two cells.
///
/// The per-frame step is truncated, so mid-flight positions may lag the
/// ideal line by up to a unit per frame. The frame that brings
/// `frames_remaining` to zero lands exactly on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimationState {
    frames_remaining: u32,
    step: DisplayPosition,
    current: DisplayPosition,
    target: DisplayPosition,
}

impl AnimationState {
    pub fn settled() -> Self {
        Self::default()
    }

    /// Starts a transition from `from` to `to` spread over `frames` ticks.
    /// Zero frames means no animation at all.
    pub fn arm(from: Cell, to: Cell, frames: u32) -> Self {
        if frames == 0 {
            return Self::settled();
        }
        let start = DisplayPosition::from(from);
        let target = DisplayPosition::from(to);
        let frames_i = i32::try_from(frames).unwrap_or(i32::MAX);
        Self {
            frames_remaining: frames,
            step: DisplayPosition::new(
                (target.x - start.x) / frames_i,
                (target.y - start.y) / frames_i,
            ),
            current: start,
            target,
        }
    }

    /// Advances one frame. Returns true when this frame finished the
    /// animation.
    pub fn advance(&mut self) -> bool {
        if self.frames_remaining == 0 {
            return false;
        }
        self.current += self.step;
        self.frames_remaining -= 1;
        if self.frames_remaining == 0 {
            self.current = self.target;
            return true;
        }
        false
    }

    /// Abandons the animation; the piece is shown on its cell again.
    pub fn snap(&mut self) {
        *self = Self::settled();
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.frames_remaining > 0
    }

    #[inline]
    pub fn frames_remaining(&self) -> u32 {
        self.frames_remaining
    }

    #[inline]
    pub fn step(&self) -> DisplayPosition {
        self.step
    }

    /// The interpolated position while animating.
    pub fn current(&self) -> Option<DisplayPosition> {
        self.is_active().then_some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_fixed_point() {
        let pos = DisplayPosition::from(Cell::new(3, 5));
        assert_eq!(pos, DisplayPosition::new(300, 500));
        assert_eq!(pos.to_cell(), Some(Cell::new(3, 5)));
        assert_eq!(DisplayPosition::new(333, 500).to_cell(), None);
    }
    #[test]
    fn test_arm_computes_truncated_step() {
        let anim = AnimationState::arm(Cell::new(0, 0), Cell::new(1, 2), 3);
        assert_eq!(anim.frames_remaining(), 3);
        assert_eq!(anim.step(), DisplayPosition::new(33, 66));
        assert_eq!(anim.current(), Some(DisplayPosition::new(0, 0)));
    }
    #[test]
    fn test_final_frame_is_exact() {
        let mut anim = AnimationState::arm(Cell::new(0, 0), Cell::new(1, 2), 3);
        assert!(!anim.advance());
        assert_eq!(anim.current(), Some(DisplayPosition::new(33, 66)));
        assert!(!anim.advance());
        assert_eq!(anim.current(), Some(DisplayPosition::new(66, 132)));
        assert!(anim.advance());
        assert!(!anim.is_active());
        assert_eq!(anim.current, DisplayPosition::new(100, 200));
    }
    #[test]
    fn test_negative_direction() {
        let mut anim = AnimationState::arm(Cell::new(5, 5), Cell::new(2, 5), 7);
        assert_eq!(anim.step(), DisplayPosition::new(-42, 0));
        for _ in 0..7 {
            anim.advance();
        }
        assert_eq!(anim.current, DisplayPosition::from(Cell::new(2, 5)));
    }
    #[test]
    fn test_frames_never_go_negative() {
        let mut anim = AnimationState::arm(Cell::new(0, 0), Cell::new(0, 1), 1);
        assert!(anim.advance());
        assert!(!anim.advance());
        assert_eq!(anim.frames_remaining(), 0);
    }
    #[test]
    fn test_zero_frames_is_settled() {
        let anim = AnimationState::arm(Cell::new(0, 0), Cell::new(4, 4), 0);
        assert!(!anim.is_active());
        assert_eq!(anim.current(), None);
    }
    #[test]
    fn test_snap() {
        let mut anim = AnimationState::arm(Cell::new(0, 0), Cell::new(4, 4), 10);
        anim.advance();
        anim.snap();
        assert!(!anim.is_active());
    }
    #[test]
    fn test_far_positions_are_not_cells() {
        assert_eq!(DisplayPosition::new(25600, 0).to_cell(), None);
        assert_eq!(DisplayPosition::new(0, -25600).to_cell(), None);
        assert_eq!(DisplayPosition::new(800, 0).to_cell(), None);
    }
    #[test]
    fn test_huge_frame_count_never_reverses() {
        let mut anim = AnimationState::arm(Cell::new(0, 0), Cell::new(1, 0), u32::MAX);
        assert_eq!(anim.step(), DisplayPosition::new(0, 0));
        assert!(!anim.advance());
        assert_eq!(anim.current(), Some(DisplayPosition::new(0, 0)));
        assert_eq!(anim.frames_remaining(), u32::MAX - 1);
    }
    #[test]
    fn test_display_position_format() {
        assert_eq!(DisplayPosition::new(342, 7).to_string(), "(3.42,0.07)");
    }
}
