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
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Not};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Side {
    White,
    Black,
}

use Side::{Black, White};

impl Side {
    pub const fn to_index(&self) -> usize {
        *self as usize
    }
}

impl Not for Side {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            White => Black,
            Black => White,
        }
    }
}

/// How a piece moves. Each capability maps to one movement pattern
/// (see `moves::pattern`). Capability tags in puzzle definitions use the
/// kebab-case names, e.g. `"sliding-diagonal"` or `"knight-jump"`.
#[derive(
    Debug, Serialize, Deserialize, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Capability {
    SlidingOrthogonal,
    SlidingDiagonal,
    SlidingBoth,
    KnightJump,
    SingleStepOrthogonal,
    SingleStepDiagonal,
    SingleStepVertical,
    SingleStepHorizontal,
    SingleStepAny,
    Immovable,
}

use Capability::*;

impl Capability {
    /// The conventional name of a piece with this capability.
    pub fn name(&self) -> &'static str {
        match self {
            SlidingOrthogonal => "Rook",
            SlidingDiagonal => "Bishop",
            SlidingBoth => "Queen",
            KnightJump => "Knight",
            SingleStepOrthogonal => "Wazir",
            SingleStepDiagonal => "Ferz",
            SingleStepVertical => "Climber",
            SingleStepHorizontal => "Crab",
            SingleStepAny => "King",
            Immovable => "Block",
        }
    }
    /// Single-letter symbol used in text diagrams.
    pub fn symbol(&self) -> char {
        match self {
            SlidingOrthogonal => 'R',
            SlidingDiagonal => 'B',
            SlidingBoth => 'Q',
            KnightJump => 'N',
            SingleStepOrthogonal => 'W',
            SingleStepDiagonal => 'F',
            SingleStepVertical => 'V',
            SingleStepHorizontal => 'H',
            SingleStepAny => 'K',
            Immovable => 'X',
        }
    }
    pub fn is_sliding(&self) -> bool {
        matches!(*self, SlidingOrthogonal | SlidingDiagonal | SlidingBoth)
    }
    pub fn is_immovable(&self) -> bool {
        matches!(*self, Immovable)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pair<T>((T, T));

impl<T> Pair<T> {
    pub const fn new(white: T, black: T) -> Self {
        Self((white, black))
    }
}

impl<T> Pair<T> {
    pub fn white(&self) -> &T {
        &self.0 .0
    }
    pub fn white_mut(&mut self) -> &mut T {
        &mut self.0 .0
    }
    pub fn black(&self) -> &T {
        &self.0 .1
    }
    pub fn black_mut(&mut self) -> &mut T {
        &mut self.0 .1
    }
}

impl<T: Hash> Hash for Pair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.white().hash(state);
        self.black().hash(state);
    }
}

impl<T> Index<Side> for Pair<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: Side) -> &Self::Output {
        match index {
            White => self.white(),
            Black => self.black(),
        }
    }
}

impl<T> IndexMut<Side> for Pair<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        match index {
            White => self.white_mut(),
            Black => self.black_mut(),
        }
    }
}
