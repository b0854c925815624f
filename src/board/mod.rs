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

//! Puzzle board with customizable shape and movement rules
//!
//! A _board_ holds the state of one puzzle attempt: which cells are
//! playable, which pieces stand where, which rule flags are on and
//! where each piece is currently drawn. The following features are
//! supported:
//!
//! [x] Arbitrary board shapes (any subset of the 8x8 grid)
//! [x] Sliding, jumping and single-step movement patterns
//! [x] Optional captures ("overtaking")
//! [x] Optional no-revisit rule ("trace moves")
//! [x] Frame-based move animation with exact landing
//! [x] Cell markers (target dots, last-move highlight)
//! [x] Puzzle definitions in JSON
//! [ ] Undo of single moves (only a full reset is supported)
//!
//! Some of the key abstractions include:
//!
//! * A `Cell` is an (x, y) coordinate on the 8-by-8 grid, with `x`
//!   counting columns from the left and `y` counting rows from the
//!   top. An `Offset` is the difference between two cells and a
//!   `Direction` is one of the eight unit offsets.
//!
//! * A `Mask` is a 64-bit (u64) value in which each bit maps to a
//!   cell on the grid. Masks are used for the enabled-cell shape of
//!   a board (`GridMask`), for occupied cells and for visited cells.
//!   Masks can be combined using bitwise `|`, `|=`, `&`, `&=` and `!`.
//!
//! * A `Capability` names how a piece moves: sliding along straight
//!   or diagonal rays, jumping like a knight, stepping one cell in a
//!   fixed set of directions, or not moving at all. Each capability
//!   maps to a movement `Pattern`. `Side` is either `White` or `Black`.
//!
//! * `Legality` and `LegalMoves` are traits over `AsRef` views of the
//!   board state. `Legality` decides whether a single candidate cell
//!   is open, a capture or blocked. `LegalMoves` walks a piece's
//!   pattern and collects `Destinations` in generation order.
//!
//! * `PuzzleSetup` describes a puzzle: the enabled-cell table, the
//!   ordered piece placements, the `RuleOptions` and any markers.
//!   It can be built in code or read from JSON.
//!
//! * `Board` is built from a `PuzzleSetup` and is the only owner of
//!   piece state. Pieces are addressed by their tag. `move_piece`
//!   validates and applies a move (updating the cell at once and
//!   starting an animation), `tick` advances animations by one frame
//!   and `reset_attempt` restores the starting placement.
//!

mod animation;
mod cell;
mod context;
mod grid;
mod history;
mod legality;
mod markers;
mod material;
mod moves;
mod occupancy;
mod piece;
mod rules;
mod setup;

pub use animation::*;
pub use cell::*;
pub use context::*;
pub use grid::*;
pub use history::*;
pub use legality::*;
pub use markers::*;
pub use material::*;
pub use moves::*;
pub use occupancy::*;
pub use piece::*;
pub use rules::*;
pub use setup::*;
