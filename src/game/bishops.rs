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

use crate::{Board, Capability, Cell, GameOption, GridMask, Marker, PuzzleSetup, RuleOptions, Side};

use super::Puzzle;

/// Four white bishops start on the bottom row of a 4x5 board and four
/// black bishops on the top row. Swap them: every bishop has to end on a
/// dot of its own colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct BishopSwap;

impl BishopSwap {
    const COLUMNS: [i8; 4] = [2, 3, 4, 5];
    const WHITE_ROW: i8 = 1;
    const BLACK_ROW: i8 = 5;
}

impl Puzzle for BishopSwap {
    fn name(&self) -> &str {
        "Bishop Swap"
    }

    fn setup(&self) -> PuzzleSetup {
        let mut setup = PuzzleSetup::new(GridMask::rect(2..=5, Self::WHITE_ROW..=Self::BLACK_ROW))
            .with_rules(RuleOptions::new([GameOption::UnlimitedMoves]));
        for (n, x) in Self::COLUMNS.into_iter().enumerate() {
            setup = setup.place(
                format!("wb{}", n + 1),
                Side::White,
                Capability::SlidingDiagonal,
                Cell::new(x, Self::WHITE_ROW),
            );
        }
        for (n, x) in Self::COLUMNS.into_iter().enumerate() {
            setup = setup.place(
                format!("bb{}", n + 1),
                Side::Black,
                Capability::SlidingDiagonal,
                Cell::new(x, Self::BLACK_ROW),
            );
        }
        for x in Self::COLUMNS {
            setup = setup
                .mark(Cell::new(x, Self::WHITE_ROW), Marker::Dot(Side::Black))
                .mark(Cell::new(x, Self::BLACK_ROW), Marker::Dot(Side::White));
        }
        setup
    }

    fn objective(&self) -> String {
        "Swap the bishops: move every white bishop onto a white dot and every black bishop onto a black dot.".to_string()
    }

    fn has_won(&self, board: &Board) -> bool {
        !board.is_empty()
            && board
                .pieces()
                .all(|piece| board.markers().has(piece.cell(), Marker::Dot(piece.side())))
    }
}
