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
#[cfg(feature = "random")]
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

use crate::{Board, Cell, MoveOutcome, PuzzleSetup};

mod bishops;

pub use bishops::*;

/// A puzzle variant: how the board starts, what the player is asked to
/// do and when they have done it.
pub trait Puzzle {
    fn name(&self) -> &str;
    fn setup(&self) -> PuzzleSetup;
    fn objective(&self) -> String;
    fn has_won(&self, board: &Board) -> bool;
    /// Only enforced when the unlimited-moves rule is off.
    fn move_limit(&self) -> Option<usize> {
        None
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

impl AttemptId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
    #[cfg(feature = "random")]
    pub fn random() -> Self {
        Self(thread_rng().gen())
    }
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptStatus {
    InProgress,
    Solved,
    OutOfMoves,
    Abandoned,
}

impl AttemptStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(*self, AttemptStatus::InProgress)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptError {
    #[error("Attempt is already over ({0})")]
    Finished(AttemptStatus),
    #[error("Previous move is still animating")]
    Animating,
}

/// Drives one puzzle from the host's side: forwards moves and frame ticks
/// to the board and decides when the attempt is over.
///
/// The win check runs only once the board has settled after a move, so a
/// piece is never judged while it is still being drawn in transit.
pub struct Attempt<P> {
    id: AttemptId,
    puzzle: P,
    board: Board,
    status: AttemptStatus,
    awaiting_check: bool,
}

impl<P: Puzzle> Attempt<P> {
    #[cfg(feature = "random")]
    pub fn start(puzzle: P) -> Result<Self> {
        Self::with_id(AttemptId::random(), puzzle)
    }

    pub fn with_id(id: AttemptId, puzzle: P) -> Result<Self> {
        let board = Board::new(&puzzle.setup())?;
        Ok(Self {
            id,
            puzzle,
            board,
            status: AttemptStatus::InProgress,
            awaiting_check: false,
        })
    }

    #[inline]
    pub fn id(&self) -> AttemptId {
        self.id
    }
    #[inline]
    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn status(&self) -> AttemptStatus {
        self.status
    }
    pub fn objective(&self) -> String {
        self.puzzle.objective()
    }

    /// Moves left before the limit, if one applies to this attempt.
    pub fn remaining_moves(&self) -> Option<usize> {
        if self.board.rules().unlimited_moves {
            return None;
        }
        let limit = self.puzzle.move_limit()?;
        Some(limit.saturating_sub(self.board.moves_made()))
    }

    pub fn submit_move(&mut self, tag: &str, dest: Cell, frames: u32) -> Result<MoveOutcome> {
        if self.status.is_finished() {
            return Err(AttemptError::Finished(self.status).into());
        }
        if !self.board.is_settled() {
            return Err(AttemptError::Animating.into());
        }
        let outcome = self.board.move_piece(tag, dest, frames)?;
        self.awaiting_check = true;
        self.evaluate();
        Ok(outcome)
    }

    /// Advances animations by one frame. Returns how many finished.
    pub fn tick(&mut self) -> usize {
        let finished = self.board.tick();
        self.evaluate();
        finished
    }

    /// Starts over from the initial placement, whatever the status.
    pub fn restart(&mut self) {
        self.board.reset_attempt();
        self.status = AttemptStatus::InProgress;
        self.awaiting_check = false;
    }

    pub fn abandon(&mut self) -> Result<()> {
        if self.status.is_finished() {
            return Err(AttemptError::Finished(self.status).into());
        }
        self.board.snap_all();
        self.status = AttemptStatus::Abandoned;
        self.awaiting_check = false;
        Ok(())
    }

    fn evaluate(&mut self) {
        if !self.awaiting_check || self.status.is_finished() || !self.board.is_settled() {
            return;
        }
        self.awaiting_check = false;
        if self.puzzle.has_won(&self.board) {
            self.status = AttemptStatus::Solved;
        } else if self.remaining_moves() == Some(0) {
            self.status = AttemptStatus::OutOfMoves;
        }
    }
}
