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
use strum_macros::{Display, EnumIter};

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum GameOption {
    /// No cap on the total number of moves in an attempt.
    UnlimitedMoves,
    /// A piece may not re-enter a cell it has occupied during the attempt.
    TraceMoves,
    /// A piece may move onto a cell held by an opposing piece, capturing it.
    CanOvertake,
}

use GameOption::*;

/// Rule switches for a puzzle. Fixed at setup and read-only during play.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(default)]
pub struct RuleOptions {
    pub unlimited_moves: bool,
    pub trace_moves: bool,
    pub can_overtake: bool,
}

impl RuleOptions {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = GameOption>,
    {
        options.into_iter().fold(Self::default(), Self::with)
    }

    pub fn with(mut self, option: GameOption) -> Self {
        match option {
            UnlimitedMoves => self.unlimited_moves = true,
            TraceMoves => self.trace_moves = true,
            CanOvertake => self.can_overtake = true,
        }
        self
    }

    #[inline]
    pub fn has(&self, option: GameOption) -> bool {
        match option {
            UnlimitedMoves => self.unlimited_moves,
            TraceMoves => self.trace_moves,
            CanOvertake => self.can_overtake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_has_no_options() {
        let rules = RuleOptions::default();
        assert!(GameOption::iter().all(|option| !rules.has(option)));
    }
    #[test]
    fn test_options_are_independent() {
        let rules = RuleOptions::new([TraceMoves]);
        assert!(rules.has(TraceMoves));
        assert!(!rules.has(CanOvertake));
        assert!(!rules.has(UnlimitedMoves));
        let rules = rules.with(CanOvertake);
        assert!(rules.has(TraceMoves) && rules.has(CanOvertake));
    }
    #[test]
    fn test_missing_flags_default_to_off() {
        let rules: RuleOptions = serde_json::from_str(r#"{"can_overtake": true}"#).unwrap();
        assert_eq!(rules, RuleOptions::new([CanOvertake]));
    }
}
