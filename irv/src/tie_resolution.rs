// Copyright 2021-2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.

//! What to do when several options are tied for last place.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Serialize,Deserialize};
use crate::random_util::Randomness;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize)]
pub enum EliminationStrategy {
    /// Eliminate all the options tied for last place in the same round.
    Batch,
    /// Choose one of the options tied for last place at random, and eliminate just it.
    #[default]
    Random,
}

impl EliminationStrategy {
    /// Given the options tied for last place (in option list order), decide which are eliminated this round.
    /// ```
    /// use irv::tie_resolution::EliminationStrategy;
    /// use irv::random_util::Randomness;
    /// let tied = vec!["C".to_string(),"D".to_string()];
    /// let mut randomness = Randomness::ReverseDonkeyVote;
    /// assert_eq!(EliminationStrategy::Batch.choose_eliminated(&tied,&mut randomness),tied);
    /// assert_eq!(EliminationStrategy::Random.choose_eliminated(&tied,&mut randomness),vec!["C".to_string()]);
    /// ```
    pub fn choose_eliminated(self,tied_for_last:&[String],randomness:&mut Randomness) -> Vec<String> {
        match self {
            EliminationStrategy::Batch => tied_for_last.to_vec(),
            EliminationStrategy::Random => randomness.choose(tied_for_last).cloned().into_iter().collect(),
        }
    }
}

impl FromStr for EliminationStrategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batch" => Ok(EliminationStrategy::Batch),
            "random" => Ok(EliminationStrategy::Random),
            _ => Err("No such elimination strategy. Use batch or random"),
        }
    }
}

impl Display for EliminationStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EliminationStrategy::Batch => "batch",
            EliminationStrategy::Random => "random",
        };
        f.write_str(s)
    }
}
