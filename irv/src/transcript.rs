// Copyright 2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.

//! Store the history of a count

use serde::Serialize;
use crate::round_result::RoundResult;
use crate::tie_resolution::EliminationStrategy;

#[derive(Debug,Clone,PartialEq,Eq,Serialize)]
pub enum CountOutcome {
    Winner(String),
    /// every option was eliminated without anyone getting a majority.
    TerminalTie,
}

/// Everything needed to see how a count went.
#[derive(Debug,Clone,PartialEq,Eq,Serialize)]
pub struct CountTranscript {
    pub options : Vec<String>,
    pub strategy : EliminationStrategy,
    pub rounds : Vec<RoundResult>,
    pub outcome : CountOutcome,
}

impl CountTranscript {
    pub fn winner(&self) -> Option<&str> {
        match &self.outcome {
            CountOutcome::Winner(winner) => Some(winner),
            CountOutcome::TerminalTie => None,
        }
    }

    /// All options eliminated, in the order they were eliminated.
    pub fn elimination_order(&self) -> Vec<&str> {
        self.rounds.iter().flat_map(|r|r.eliminated().iter().map(|s|s.as_str())).collect()
    }
}
