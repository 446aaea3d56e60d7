// Copyright 2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.

//! Things that can go wrong setting up or running a count.

use thiserror::Error;

/// Something about the options, the ballots or a round record is not acceptable.
/// Nothing is counted if one of these is produced.
#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum ValidationError {
    #[error("Options list cannot be empty")]
    EmptyOptions,
    #[error("Options cannot be blank")]
    BlankOption,
    #[error("Duplicate options are not allowed : {0}")]
    DuplicateOption(String),
    #[error("Option already exists : {0}")]
    OptionAlreadyExists(String),
    #[error("Option does not exist : {0}")]
    OptionDoesNotExist(String),
    #[error("Cannot remove {0} as it is the only option")]
    WouldRemoveLastOption(String),
    #[error("Voter id cannot be empty")]
    EmptyVoterId,
    #[error("Voter {voter} has {given} preferences but there are only {max} options")]
    TooManyPreferences{voter:String,given:usize,max:usize},
    #[error("Voter {voter} has no preferences")]
    EmptyBallot{voter:String},
    #[error("Voter {voter} has preference {position} marked {marking}, which is not an option name")]
    NotAnOptionName{voter:String,position:usize,marking:String},
    #[error("Voter {voter} has invalid options : {}",unknown.join(", "))]
    UnknownOptions{voter:String,unknown:Vec<String>},
    #[error("Voter {voter} has duplicate preferences : {}",duplicated.join(", "))]
    DuplicatePreferences{voter:String,duplicated:Vec<String>},
    #[error("Round number must be positive, not {0}")]
    InvalidRoundNumber(usize),
    #[error("Round {0} must have either a winner or some eliminated options, but not both")]
    InconsistentRoundResult(usize),
}

/// Why a count did not produce a winner.
#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum CountError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Every option was eliminated without anyone getting a majority. The round history is kept.
    #[error("All options were eliminated by round {round} without a majority winner")]
    TerminalTie{round:usize},
}
