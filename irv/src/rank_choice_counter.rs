// Copyright 2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.

//! This is the real IRV algorithm.
//!
//! Each round, every ballot counts for its highest preference that has not yet been eliminated.
//! If some option has more than half of those votes it wins. Otherwise the option(s) with the
//! fewest votes are eliminated, and their ballots go to their next preference.
//!
//! A count takes `&mut self` for its whole duration, so the options cannot change part way
//! through. Concurrent counts need separate counters.

use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};
use crate::ballot::{strip_option, to_ranked, validate_ballots, Ballots, RankedBallots};
use crate::errors::{CountError, ValidationError};
use crate::options::OptionList;
use crate::random_util::Randomness;
use crate::round_result::RoundResult;
use crate::tie_resolution::EliminationStrategy;
use crate::transcript::{CountOutcome, CountTranscript};

/// The main workhorse class that counts votes.
#[derive(Debug)]
pub struct RankChoiceCounter {
    options : OptionList,
    strategy : EliminationStrategy,
    randomness : Randomness,
    /// history of the current (or last) count.
    round_results : Vec<RoundResult>,
    /// options eliminated so far in the current (or last) count. Cleared with round_results.
    eliminated : HashSet<String>,
    /// how the last count ended, None if no count has finished since the options last changed.
    outcome : Option<CountOutcome>,
}

impl RankChoiceCounter {
    /// Make a counter for the given options, which are trimmed. Random decisions come from a generator seeded by the operating system;
    /// use [RankChoiceCounter::with_randomness] for something repeatable.
    pub fn new<S:AsRef<str>>(options:impl IntoIterator<Item=S>,strategy:EliminationStrategy) -> Result<Self,ValidationError> {
        Ok(RankChoiceCounter{
            options : OptionList::new(options)?,
            strategy,
            randomness : Randomness::default(),
            round_results : vec![],
            eliminated : HashSet::new(),
            outcome : None,
        })
    }

    /// Replace the source of random decisions.
    pub fn with_randomness(mut self,randomness:Randomness) -> Self {
        self.randomness=randomness;
        self
    }

    pub fn set_randomness(&mut self,randomness:Randomness) { self.randomness=randomness; }

    pub fn strategy(&self) -> EliminationStrategy { self.strategy }
    pub fn set_strategy(&mut self,strategy:EliminationStrategy) { self.strategy=strategy; }

    /// A copy of the current options, in order.
    pub fn options(&self) -> Vec<String> { self.options.to_vec() }

    /// Replace all the options. On error nothing changes.
    pub fn set_options<S:AsRef<str>>(&mut self,options:impl IntoIterator<Item=S>) -> Result<(),ValidationError> {
        self.options=OptionList::new(options)?;
        self.clear_history();
        Ok(())
    }

    pub fn add_option(&mut self,option:&str) -> Result<(),ValidationError> {
        self.options.add(option)?;
        self.clear_history();
        Ok(())
    }

    pub fn remove_option(&mut self,option:&str) -> Result<(),ValidationError> {
        self.options.remove(option)?;
        self.clear_history();
        Ok(())
    }

    /// Round history no longer means anything once the options it refers to have changed.
    fn clear_history(&mut self) {
        self.round_results.clear();
        self.eliminated.clear();
        self.outcome=None;
    }

    /// A copy of the rounds from the current or last count.
    pub fn round_results(&self) -> Vec<RoundResult> { self.round_results.clone() }

    /// Everything about the last count, if one has finished (with a winner or a terminal tie).
    pub fn transcript(&self) -> Option<CountTranscript> {
        self.outcome.clone().map(|outcome|CountTranscript{
            options : self.options.to_vec(),
            strategy : self.strategy,
            rounds : self.round_results.clone(),
            outcome,
        })
    }

    /// Check every ballot, stopping at the first problem.
    pub fn validate_votes(&self,ballots:&Ballots) -> Result<(),ValidationError> {
        validate_ballots(ballots,&self.options)
    }

    /// Tabulate one round of the given ballots, which should already have options eliminated in prior rounds removed.
    /// The result has either a winner, or the options to eliminate chosen according to the elimination strategy.
    ///
    /// Options already eliminated in this count are not considered for elimination again.
    /// If there are none left to consider, a terminal tie is returned.
    pub fn calculate_round(&mut self,round_number:usize,ballots:&RankedBallots) -> Result<RoundResult,CountError> {
        let mut vote_counts : BTreeMap<String,usize> = BTreeMap::new();
        for first in ballots.values().filter_map(|preferences|preferences.first()) {
            *vote_counts.entry(first.clone()).or_insert(0)+=1;
        }
        for option in self.options.iter() {
            vote_counts.entry(option.clone()).or_insert(0);
        }
        let total : usize = vote_counts.values().sum();
        // strictly more than half the votes counted this round.
        if let Some(winner) = self.options.iter().find(|&option|2*vote_counts[option]>total).cloned() {
            debug!(event = "round", round = round_number, total_votes = total, winner = %winner);
            return Ok(RoundResult::new(round_number,vote_counts,vec![],Some(winner))?);
        }
        let continuing : Vec<&String> = self.options.iter().filter(|&option|!self.eliminated.contains(option)).collect();
        let lowest = continuing.iter().map(|&option|vote_counts[option]).min().ok_or(CountError::TerminalTie{round:round_number})?;
        let tied_for_last : Vec<String> = continuing.into_iter().filter(|&option|vote_counts[option]==lowest).cloned().collect();
        let eliminated = self.strategy.choose_eliminated(&tied_for_last,&mut self.randomness);
        debug!(event = "round", round = round_number, total_votes = total, lowest = lowest, tied = tied_for_last.len(), eliminated = ?eliminated);
        Ok(RoundResult::new(round_number,vote_counts,eliminated,None)?)
    }

    /// Count the ballots, returning the winner. The ballots are not modified.
    ///
    /// All ballots are checked before anything is counted; if any is bad the whole count is rejected and the
    /// history from any previous count is left alone. Otherwise the round history is restarted, and kept
    /// (up to the last round) even if the count ends in a terminal tie.
    pub fn count_votes(&mut self,ballots:&Ballots) -> Result<String,CountError> {
        self.validate_votes(ballots)?;
        self.clear_history();
        let mut working = to_ranked(ballots);
        info!(event = "count_start", ballots = working.len(), options = self.options.len(), strategy = %self.strategy);
        let mut round_number = 1;
        loop {
            let result = self.calculate_round(round_number,&working)?;
            self.round_results.push(result.clone());
            if let Some(winner) = result.winner() {
                info!(event = "count_end", rounds = round_number, winner = %winner);
                self.outcome=Some(CountOutcome::Winner(winner.to_string()));
                return Ok(winner.to_string());
            }
            for option in result.eliminated() {
                self.eliminated.insert(option.clone());
                strip_option(&mut working,option);
            }
            if self.eliminated.len()>=self.options.len() {
                warn!(event = "terminal_tie", round = round_number, "every option eliminated without a majority");
                self.outcome=Some(CountOutcome::TerminalTie);
                return Err(CountError::TerminalTie{round:round_number});
            }
            round_number+=1;
        }
    }
}
