// Copyright 2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.

//! The record of a single round of counting.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use serde::Serialize;
use crate::errors::ValidationError;

/// What happened in one round. Either someone won, or some options were eliminated.
///
/// Immutable once made; the vote counts are owned by the result so cannot be changed by whoever supplied them.
#[derive(Debug,Clone,PartialEq,Eq,Serialize)]
pub struct RoundResult {
    /// 1 is the first round.
    round_number : usize,
    /// first preference tally of every option, including eliminated options (which have 0).
    vote_counts : BTreeMap<String,usize>,
    /// options eliminated at the end of this round, in order. Empty if there is a winner.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    eliminated : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner : Option<String>,
}

impl RoundResult {
    pub fn new(round_number:usize,vote_counts:BTreeMap<String,usize>,eliminated:Vec<String>,winner:Option<String>) -> Result<Self,ValidationError> {
        if round_number==0 { return Err(ValidationError::InvalidRoundNumber(round_number)); }
        if eliminated.is_empty()==winner.is_none() { return Err(ValidationError::InconsistentRoundResult(round_number)); }
        Ok(RoundResult{round_number,vote_counts,eliminated,winner})
    }

    pub fn round_number(&self) -> usize { self.round_number }
    pub fn vote_counts(&self) -> &BTreeMap<String,usize> { &self.vote_counts }
    /// The tally for a given option, 0 if not mentioned.
    pub fn votes_for(&self,option:&str) -> usize { self.vote_counts.get(option).copied().unwrap_or(0) }
    /// The number of ballots that counted for someone this round.
    pub fn total_votes(&self) -> usize { self.vote_counts.values().sum() }
    pub fn eliminated(&self) -> &[String] { &self.eliminated }
    pub fn winner(&self) -> Option<&str> { self.winner.as_deref() }
}

impl Display for RoundResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"Round {} :",self.round_number)?;
        for (option,votes) in &self.vote_counts { write!(f," {}={}",option,votes)?; }
        match &self.winner {
            Some(winner) => write!(f," ; winner {}",winner),
            None => write!(f," ; eliminated {}",self.eliminated.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs:&[(&str,usize)]) -> BTreeMap<String,usize> { pairs.iter().map(|&(o,n)|(o.to_string(),n)).collect() }

    #[test]
    fn test_initialization() {
        let vote_counts = counts(&[("Option A",10),("Option B",5)]);
        let result = RoundResult::new(1,vote_counts.clone(),vec!["Option B".to_string()],None).unwrap();
        assert_eq!(result.round_number(),1);
        assert_eq!(result.vote_counts(),&vote_counts);
        assert_eq!(result.eliminated(),&["Option B".to_string()]);
        assert_eq!(result.winner(),None);
        assert_eq!(result.total_votes(),15);
        assert_eq!(result.votes_for("Option C"),0);
    }

    #[test]
    fn test_equality() {
        let result1 = RoundResult::new(1,counts(&[("A",10),("B",5)]),vec!["B".to_string()],None).unwrap();
        let result2 = RoundResult::new(1,counts(&[("B",5),("A",10)]),vec!["B".to_string()],None).unwrap();
        let result3 = RoundResult::new(1,counts(&[("A",10),("B",6)]),vec!["B".to_string()],None).unwrap();
        assert_eq!(result1,result2);
        assert_ne!(result1,result3);
    }

    #[test]
    fn test_vote_counts_not_shared_with_caller() {
        let mut vote_counts = counts(&[("Option A",10),("Option B",5)]);
        let result = RoundResult::new(1,vote_counts.clone(),vec![],Some("Option A".to_string())).unwrap();
        vote_counts.insert("Option A".to_string(),20);
        assert_eq!(result.votes_for("Option A"),10);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(RoundResult::new(0,counts(&[("A",10)]),vec![],Some("A".to_string())),Err(ValidationError::InvalidRoundNumber(0)));
        assert_eq!(RoundResult::new(2,counts(&[("A",10)]),vec![],None),Err(ValidationError::InconsistentRoundResult(2)));
        assert_eq!(RoundResult::new(2,counts(&[("A",10)]),vec!["A".to_string()],Some("A".to_string())),Err(ValidationError::InconsistentRoundResult(2)));
    }

    #[test]
    fn test_display() {
        let result = RoundResult::new(3,counts(&[("A",2),("B",1)]),vec!["B".to_string()],None).unwrap();
        assert_eq!(result.to_string(),"Round 3 : A=2 B=1 ; eliminated B");
    }
}
