// Copyright 2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! Information about a vote. That is, what a voter wrote in each preference position.
//! This may or may not be formal.

use std::collections::{BTreeMap, HashSet};
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Deserializer};
use crate::errors::ValidationError;
use crate::options::OptionList;

/// What is written in one preference position of a ballot. This may or may not be an option name.
#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub enum Preference {
    Named(String),
    /// Nothing there (e.g. null in a JSON file, an empty field in a CSV file)
    Blank,
    /// Something that is not a name at all, such as a number. The string is how it was written.
    Other(String),
}

impl Preference {
    /// The option name, if this is one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Preference::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for Preference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Preference::Named(name) => f.write_str(name),
            Preference::Blank => f.write_str("<blank>"),
            Preference::Other(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Preference {
    fn from(value: &str) -> Self { Preference::Named(value.to_string()) }
}

impl From<String> for Preference {
    fn from(value: String) -> Self { Preference::Named(value) }
}

impl <'de> Deserialize<'de> for Preference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(name) => Preference::Named(name),
            serde_json::Value::Null => Preference::Blank,
            other => Preference::Other(other.to_string()),
        })
    }
}

/// The ballots submitted to a count, voter id -> preferences, first choice first.
pub type Ballots = BTreeMap<String,Vec<Preference>>;

/// Ballots that have passed validation, voter id -> remaining option names.
/// During a count eliminated options are taken off these, so some may become empty (exhausted).
pub type RankedBallots = BTreeMap<String,Vec<String>>;

/// Convenience for making ballots out of lists of names.
/// ```
/// use irv::ballot::{ballots_from_names, Preference};
/// let ballots = ballots_from_names([("v1",vec!["A","B"]),("v2",vec!["B"])]);
/// assert_eq!(ballots["v1"],vec![Preference::from("A"),Preference::from("B")]);
/// ```
pub fn ballots_from_names<V,I,P>(ballots:impl IntoIterator<Item=(V,I)>) -> Ballots
    where V:Into<String>, I:IntoIterator<Item=P>, P:Into<String> {
    ballots.into_iter().map(|(voter,preferences)|(voter.into(),preferences.into_iter().map(|p|Preference::Named(p.into())).collect())).collect()
}

/// Check a single ballot. Problems are checked for in the following order, and the first found is returned:
/// * empty voter id
/// * more preferences than there are options
/// * no preferences
/// * a preference that is not a name at all
/// * names that are not options
/// * the same name more than once
pub fn validate_ballot(voter:&str,preferences:&[Preference],options:&OptionList) -> Result<(),ValidationError> {
    if voter.trim().is_empty() { return Err(ValidationError::EmptyVoterId); }
    if preferences.len()>options.len() {
        return Err(ValidationError::TooManyPreferences{voter:voter.to_string(),given:preferences.len(),max:options.len()});
    }
    if preferences.is_empty() { return Err(ValidationError::EmptyBallot{voter:voter.to_string()}); }
    let mut names : Vec<&str> = Vec::with_capacity(preferences.len());
    for (i,preference) in preferences.iter().enumerate() {
        match preference.as_name() {
            Some(name) => names.push(name),
            None => return Err(ValidationError::NotAnOptionName{voter:voter.to_string(),position:i+1,marking:preference.to_string()}),
        }
    }
    let unknown = distinct(names.iter().copied().filter(|name|!options.contains(name)));
    if !unknown.is_empty() { return Err(ValidationError::UnknownOptions{voter:voter.to_string(),unknown}); }
    let mut seen = HashSet::new();
    let duplicated = distinct(names.iter().copied().filter(|name|!seen.insert(*name)));
    if !duplicated.is_empty() { return Err(ValidationError::DuplicatePreferences{voter:voter.to_string(),duplicated}); }
    Ok(())
}

/// unique values in the order first seen.
fn distinct<'a>(names:impl Iterator<Item=&'a str>) -> Vec<String> {
    let mut res : Vec<String> = vec![];
    for name in names {
        if !res.iter().any(|r|r==name) { res.push(name.to_string()); }
    }
    res
}

/// Check all ballots, stopping at the first problem.
pub fn validate_ballots(ballots:&Ballots,options:&OptionList) -> Result<(),ValidationError> {
    for (voter,preferences) in ballots {
        validate_ballot(voter,preferences,options)?;
    }
    Ok(())
}

/// Get just the names out of ballots. Only meaningful after [validate_ballots] has passed; anything that is not a name is dropped.
pub fn to_ranked(ballots:&Ballots) -> RankedBallots {
    ballots.iter().map(|(voter,preferences)|(voter.clone(),preferences.iter().filter_map(|p|p.as_name().map(|s|s.to_string())).collect())).collect()
}

/// Take an option off every ballot that mentions it.
pub fn strip_option(ballots:&mut RankedBallots,option:&str) {
    for preferences in ballots.values_mut() {
        preferences.retain(|p|p!=option);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> OptionList { OptionList::new(["A","B","C"]).unwrap() }

    #[test]
    fn test_deserialize_markings() {
        let prefs : Vec<Preference> = serde_json::from_str(r#"["A",null,3,{"x":1}]"#).unwrap();
        assert_eq!(prefs,vec![Preference::from("A"),Preference::Blank,Preference::Other("3".to_string()),Preference::Other(r#"{"x":1}"#.to_string())]);
    }

    #[test]
    fn test_partial_ballot_ok() {
        assert_eq!(validate_ballot("v1",&[Preference::from("B")],&options()),Ok(()));
    }

    #[test]
    fn test_order_of_checks() {
        // too many preferences is reported ahead of the unknown and duplicated options.
        let prefs : Vec<Preference> = ["A","A","D","E"].iter().map(|&s|s.into()).collect();
        assert_eq!(validate_ballot("v1",&prefs,&options()),Err(ValidationError::TooManyPreferences{voter:"v1".to_string(),given:4,max:3}));
        assert_eq!(validate_ballot(" ",&prefs,&options()),Err(ValidationError::EmptyVoterId));
        // non-name before unknown
        let prefs = vec![Preference::from("D"),Preference::Blank];
        assert_eq!(validate_ballot("v1",&prefs,&options()),Err(ValidationError::NotAnOptionName{voter:"v1".to_string(),position:2,marking:"<blank>".to_string()}));
        // unknown before duplicate
        let prefs : Vec<Preference> = ["A","A","D"].iter().map(|&s|s.into()).collect();
        assert_eq!(validate_ballot("v1",&prefs,&options()),Err(ValidationError::UnknownOptions{voter:"v1".to_string(),unknown:vec!["D".to_string()]}));
        let prefs : Vec<Preference> = ["B","A","B"].iter().map(|&s|s.into()).collect();
        assert_eq!(validate_ballot("v1",&prefs,&options()),Err(ValidationError::DuplicatePreferences{voter:"v1".to_string(),duplicated:vec!["B".to_string()]}));
    }

    #[test]
    fn test_strip() {
        let mut ranked = to_ranked(&ballots_from_names([("v1",vec!["A","B"]),("v2",vec!["C"])]));
        strip_option(&mut ranked,"A");
        assert_eq!(ranked["v1"],vec!["B".to_string()]);
        assert_eq!(ranked["v2"],vec!["C".to_string()]);
    }
}
