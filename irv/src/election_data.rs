// Copyright 2021-2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.

//! Reading the options and votes for an election from files.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use crate::ballot::{Ballots, Preference};
use crate::errors::ValidationError;
use crate::rank_choice_counter::RankChoiceCounter;
use crate::tie_resolution::EliminationStrategy;

/// The options and the votes for an election, not yet checked.
///
/// As JSON, this looks like
/// ```json
/// { "options" : ["A","B","C"], "ballots" : { "v1" : ["A","C"], "v2" : ["B"] } }
/// ```
#[derive(Debug,Clone,Deserialize)]
pub struct ElectionData {
    #[serde(default)]
    pub options : Vec<String>,
    pub ballots : Ballots,
}

impl ElectionData {
    /// Load from a .json or .csv file. A .csv file has no options in it, so they must be provided; if provided for a .json file they override those in the file.
    pub fn load(path:&Path,options:Option<Vec<String>>) -> anyhow::Result<Self> {
        let extension = path.extension().map(|e|e.to_string_lossy().to_ascii_lowercase()).unwrap_or_default();
        let mut data = match extension.as_str() {
            "json" => Self::read_json(path)?,
            "csv" => {
                let options = options.clone().ok_or_else(||anyhow!("Options must be specified for a csv file"))?;
                ElectionData{ options, ballots: read_csv_ballots(path)? }
            }
            _ => return Err(anyhow!("Do not know how to read {}; expecting a .json or .csv file",path.display())),
        };
        if let Some(options) = options { data.options=options; }
        Ok(data)
    }

    pub fn read_json(path:&Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(||format!("Could not open {}",path.display()))?;
        serde_json::from_reader(file).with_context(||format!("Could not parse {}",path.display()))
    }

    pub fn num_ballots(&self) -> usize { self.ballots.len() }

    /// Number of ballots that do not rank every option.
    pub fn num_partial_ballots(&self) -> usize {
        self.ballots.values().filter(|prefs|prefs.len()<self.options.len()).count()
    }

    /// Make a counter for these options.
    pub fn make_counter(&self,strategy:EliminationStrategy) -> Result<RankChoiceCounter,ValidationError> {
        RankChoiceCounter::new(&self.options,strategy)
    }

    pub fn print_summary(&self) {
        println!("{} options : {}",self.options.len(),self.options.join(", "));
        println!("{} ballots, {} of which do not rank every option",self.num_ballots(),self.num_partial_ballots());
    }
}

/// Read ballots from a csv file with no header line. Each line is a voter id followed by their preferences in order.
pub fn read_csv_ballots(path:&Path) -> anyhow::Result<Ballots> {
    let file = File::open(path).with_context(||format!("Could not open {}",path.display()))?;
    parse_csv_ballots(file).with_context(||format!("Could not read ballots from {}",path.display()))
}

/// Lines may have different numbers of fields. Trailing empty fields are ignored;
/// an empty field followed by a non-empty one is a blank preference.
pub fn parse_csv_ballots<R:Read>(reader:R) -> anyhow::Result<Ballots> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);
    let mut ballots = Ballots::new();
    for record in rdr.records() {
        let record = record?;
        let Some(voter) = record.get(0) else { continue };
        let fields : Vec<&str> = record.iter().skip(1).map(|f|f.trim()).collect();
        if voter.trim().is_empty() && fields.iter().all(|f|f.is_empty()) { continue; } // blank line
        let used = fields.iter().rposition(|f|!f.is_empty()).map(|p|p+1).unwrap_or(0);
        let preferences : Vec<Preference> = fields[..used].iter().map(|&f|if f.is_empty() { Preference::Blank } else { Preference::from(f) }).collect();
        if ballots.insert(voter.trim().to_string(),preferences).is_some() {
            return Err(anyhow!("Voter {} appears more than once",voter.trim()));
        }
    }
    Ok(ballots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let ballots = parse_csv_ballots("v1,A,B,C\nv2,B,,\nv3,C,,A\n\n".as_bytes()).unwrap();
        assert_eq!(ballots.len(),3);
        assert_eq!(ballots["v1"],vec![Preference::from("A"),Preference::from("B"),Preference::from("C")]);
        assert_eq!(ballots["v2"],vec![Preference::from("B")]);
        assert_eq!(ballots["v3"],vec![Preference::from("C"),Preference::Blank,Preference::from("A")]);
    }

    #[test]
    fn test_parse_csv_repeated_voter() {
        assert!(parse_csv_ballots("v1,A\nv1,B\n".as_bytes()).is_err());
    }

    #[test]
    fn test_parse_json() {
        let data : ElectionData = serde_json::from_str(r#"{"options":["A","B"],"ballots":{"v1":["A"],"v2":["B",7],"v3":[null]}}"#).unwrap();
        assert_eq!(data.options,vec!["A","B"]);
        assert_eq!(data.num_ballots(),3);
        assert_eq!(data.num_partial_ballots(),2);
        assert_eq!(data.ballots["v2"][1],Preference::Other("7".to_string()));
        assert_eq!(data.ballots["v3"][0],Preference::Blank);
    }
}
