// Copyright 2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.

//! The things being voted for, called options (or candidates).

use std::collections::HashSet;
use serde::{Serialize,Deserialize};
use crate::errors::ValidationError;

/// The options in a contest, in the order they were given.
///
/// Every option is trimmed and non-empty, there are no duplicates, and there is at least one option.
/// All the mutators preserve this; if they would break it they return an error and change nothing.
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(try_from="Vec<String>",into="Vec<String>")]
pub struct OptionList {
    options : Vec<String>,
}

impl OptionList {
    /// Trim and check a list of options.
    /// ```
    /// use irv::options::OptionList;
    /// let options = OptionList::new(vec![" A ".to_string(),"B".to_string()]).unwrap();
    /// assert_eq!(options.to_vec(),vec!["A".to_string(),"B".to_string()]);
    /// assert!(OptionList::new(vec!["A".to_string(),"A ".to_string()]).is_err());
    /// ```
    pub fn new<S:AsRef<str>>(options:impl IntoIterator<Item=S>) -> Result<Self,ValidationError> {
        let mut res : Vec<String> = vec![];
        let mut seen : HashSet<String> = HashSet::new();
        for option in options {
            let option = trim_option(option.as_ref())?;
            if !seen.insert(option.clone()) { return Err(ValidationError::DuplicateOption(option)); }
            res.push(option);
        }
        if res.is_empty() { return Err(ValidationError::EmptyOptions); }
        Ok(OptionList{options:res})
    }

    pub fn len(&self) -> usize { self.options.len() }
    /// Never true, provided for completeness.
    pub fn is_empty(&self) -> bool { self.options.is_empty() }
    pub fn contains(&self,option:&str) -> bool { self.options.iter().any(|o|o==option) }
    pub fn iter(&self) -> impl Iterator<Item=&String> { self.options.iter() }
    /// Position in the list, 0 being first.
    pub fn position(&self,option:&str) -> Option<usize> { self.options.iter().position(|o|o==option) }
    /// A copy of the options. Changing it does not affect this list.
    pub fn to_vec(&self) -> Vec<String> { self.options.clone() }

    /// Add a new option at the end.
    pub fn add(&mut self,option:&str) -> Result<(),ValidationError> {
        let option = trim_option(option)?;
        if self.contains(&option) { return Err(ValidationError::OptionAlreadyExists(option)); }
        self.options.push(option);
        Ok(())
    }

    /// Remove an existing option. The last option cannot be removed.
    pub fn remove(&mut self,option:&str) -> Result<(),ValidationError> {
        let option = option.trim();
        let position = self.position(option).ok_or_else(||ValidationError::OptionDoesNotExist(option.to_string()))?;
        if self.options.len()==1 { return Err(ValidationError::WouldRemoveLastOption(option.to_string())); }
        self.options.remove(position);
        Ok(())
    }
}

fn trim_option(option:&str) -> Result<String,ValidationError> {
    let trimmed = option.trim();
    if trimmed.is_empty() { Err(ValidationError::BlankOption) } else { Ok(trimmed.to_string()) }
}

impl TryFrom<Vec<String>> for OptionList {
    type Error = ValidationError;
    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> { OptionList::new(value) }
}

impl From<OptionList> for Vec<String> {
    fn from(value: OptionList) -> Self { value.options }
}
